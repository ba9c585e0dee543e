use serde::Deserialize;

use crate::error::ReconError;
use crate::matcher::NameMatcher;
use crate::normalize::AdminTokens;
use crate::unit::AreaUnit;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Auto-fill settings. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutofillConfig {
    /// Unit assumed when area text carries no marker and the form has none.
    #[serde(default)]
    pub default_unit: AreaUnit,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

// ---------------------------------------------------------------------------
// Matcher + Resolver
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatcherConfig {
    /// Shortest side length for substring matching. 0 = unguarded.
    #[serde(default)]
    pub min_substring_len: usize,
    /// Appended to the built-in administrative qualifier list.
    #[serde(default)]
    pub extra_admin_tokens: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    #[serde(default)]
    pub leaf_fallback: bool,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl AutofillConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: AutofillConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        if let Some(i) = self
            .matcher
            .extra_admin_tokens
            .iter()
            .position(|t| t.trim().is_empty())
        {
            return Err(ReconError::ConfigValidation(format!(
                "matcher.extra_admin_tokens[{i}] is blank"
            )));
        }
        Ok(())
    }

    /// Matcher with the built-in qualifiers plus any configured extras.
    pub fn build_matcher(&self) -> NameMatcher {
        let mut tokens = AdminTokens::default();
        tokens.extend(self.matcher.extra_admin_tokens.iter().map(String::as_str));
        NameMatcher::new(tokens).with_min_substring_len(self.matcher.min_substring_len)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
