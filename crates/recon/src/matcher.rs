use crate::normalize::{fold, AdminTokens};

/// Which stage of the cascade produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Substring,
    NormalizedExact,
    NormalizedSubstring,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Substring => write!(f, "substring"),
            Self::NormalizedExact => write!(f, "normalized_exact"),
            Self::NormalizedSubstring => write!(f, "normalized_substring"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameMatch<'a> {
    pub name: &'a str,
    pub index: usize,
    pub kind: MatchKind,
}

/// Cascading free-text → canonical-name matcher.
///
/// Stages run in order (exact, substring, normalized exact, normalized
/// substring); the first stage with any hit wins and, within a stage, the
/// earliest option wins. There is no similarity score: either a stage
/// recognizes the candidate or the result is `None`.
#[derive(Debug, Clone, Default)]
pub struct NameMatcher {
    tokens: AdminTokens,
    min_substring_len: usize,
}

impl NameMatcher {
    pub fn new(tokens: AdminTokens) -> Self {
        Self { tokens, min_substring_len: 0 }
    }

    /// Skip substring comparisons when the shorter side has fewer than
    /// `len` characters. 0 disables the guard.
    pub fn with_min_substring_len(mut self, len: usize) -> Self {
        self.min_substring_len = len;
        self
    }

    pub fn tokens(&self) -> &AdminTokens {
        &self.tokens
    }

    pub fn best_match<'a, S: AsRef<str>>(&self, candidate: &str, options: &'a [S]) -> Option<&'a str> {
        self.best_match_detailed(candidate, options).map(|m| m.name)
    }

    pub fn best_match_detailed<'a, S: AsRef<str>>(
        &self,
        candidate: &str,
        options: &'a [S],
    ) -> Option<NameMatch<'a>> {
        let folded = fold(candidate);
        if folded.is_empty() || options.is_empty() {
            return None;
        }

        let folded_options: Vec<String> = options.iter().map(|o| fold(o.as_ref())).collect();
        let hit = self
            .exact_or_substring(&folded, &folded_options)
            .map(|(i, exact)| (i, if exact { MatchKind::Exact } else { MatchKind::Substring }))
            .or_else(|| {
                let stripped = self.tokens.strip(&folded);
                if stripped.is_empty() {
                    return None;
                }
                let stripped_options: Vec<String> =
                    folded_options.iter().map(|o| self.tokens.strip(o)).collect();
                self.exact_or_substring(&stripped, &stripped_options).map(|(i, exact)| {
                    let kind = if exact {
                        MatchKind::NormalizedExact
                    } else {
                        MatchKind::NormalizedSubstring
                    };
                    (i, kind)
                })
            });

        let (index, kind) = hit?;
        let name = options[index].as_ref();
        log::debug!("matched '{candidate}' -> '{name}' ({kind})");
        Some(NameMatch { name, index, kind })
    }

    /// Index of the first exact hit, else the first substring hit. The bool
    /// is true for exact. Empty options never match.
    fn exact_or_substring(&self, candidate: &str, options: &[String]) -> Option<(usize, bool)> {
        if let Some(i) = options.iter().position(|o| !o.is_empty() && o == candidate) {
            return Some((i, true));
        }
        options
            .iter()
            .position(|o| self.substring_related(candidate, o))
            .map(|i| (i, false))
    }

    fn substring_related(&self, a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        let shorter = a.chars().count().min(b.chars().count());
        if shorter < self.min_substring_len {
            return false;
        }
        a.contains(b) || b.contains(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KATHMANDU: &[&str] = &[
        "Kathmandu Metropolitan",
        "Kageshwari Manohara Municipality",
        "Kirtipur Municipality",
        "Tokha Municipality",
    ];

    #[test]
    fn empty_candidate_or_options_is_none() {
        let m = NameMatcher::default();
        assert_eq!(m.best_match("", KATHMANDU), None);
        assert_eq!(m.best_match("   ", KATHMANDU), None);
        let none: &[&str] = &[];
        assert_eq!(m.best_match("Kirtipur", none), None);
    }

    #[test]
    fn exact_is_case_and_space_insensitive() {
        let m = NameMatcher::default();
        let hit = m.best_match_detailed("  tokha MUNICIPALITY ", KATHMANDU).unwrap();
        assert_eq!(hit.name, "Tokha Municipality");
        assert_eq!(hit.kind, MatchKind::Exact);
        assert_eq!(hit.index, 3);
    }

    #[test]
    fn substring_either_direction() {
        let m = NameMatcher::default();
        let hit = m.best_match_detailed("Kirtipur", KATHMANDU).unwrap();
        assert_eq!(hit.name, "Kirtipur Municipality");
        assert_eq!(hit.kind, MatchKind::Substring);

        let districts = ["Lalitpur", "Bhaktapur", "Kathmandu"];
        let hit = m.best_match_detailed("Kathmandu Municipality", &districts).unwrap();
        assert_eq!(hit.name, "Kathmandu");
        assert_eq!(hit.kind, MatchKind::Substring);
    }

    #[test]
    fn exact_beats_earlier_substring() {
        let m = NameMatcher::default();
        let options = ["Madi Municipality", "Madi"];
        assert_eq!(m.best_match("madi", &options), Some("Madi"));
    }

    #[test]
    fn first_option_wins_within_stage() {
        let m = NameMatcher::default();
        let options = ["Sunkoshi East", "Sunkoshi West"];
        assert_eq!(m.best_match("Sunkoshi", &options), Some("Sunkoshi East"));
    }

    #[test]
    fn normalized_stage_bridges_qualifier_differences() {
        let m = NameMatcher::default();
        let hit = m
            .best_match_detailed("Kageshwari Manohara Nagarpalika", KATHMANDU)
            .unwrap();
        assert_eq!(hit.name, "Kageshwari Manohara Municipality");
        assert_eq!(hit.kind, MatchKind::NormalizedExact);

        let hit = m
            .best_match_detailed("Kathmandu Metropolitan City", &["Kathmandu Sub-Metropolitan"])
            .unwrap();
        assert_eq!(hit.kind, MatchKind::NormalizedExact);
    }

    #[test]
    fn normalized_substring() {
        let m = NameMatcher::default();
        let options = ["Chautara Sangachokgadhi Municipality"];
        let hit = m.best_match_detailed("Sangachokgadhi Nagarpalika", &options).unwrap();
        assert_eq!(hit.kind, MatchKind::NormalizedSubstring);
    }

    #[test]
    fn qualifier_alone_matches_nothing() {
        let m = NameMatcher::default();
        let options = ["Bidur", "Kakani"];
        assert_eq!(m.best_match("Municipality", &options), None);
    }

    #[test]
    fn unrecognized_is_none() {
        let m = NameMatcher::default();
        assert_eq!(m.best_match("Nowhere", KATHMANDU), None);
    }

    #[test]
    fn min_substring_len_guards_short_candidates() {
        let options = ["Ilam Municipality", "Mai"];
        let open = NameMatcher::default();
        assert_eq!(open.best_match("am", &options), Some("Ilam Municipality"));

        let guarded = NameMatcher::default().with_min_substring_len(3);
        assert_eq!(guarded.best_match("am", &options), None);
        // Exact matches are never guarded.
        assert_eq!(guarded.best_match("mai", &options), Some("Mai"));
    }
}
