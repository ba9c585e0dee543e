//! Single-purpose lookups: `resolve`, `parse-area`, `gazetteer`,
//! `validate-config`.

use std::path::{Path, PathBuf};

use landform_recon::{parse_area, AreaUnit, AutofillConfig, Gazetteer, HierarchyResolver};

use crate::exit_codes::{EXIT_INVALID_CONFIG, EXIT_NO_MATCH};
use crate::{load_config, load_gazetteer, read_input, to_json, CliError};

fn no_match(msg: impl Into<String>) -> CliError {
    CliError { code: EXIT_NO_MATCH, message: msg.into(), hint: None }
}

// ============================================================================
// resolve
// ============================================================================

pub fn cmd_resolve(
    district: Option<String>,
    municipality: Option<String>,
    config_path: Option<PathBuf>,
    gazetteer_path: Option<PathBuf>,
    json_output: bool,
) -> Result<(), CliError> {
    if district.is_none() && municipality.is_none() {
        return Err(CliError::args("nothing to resolve")
            .with_hint("pass --district and/or --municipality"));
    }

    let config = load_config(config_path.as_deref())?;
    let custom;
    let gazetteer = match gazetteer_path {
        Some(ref path) => {
            custom = load_gazetteer(path)?;
            &custom
        }
        None => Gazetteer::nepal(),
    };

    let resolver = HierarchyResolver::new(gazetteer, config.build_matcher())
        .with_leaf_fallback(config.resolver.leaf_fallback);
    let (location, issues) =
        resolver.resolve_with_outcome(district.as_deref(), municipality.as_deref());

    if location.district.is_none() {
        let err = no_match(match &district {
            Some(text) => format!("no district matched '{text}'"),
            None => "district text missing and no unique municipality match".to_string(),
        });
        return Err(if config.resolver.leaf_fallback {
            err
        } else {
            err.with_hint("set [resolver] leaf_fallback = true to search by municipality alone")
        });
    }

    if json_output {
        println!("{}", to_json(&location)?);
    } else {
        println!("province\t{}", location.province.as_deref().unwrap_or_default());
        println!("district\t{}", location.district.as_deref().unwrap_or_default());
        if let Some(m) = &location.municipality {
            println!("municipality\t{m}");
        }
    }
    for issue in &issues {
        eprintln!("note: {issue}");
    }
    Ok(())
}

// ============================================================================
// parse-area
// ============================================================================

pub fn cmd_parse_area(text: &str, fallback: AreaUnit, json_output: bool) -> Result<(), CliError> {
    let area = parse_area(text, fallback).map_err(CliError::recon)?;
    if json_output {
        println!("{}", to_json(&area)?);
    } else {
        println!("{} {}", area.magnitude_text, area.unit);
        if !area.unit_detected {
            eprintln!("note: no unit in '{text}', assumed {fallback}");
        }
    }
    Ok(())
}

// ============================================================================
// gazetteer
// ============================================================================

pub fn cmd_gazetteer(
    province: Option<String>,
    district: Option<String>,
    table_path: Option<PathBuf>,
    json_output: bool,
) -> Result<(), CliError> {
    let custom;
    let gazetteer = match table_path {
        Some(ref path) => {
            custom = load_gazetteer(path)?;
            &custom
        }
        None => Gazetteer::nepal(),
    };

    let names: &[String] = match (&province, &district) {
        (Some(p), _) => {
            let districts = gazetteer.districts_of(p);
            if districts.is_empty() {
                return Err(no_match(format!("unknown province '{p}'"))
                    .with_hint("run `landform gazetteer` to list provinces"));
            }
            districts
        }
        (None, Some(d)) => {
            if gazetteer.province_of(d).is_none() {
                return Err(no_match(format!("unknown district '{d}'")));
            }
            gazetteer.municipalities_of(d)
        }
        (None, None) => gazetteer.all_provinces(),
    };

    if json_output {
        println!("{}", to_json(&names)?);
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

// ============================================================================
// validate-config
// ============================================================================

pub fn cmd_validate_config(path: &Path) -> Result<(), CliError> {
    let text = read_input(path)?;
    let config = AutofillConfig::from_toml(&text).map_err(|e| CliError {
        code: EXIT_INVALID_CONFIG,
        message: format!("{}: {e}", path.display()),
        hint: None,
    })?;

    let matcher = config.build_matcher();
    eprintln!("valid: {}", path.display());
    eprintln!("  default unit:      {}", config.default_unit);
    eprintln!("  admin tokens:      {}", matcher.tokens().len());
    eprintln!("  min substring len: {}", config.matcher.min_substring_len);
    eprintln!(
        "  leaf fallback:     {}",
        if config.resolver.leaf_fallback { "on" } else { "off" }
    );
    Ok(())
}
