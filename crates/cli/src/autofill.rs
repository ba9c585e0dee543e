//! `landform fill` — recognizer output to ordered form updates.

use std::path::PathBuf;

use landform_recon::model::{FormState, RecognizerOutput};
use landform_recon::{FieldReconciler, Gazetteer};

use crate::{load_config, load_gazetteer, read_input, to_json, CliError};

pub fn cmd_fill(
    recognizer_path: PathBuf,
    state_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    gazetteer_path: Option<PathBuf>,
    json_output: bool,
    apply: bool,
) -> Result<(), CliError> {
    let output: RecognizerOutput = serde_json::from_str(&read_input(&recognizer_path)?)
        .map_err(|e| {
            CliError::args(format!("invalid recognizer output {}: {e}", recognizer_path.display()))
                .with_hint("expected {\"success\": bool, \"extracted_fields\": {...}}")
        })?;

    let mut state = match state_path {
        Some(ref path) => serde_json::from_str::<FormState>(&read_input(path)?).map_err(|e| {
            CliError::args(format!("invalid form state {}: {e}", path.display()))
        })?,
        None => FormState::new(),
    };

    let config = load_config(config_path.as_deref())?;

    let custom;
    let gazetteer = match gazetteer_path {
        Some(ref path) => {
            custom = load_gazetteer(path)?;
            &custom
        }
        None => Gazetteer::nepal(),
    };

    let reconciler = FieldReconciler::from_config(gazetteer, &config);
    let report = reconciler.autofill(&output, &state).map_err(CliError::recon)?;

    if apply {
        state.apply_all(&report.updates);
        if json_output {
            println!("{}", to_json(&state)?);
        } else {
            for (field, entry) in state.iter() {
                println!("{field}\t{}", entry.value);
            }
        }
    } else if json_output {
        println!("{}", to_json(&report)?);
    } else {
        for update in &report.updates {
            println!("{}\t{}", update.field, update.value);
        }
    }

    // Human summary to stderr
    eprintln!("{}", report.summary_message());
    for issue in &report.issues {
        eprintln!("note: {}: {}", issue.field, issue.message);
    }
    if !report.preserved.is_empty() {
        let kept: Vec<&str> = report.preserved.iter().map(|f| f.as_str()).collect();
        eprintln!("kept user-entered: {}", kept.join(", "));
    }

    Ok(())
}
