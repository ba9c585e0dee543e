// landform CLI - headless land-document form auto-fill

mod autofill;
mod exit_codes;
mod lookup;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use landform_recon::{AreaUnit, AutofillConfig, Gazetteer, ReconError};

use exit_codes::{recon_exit_code, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "landform")]
#[command(about = "Auto-fill land listing forms from recognized ownership documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile recognizer output into form updates
    #[command(after_help = "\
Examples:
  landform fill scan.json
  landform fill scan.json --state form.json --apply --json
  landform fill scan.json --config landform.toml --gazetteer districts.toml
  cat scan.json | landform fill -")]
    Fill {
        /// Recognizer output JSON (`-` for stdin)
        recognizer: PathBuf,

        /// Current form state JSON
        #[arg(long)]
        state: Option<PathBuf>,

        /// Auto-fill settings TOML
        #[arg(long, env = "LANDFORM_CONFIG")]
        config: Option<PathBuf>,

        /// Substitute gazetteer table TOML (default: built-in Nepal table)
        #[arg(long)]
        gazetteer: Option<PathBuf>,

        /// Output JSON to stdout instead of tab-separated lines
        #[arg(long)]
        json: bool,

        /// Print the form state after applying the updates
        #[arg(long)]
        apply: bool,
    },

    /// Resolve district / municipality text to a gazetteer triple
    #[command(after_help = "\
Examples:
  landform resolve --district 'Kathmandu Municipality' --municipality 'Tokha'
  landform resolve --district Kaski --json")]
    Resolve {
        /// Recognized district text
        #[arg(long)]
        district: Option<String>,

        /// Recognized municipality text
        #[arg(long)]
        municipality: Option<String>,

        /// Auto-fill settings TOML
        #[arg(long, env = "LANDFORM_CONFIG")]
        config: Option<PathBuf>,

        /// Substitute gazetteer table TOML
        #[arg(long)]
        gazetteer: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Parse a free-text area expression
    #[command(after_help = "\
Examples:
  landform parse-area '5 ropani 2 aana'
  landform parse-area '1369' --fallback square-foot")]
    ParseArea {
        /// Area text, e.g. "12.5 sq ft" or "५ रोपनी"
        text: String,

        /// Unit used when the text names none
        #[arg(long, default_value = "aana")]
        fallback: AreaUnit,

        #[arg(long)]
        json: bool,
    },

    /// List provinces, a province's districts, or a district's municipalities
    #[command(after_help = "\
Examples:
  landform gazetteer
  landform gazetteer --province 'Gandaki Pradesh'
  landform gazetteer --district Kaski --json")]
    Gazetteer {
        #[arg(long, conflicts_with = "district")]
        province: Option<String>,

        #[arg(long)]
        district: Option<String>,

        /// Substitute gazetteer table TOML
        #[arg(long)]
        table: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Validate an auto-fill config without running
    ValidateConfig {
        /// Path to the landform.toml config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fill { recognizer, state, config, gazetteer, json, apply } => {
            autofill::cmd_fill(recognizer, state, config, gazetteer, json, apply)
        }
        Commands::Resolve { district, municipality, config, gazetteer, json } => {
            lookup::cmd_resolve(district, municipality, config, gazetteer, json)
        }
        Commands::ParseArea { text, fallback, json } => lookup::cmd_parse_area(&text, fallback, json),
        Commands::Gazetteer { province, district, table, json } => {
            lookup::cmd_gazetteer(province, district, table, json)
        }
        Commands::ValidateConfig { config } => lookup::cmd_validate_config(&config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// Engine logs go to stderr; `RUST_LOG=debug` shows every match decision.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    /// Create error from an engine error with its registry exit code.
    pub fn recon(err: ReconError) -> Self {
        let code = recon_exit_code(&err);
        let hint = match &err {
            ReconError::UpstreamFailure(_) => {
                Some("re-scan the document or fill the form by hand".to_string())
            }
            ReconError::NoMagnitude { .. } => {
                Some("area text must contain a number, e.g. \"5 ropani\"".to_string())
            }
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

// ============================================================================
// Shared loaders
// ============================================================================

/// Read a file, or stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
            .map_err(|e| CliError::io(format!("cannot read stdin: {e}")))?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))
}

pub(crate) fn load_config(path: Option<&Path>) -> Result<AutofillConfig, CliError> {
    match path {
        Some(path) => {
            let text = read_input(path)?;
            AutofillConfig::from_toml(&text).map_err(CliError::recon)
        }
        None => Ok(AutofillConfig::default()),
    }
}

pub(crate) fn load_gazetteer(path: &Path) -> Result<Gazetteer, CliError> {
    let text = read_input(path)?;
    Gazetteer::from_toml(&text).map_err(|e| {
        CliError::recon(e).with_hint(format!("check the gazetteer table {}", path.display()))
    })
}

pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))
}
