use std::fmt;

use crate::model::Level;

#[derive(Debug, Clone, PartialEq)]
pub enum ReconError {
    /// Area text contains no parseable number.
    NoMagnitude { text: String },
    /// A name candidate matched no gazetteer entry at its level.
    NoMatch { level: Level, candidate: String },
    /// The recognizer reported failure; carries its message unchanged.
    UpstreamFailure(String),
    /// Gazetteer table violates the tree / sibling-uniqueness invariants.
    Gazetteer(String),
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (blank token, unknown unit, etc.).
    ConfigValidation(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMagnitude { text } => write!(f, "no numeric magnitude in area text '{text}'"),
            Self::NoMatch { level, candidate } => {
                write!(f, "{level} '{candidate}' matched no gazetteer entry")
            }
            Self::UpstreamFailure(msg) => write!(f, "{msg}"),
            Self::Gazetteer(msg) => write!(f, "invalid gazetteer: {msg}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}
