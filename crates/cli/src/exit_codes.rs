//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 2       | Universal        | CLI usage error (bad args, bad input)    |
//! | 3       | Universal        | I/O error (unreadable/unwritable file)   |
//! | 10-19   | autofill         | Recognizer, matching, config codes       |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

use landform_recon::ReconError;

// =============================================================================
// Universal (0-3)
// =============================================================================

/// Success - command completed without errors.
/// A `fill` that could not place the location is still a success.
pub const EXIT_SUCCESS: u8 = 0;

/// Usage error - bad arguments, malformed JSON input.
pub const EXIT_USAGE: u8 = 2;

/// I/O error - input file missing or unreadable, output not writable.
pub const EXIT_IO: u8 = 3;

// =============================================================================
// Autofill (10-19)
// =============================================================================

/// The recognizer reported failure (`success: false`).
pub const EXIT_UPSTREAM: u8 = 10;

/// Nothing resolved: `resolve` matched no district, or a gazetteer
/// lookup named an unknown province/district.
pub const EXIT_NO_MATCH: u8 = 11;

/// Config or gazetteer table failed to parse or validate.
pub const EXIT_INVALID_CONFIG: u8 = 12;

/// Area text has no numeric magnitude.
pub const EXIT_AREA_PARSE: u8 = 13;

/// Map an engine error to its exit code.
pub fn recon_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::UpstreamFailure(_) => EXIT_UPSTREAM,
        ReconError::NoMatch { .. } => EXIT_NO_MATCH,
        ReconError::NoMagnitude { .. } => EXIT_AREA_PARSE,
        ReconError::Gazetteer(_) | ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => {
            EXIT_INVALID_CONFIG
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landform_recon::model::Level;

    #[test]
    fn every_engine_error_has_a_specific_code() {
        let cases = [
            (ReconError::UpstreamFailure("x".into()), EXIT_UPSTREAM),
            (ReconError::NoMatch { level: Level::District, candidate: "x".into() }, EXIT_NO_MATCH),
            (ReconError::NoMagnitude { text: "x".into() }, EXIT_AREA_PARSE),
            (ReconError::Gazetteer("x".into()), EXIT_INVALID_CONFIG),
            (ReconError::ConfigParse("x".into()), EXIT_INVALID_CONFIG),
            (ReconError::ConfigValidation("x".into()), EXIT_INVALID_CONFIG),
        ];
        for (err, code) in cases {
            assert_eq!(recon_exit_code(&err), code, "{err}");
            assert_ne!(code, EXIT_SUCCESS);
        }
    }
}
