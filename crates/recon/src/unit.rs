use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ReconError;

/// Land-area units a listing can be recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AreaUnit {
    Ropani,
    Aana,
    Paisa,
    Dam,
    Bigha,
    SquareFoot,
    SquareMeter,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 7] = [
        Self::Ropani,
        Self::Aana,
        Self::Paisa,
        Self::Dam,
        Self::Bigha,
        Self::SquareFoot,
        Self::SquareMeter,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Ropani => "ropani",
            Self::Aana => "aana",
            Self::Paisa => "paisa",
            Self::Dam => "dam",
            Self::Bigha => "bigha",
            Self::SquareFoot => "square-foot",
            Self::SquareMeter => "square-meter",
        }
    }
}

impl Default for AreaUnit {
    fn default() -> Self {
        Self::Aana
    }
}

impl std::fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AreaUnit {
    type Err = ReconError;

    /// Accepts the canonical symbol and the short form values older
    /// listings were saved with (`sqft`, `sqm`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        let unit = match folded.as_str() {
            "sqft" | "sq-ft" | "square_foot" => Self::SquareFoot,
            "sqm" | "sq-m" | "square_meter" => Self::SquareMeter,
            other => Self::ALL
                .into_iter()
                .find(|u| u.symbol() == other)
                .ok_or_else(|| ReconError::ConfigValidation(format!("unknown area unit '{s}'")))?,
        };
        Ok(unit)
    }
}

/// One way a unit shows up in recognized text.
#[derive(Debug, Clone, Copy)]
enum Marker {
    /// Anywhere in the lower-cased text.
    Contains(&'static str),
    /// As a whole Latin word (letters-only run).
    Word(&'static str),
}

/// Unit detection order. First unit with any marker present wins, so a
/// compound "5 ropani 2 aana 3 paisa" resolves to the leading unit.
/// Square-meter precedes square-foot because bare `sq` / `वर्ग` mean feet.
const UNIT_MARKERS: &[(AreaUnit, &[Marker])] = &[
    (AreaUnit::Ropani, &[Marker::Contains("ropani"), Marker::Contains("रोपनी")]),
    (
        AreaUnit::Aana,
        &[Marker::Contains("aana"), Marker::Word("ana"), Marker::Contains("आना")],
    ),
    (AreaUnit::Paisa, &[Marker::Contains("paisa"), Marker::Contains("पैसा")]),
    (AreaUnit::Dam, &[Marker::Word("dam"), Marker::Contains("दाम")]),
    (AreaUnit::Bigha, &[Marker::Contains("bigha"), Marker::Contains("बिघा")]),
    (
        AreaUnit::SquareMeter,
        &[
            Marker::Contains("sq m"),
            Marker::Contains("sq. m"),
            Marker::Word("sqm"),
            Marker::Contains("square met"),
            Marker::Contains("square-met"),
            Marker::Contains("m2"),
            Marker::Contains("m²"),
            Marker::Contains("वर्ग मिटर"),
        ],
    ),
    (
        AreaUnit::SquareFoot,
        &[
            Marker::Contains("sq ft"),
            Marker::Contains("sq. ft"),
            Marker::Word("sqft"),
            Marker::Contains("square f"),
            Marker::Contains("square-f"),
            Marker::Word("ft"),
            Marker::Word("feet"),
            Marker::Word("sq"),
            Marker::Contains("वर्ग फिट"),
            Marker::Contains("वर्ग"),
        ],
    ),
];

static MAGNITUDE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap());

/// A parsed area: one representative magnitude and the dominant unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaValue {
    pub magnitude: f64,
    /// The token the magnitude was read from, for display without float noise.
    pub magnitude_text: String,
    pub unit: AreaUnit,
    /// False when no marker was recognized and `unit` is the fallback.
    pub unit_detected: bool,
}

/// Parse a free-text area expression.
///
/// The magnitude is the first decimal token; the unit is detected
/// independently from the whole text and falls back to `fallback`.
pub fn parse_area(text: &str, fallback: AreaUnit) -> Result<AreaValue, ReconError> {
    let ascii = fold_devanagari_digits(text);
    let token = MAGNITUDE
        .find(&ascii)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ReconError::NoMagnitude { text: text.to_string() })?;
    let magnitude: f64 = token
        .parse()
        .map_err(|_| ReconError::NoMagnitude { text: text.to_string() })?;

    let detected = detect_unit(&text.to_lowercase());
    Ok(AreaValue {
        magnitude,
        magnitude_text: token,
        unit: detected.unwrap_or(fallback),
        unit_detected: detected.is_some(),
    })
}

/// First unit (in priority order) with a marker present in `lowered`.
pub fn detect_unit(lowered: &str) -> Option<AreaUnit> {
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .collect();

    UNIT_MARKERS.iter().find_map(|(unit, markers)| {
        let hit = markers.iter().any(|marker| match marker {
            Marker::Contains(s) => lowered.contains(s),
            Marker::Word(w) => words.contains(w),
        });
        hit.then_some(*unit)
    })
}

/// Map Devanagari digits (U+0966..U+096F) to ASCII.
fn fold_devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{0966}'..='\u{096F}' => {
                char::from(b'0' + (c as u32 - 0x0966) as u8)
            }
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> AreaValue {
        parse_area(text, AreaUnit::Aana).unwrap()
    }

    #[test]
    fn single_unit_expressions() {
        let v = parse("5 ropani");
        assert_eq!(v.magnitude, 5.0);
        assert_eq!(v.unit, AreaUnit::Ropani);
        assert!(v.unit_detected);

        let v = parse("12.5 sq ft");
        assert_eq!(v.magnitude, 12.5);
        assert_eq!(v.magnitude_text, "12.5");
        assert_eq!(v.unit, AreaUnit::SquareFoot);
    }

    #[test]
    fn no_number_is_no_magnitude() {
        let err = parse_area("abc", AreaUnit::Aana).unwrap_err();
        assert_eq!(err, ReconError::NoMagnitude { text: "abc".into() });
        assert!(parse_area("ropani", AreaUnit::Aana).is_err());
        assert!(parse_area("", AreaUnit::Aana).is_err());
    }

    #[test]
    fn compound_expression_takes_first_number_and_leading_unit() {
        let v = parse("5 ropani 2 aana 3 paisa");
        assert_eq!(v.magnitude, 5.0);
        assert_eq!(v.unit, AreaUnit::Ropani);

        let v = parse("2 aana 3 paisa");
        assert_eq!(v.unit, AreaUnit::Aana);
    }

    #[test]
    fn native_script_units_and_digits() {
        let v = parse("५ रोपनी");
        assert_eq!(v.magnitude, 5.0);
        assert_eq!(v.unit, AreaUnit::Ropani);

        let v = parse("१२.२५ वर्ग फिट");
        assert_eq!(v.magnitude, 12.25);
        assert_eq!(v.unit, AreaUnit::SquareFoot);

        assert_eq!(parse("३ बिघा").unit, AreaUnit::Bigha);
        assert_eq!(parse("४ पैसा").unit, AreaUnit::Paisa);
        assert_eq!(parse("४ दाम").unit, AreaUnit::Dam);
    }

    #[test]
    fn square_meter_before_square_foot() {
        assert_eq!(parse("250 sq m").unit, AreaUnit::SquareMeter);
        assert_eq!(parse("250 sq. meters").unit, AreaUnit::SquareMeter);
        assert_eq!(parse("250 m2").unit, AreaUnit::SquareMeter);
        assert_eq!(parse("१०० वर्ग मिटर").unit, AreaUnit::SquareMeter);
        assert_eq!(parse("1369 sqft").unit, AreaUnit::SquareFoot);
        assert_eq!(parse("1369 Sq.Ft.").unit, AreaUnit::SquareFoot);
        assert_eq!(parse("1369 square feet").unit, AreaUnit::SquareFoot);
        assert_eq!(parse("1369 square-foot").unit, AreaUnit::SquareFoot);
        assert_eq!(parse("80 square-meter").unit, AreaUnit::SquareMeter);
    }

    #[test]
    fn word_markers_do_not_fire_inside_words() {
        // "dam" inside "Damak" is a place name, not a unit.
        let v = parse_area("Damak 4", AreaUnit::Bigha).unwrap();
        assert_eq!(v.unit, AreaUnit::Bigha);
        assert!(!v.unit_detected);
    }

    #[test]
    fn falls_back_when_no_marker() {
        let v = parse_area("0-2-1-3", AreaUnit::Ropani).unwrap();
        assert_eq!(v.magnitude, 0.0);
        assert_eq!(v.unit, AreaUnit::Ropani);
        assert!(!v.unit_detected);
    }

    #[test]
    fn unit_from_str_accepts_legacy_values() {
        assert_eq!("sqft".parse::<AreaUnit>().unwrap(), AreaUnit::SquareFoot);
        assert_eq!("sqm".parse::<AreaUnit>().unwrap(), AreaUnit::SquareMeter);
        assert_eq!(" Ropani ".parse::<AreaUnit>().unwrap(), AreaUnit::Ropani);
        assert_eq!("square-meter".parse::<AreaUnit>().unwrap(), AreaUnit::SquareMeter);
        assert!("acre".parse::<AreaUnit>().is_err());
    }

    #[test]
    fn unit_serializes_as_symbol() {
        let json = serde_json::to_string(&AreaUnit::SquareFoot).unwrap();
        assert_eq!(json, "\"square-foot\"");
        let back: AreaUnit = serde_json::from_str("\"bigha\"").unwrap();
        assert_eq!(back, AreaUnit::Bigha);
    }
}
