use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ReconError;
use crate::unit::AreaValue;

// ---------------------------------------------------------------------------
// Recognizer input
// ---------------------------------------------------------------------------

/// Recognizer keys this crate reads. Anything else is carried through
/// `ExtractedFields` untouched.
pub mod keys {
    pub const OWNER_NAME: &str = "owner_name";
    pub const DISTRICT: &str = "district";
    pub const MUNICIPALITY: &str = "municipality";
    pub const WARD_NUMBER: &str = "ward_number";
    pub const PLOT_NUMBER: &str = "plot_number";
    pub const AREA: &str = "area";
}

/// Field name → raw recognized text, in recognizer order.
///
/// `null` values are dropped on input: a missing key and a `null` key both
/// mean "not recognized". Numbers are kept as their decimal text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    entries: Vec<(String, String)>,
}

impl ExtractedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Trimmed value, or `None` when absent or blank.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Number of fields carrying a non-blank value.
    pub fn non_empty_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| !v.trim().is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExtractedFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

impl Serialize for ExtractedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExtractedFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = ExtractedFields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field name to recognized text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut fields = ExtractedFields::new();
                while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
                    match value {
                        serde_json::Value::Null => {}
                        serde_json::Value::String(s) => fields.insert(key, s),
                        serde_json::Value::Number(n) => fields.insert(key, n.to_string()),
                        serde_json::Value::Bool(b) => fields.insert(key, b.to_string()),
                        other => {
                            log::warn!("ignoring non-scalar recognizer field '{key}': {other}");
                        }
                    }
                }
                Ok(fields)
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

/// One response from the document recognizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizerOutput {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub extracted_fields: ExtractedFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl RecognizerOutput {
    pub fn succeeded(fields: ExtractedFields) -> Self {
        Self { success: true, extracted_fields: fields, ..Self::default() }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, error: Some(error.into()), ..Self::default() }
    }
}

// ---------------------------------------------------------------------------
// Gazetteer levels + resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Province,
    District,
    Municipality,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Province => write!(f, "province"),
            Self::District => write!(f, "district"),
            Self::Municipality => write!(f, "municipality"),
        }
    }
}

/// A (province, district, municipality) triple of canonical names.
///
/// Each present level is the true parent of the level below it; a
/// resolver never produces a child without its parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedLocation {
    pub province: Option<String>,
    pub district: Option<String>,
    pub municipality: Option<String>,
}

impl ResolvedLocation {
    pub fn is_empty(&self) -> bool {
        self.province.is_none() && self.district.is_none() && self.municipality.is_none()
    }

    pub fn get(&self, level: Level) -> Option<&str> {
        match level {
            Level::Province => self.province.as_deref(),
            Level::District => self.district.as_deref(),
            Level::Municipality => self.municipality.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// Form fields the reconciler can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    OwnerName,
    Ward,
    PlotNumber,
    Kitta,
    Province,
    District,
    Municipality,
    Area,
    AreaUnit,
}

impl FieldId {
    pub const ALL: [FieldId; 9] = [
        Self::OwnerName,
        Self::Ward,
        Self::PlotNumber,
        Self::Kitta,
        Self::Province,
        Self::District,
        Self::Municipality,
        Self::Area,
        Self::AreaUnit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OwnerName => "owner_name",
            Self::Ward => "ward",
            Self::PlotNumber => "plot_number",
            Self::Kitta => "kitta",
            Self::Province => "province",
            Self::District => "district",
            Self::Municipality => "municipality",
            Self::Area => "area",
            Self::AreaUnit => "area_unit",
        }
    }

    /// Dependent selects reset when this field changes.
    pub fn dependents(&self) -> &'static [FieldId] {
        match self {
            Self::Province => &[Self::District, Self::Municipality],
            Self::District => &[Self::Municipality],
            _ => &[],
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for FieldId {
    fn from(level: Level) -> Self {
        match level {
            Level::Province => Self::Province,
            Level::District => Self::District,
            Level::Municipality => Self::Municipality,
        }
    }
}

/// Who set a field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    UserEntered,
    AutoFilled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub value: String,
    pub provenance: Provenance,
}

/// One write the caller applies to the form, in emitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldUpdate {
    pub field: FieldId,
    pub value: String,
    pub provenance: Provenance,
}

impl FieldUpdate {
    pub fn auto(field: FieldId, value: impl Into<String>) -> Self {
        Self { field, value: value.into(), provenance: Provenance::AutoFilled }
    }
}

/// Destination form. A field absent from the map is empty.
///
/// Mirrors the listing form's dependent selects: changing the province
/// clears an auto-filled district and municipality, changing the district
/// clears an auto-filled municipality. User-entered values are never
/// cleared or overwritten by auto-fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    fields: BTreeMap<FieldId, FieldEntry>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> Option<&FieldEntry> {
        self.fields.get(&field)
    }

    pub fn value(&self, field: FieldId) -> Option<&str> {
        self.fields.get(&field).map(|e| e.value.as_str())
    }

    pub fn provenance(&self, field: FieldId) -> Option<Provenance> {
        self.fields.get(&field).map(|e| e.provenance)
    }

    pub fn is_user_entered(&self, field: FieldId) -> bool {
        self.provenance(field) == Some(Provenance::UserEntered)
    }

    /// A human edit. Always wins; marks the field user-entered.
    pub fn user_edit(&mut self, field: FieldId, value: impl Into<String>) {
        self.assign(field, value.into(), Provenance::UserEntered);
    }

    /// Apply one update, re-checking provenance against the state as it is
    /// now. Returns false when the field is user-entered and the update was
    /// dropped.
    pub fn apply(&mut self, update: &FieldUpdate) -> bool {
        if update.provenance == Provenance::AutoFilled && self.is_user_entered(update.field) {
            log::warn!("not overwriting user-entered field '{}'", update.field);
            return false;
        }
        self.assign(update.field, update.value.clone(), update.provenance);
        true
    }

    /// Apply updates in order; returns how many took effect.
    pub fn apply_all<'a>(&mut self, updates: impl IntoIterator<Item = &'a FieldUpdate>) -> usize {
        updates.into_iter().filter(|u| self.apply(u)).count()
    }

    fn assign(&mut self, field: FieldId, value: String, provenance: Provenance) {
        let changed = self.value(field) != Some(value.as_str());
        self.fields.insert(field, FieldEntry { value, provenance });
        if changed {
            for dependent in field.dependents() {
                if self.provenance(*dependent) == Some(Provenance::AutoFilled) {
                    self.fields.remove(dependent);
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldEntry)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    NoMagnitude,
    NoMatch,
}

/// A recoverable per-field failure: the field is left for manual entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: FieldId,
    pub kind: IssueKind,
    pub message: String,
}

impl FieldIssue {
    /// `None` for errors that are not per-field.
    pub fn from_error(err: &ReconError) -> Option<Self> {
        let (field, kind) = match err {
            ReconError::NoMagnitude { .. } => (FieldId::Area, IssueKind::NoMagnitude),
            ReconError::NoMatch { level, .. } => (FieldId::from(*level), IssueKind::NoMatch),
            _ => return None,
        };
        Some(Self { field, kind, message: err.to_string() })
    }
}

/// Everything one reconciliation produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AutofillReport {
    /// Updates in application order.
    pub updates: Vec<FieldUpdate>,
    /// Non-blank top-level fields in the recognizer output.
    pub extracted_count: usize,
    pub location: ResolvedLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaValue>,
    pub issues: Vec<FieldIssue>,
    /// Fields with a value to write that were left alone because a human
    /// already set them.
    pub preserved: Vec<FieldId>,
}

impl AutofillReport {
    /// Neither district nor municipality resolved.
    pub fn is_partial(&self) -> bool {
        self.location.district.is_none()
    }

    /// One-line confirmation for the person filling the form.
    pub fn summary_message(&self) -> String {
        let mut msg = format!(
            "Extracted {} field(s), auto-filled {}.",
            self.extracted_count,
            self.updates.len()
        );
        if self.is_partial() {
            msg.push_str(" Location could not be matched; please select it manually.");
        }
        msg
    }
}
