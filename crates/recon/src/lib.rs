//! `landform-recon` — Land-document auto-fill reconciliation.
//!
//! Pure engine crate: receives recognizer output and the current form state,
//! returns the ordered field updates to apply. No CLI or IO dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod gazetteer;
pub mod matcher;
pub mod model;
mod nepal;
pub mod normalize;
pub mod resolver;
pub mod unit;

pub use config::AutofillConfig;
pub use engine::{autofill, FieldReconciler};
pub use error::ReconError;
pub use gazetteer::Gazetteer;
pub use matcher::{MatchKind, NameMatcher};
pub use model::{
    AutofillReport, ExtractedFields, FieldId, FieldUpdate, FormState, Provenance,
    RecognizerOutput, ResolvedLocation,
};
pub use resolver::HierarchyResolver;
pub use unit::{parse_area, AreaUnit, AreaValue};
