use crate::config::AutofillConfig;
use crate::error::ReconError;
use crate::gazetteer::Gazetteer;
use crate::model::{
    keys, AutofillReport, ExtractedFields, FieldId, FieldIssue, FieldUpdate, FormState, Level,
    RecognizerOutput, ResolvedLocation,
};
use crate::normalize::trim_label;
use crate::resolver::HierarchyResolver;
use crate::unit::{parse_area, AreaUnit};

/// Run the full auto-fill pipeline against the built-in Nepal gazetteer and
/// default settings.
pub fn autofill(output: &RecognizerOutput, state: &FormState) -> Result<AutofillReport, ReconError> {
    let config = AutofillConfig::default();
    FieldReconciler::from_config(Gazetteer::nepal(), &config).autofill(output, state)
}

/// Merges recognized values into a form, emitting updates in the order the
/// form's dependent selects expect.
#[derive(Debug, Clone)]
pub struct FieldReconciler<'g> {
    resolver: HierarchyResolver<'g>,
    default_unit: AreaUnit,
}

impl<'g> FieldReconciler<'g> {
    pub fn new(resolver: HierarchyResolver<'g>, default_unit: AreaUnit) -> Self {
        Self { resolver, default_unit }
    }

    pub fn from_config(gazetteer: &'g Gazetteer, config: &AutofillConfig) -> Self {
        let resolver = HierarchyResolver::new(gazetteer, config.build_matcher())
            .with_leaf_fallback(config.resolver.leaf_fallback);
        Self::new(resolver, config.default_unit)
    }

    pub fn resolver(&self) -> &HierarchyResolver<'g> {
        &self.resolver
    }

    /// Check the recognizer verdict, then reconcile its fields.
    pub fn autofill(
        &self,
        output: &RecognizerOutput,
        state: &FormState,
    ) -> Result<AutofillReport, ReconError> {
        if !output.success {
            let message = output
                .error
                .clone()
                .or_else(|| output.message.clone())
                .unwrap_or_else(|| "document recognition failed".to_string());
            log::warn!("recognizer failed: {message}");
            return Err(ReconError::UpstreamFailure(message));
        }
        Ok(self.reconcile_detailed(&output.extracted_fields, state))
    }

    pub fn reconcile(&self, fields: &ExtractedFields, state: &FormState) -> Vec<FieldUpdate> {
        self.reconcile_detailed(fields, state).updates
    }

    pub fn reconcile_detailed(&self, fields: &ExtractedFields, state: &FormState) -> AutofillReport {
        let mut out = Emitter { state, report: AutofillReport::default() };
        out.report.extracted_count = fields.non_empty_count();

        // Scalars
        let scalar = |key: &str| fields.non_empty(key).map(trim_label).filter(|v| !v.is_empty());
        if let Some(owner) = scalar(keys::OWNER_NAME) {
            out.offer(FieldId::OwnerName, owner);
        }
        if let Some(ward) = scalar(keys::WARD_NUMBER) {
            out.offer(FieldId::Ward, ward);
        }
        if let Some(plot) = scalar(keys::PLOT_NUMBER) {
            out.offer(FieldId::PlotNumber, plot);
            out.offer(FieldId::Kitta, plot);
        }

        // Location, parent first
        let (location, errors) = self.resolver.resolve_with_outcome(
            fields.non_empty(keys::DISTRICT),
            fields.non_empty(keys::MUNICIPALITY),
        );
        out.report.issues.extend(errors.iter().filter_map(FieldIssue::from_error));
        let contradicted = self.contradicted_entry(state, &location);
        if let Some(field) = contradicted {
            // A hand-typed lower level that the resolved ancestors would orphan.
            log::info!(
                "{field} was set to '{}' by hand outside the resolved location; not filling it",
                state.value(field).unwrap_or_default()
            );
            out.report.preserved.push(field);
        }
        let levels: &[Level] = match contradicted {
            Some(_) => &[],
            None => &[Level::Province, Level::District, Level::Municipality],
        };
        for &level in levels {
            let Some(value) = location.get(level) else {
                break;
            };
            let field = FieldId::from(level);
            if state.is_user_entered(field) && state.value(field) != Some(value) {
                // A user-chosen parent; resolved children would not belong to it.
                log::info!(
                    "{field} was set to '{}' by hand; not filling levels below it",
                    state.value(field).unwrap_or_default()
                );
                out.report.preserved.push(field);
                break;
            }
            out.offer(field, value);
        }
        out.report.location = location;

        // Area
        if let Some(text) = fields.non_empty(keys::AREA) {
            let fallback = state
                .value(FieldId::AreaUnit)
                .and_then(|v| v.parse::<AreaUnit>().ok())
                .unwrap_or(self.default_unit);
            match parse_area(text, fallback) {
                Ok(area) => {
                    out.offer(FieldId::Area, &area.magnitude_text);
                    out.offer(FieldId::AreaUnit, area.unit.symbol());
                    out.report.area = Some(area);
                }
                Err(e) => {
                    log::debug!("area not filled: {e}");
                    out.report.issues.extend(FieldIssue::from_error(&e));
                }
            }
        }

        let report = out.report;
        log::info!(
            "reconciled {} extracted field(s): {} update(s), {} preserved, {} issue(s)",
            report.extracted_count,
            report.updates.len(),
            report.preserved.len(),
            report.issues.len()
        );
        report
    }
}

impl FieldReconciler<'_> {
    /// The user-entered district or municipality that would end up under a
    /// different parent if the resolved province and district were filled.
    fn contradicted_entry(&self, state: &FormState, location: &ResolvedLocation) -> Option<FieldId> {
        let district = location.district.as_deref()?;
        let gazetteer = self.resolver.gazetteer();
        let typed = |field| state.is_user_entered(field).then(|| state.value(field)).flatten();

        if let Some(user_district) = typed(FieldId::District) {
            // Levels below a hand-typed district are the user's own choice.
            return (gazetteer.province_of(user_district) != location.province.as_deref())
                .then_some(FieldId::District);
        }
        let user_municipality = typed(FieldId::Municipality)?;
        (!gazetteer.municipalities_of(district).iter().any(|m| m == user_municipality))
            .then_some(FieldId::Municipality)
    }
}

/// Collects updates, skipping fields a human already set.
struct Emitter<'s> {
    state: &'s FormState,
    report: AutofillReport,
}

impl Emitter<'_> {
    fn offer(&mut self, field: FieldId, value: &str) {
        if self.state.is_user_entered(field) {
            log::debug!("keeping user-entered {field}");
            self.report.preserved.push(field);
            return;
        }
        self.report.updates.push(FieldUpdate::auto(field, value));
    }
}
