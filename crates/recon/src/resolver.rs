use crate::error::ReconError;
use crate::gazetteer::Gazetteer;
use crate::matcher::NameMatcher;
use crate::model::{Level, ResolvedLocation};

/// Resolves recognized district / municipality text to a consistent
/// gazetteer triple.
///
/// Provinces are searched in canonical order and the first province whose
/// district list matches wins; the municipality is then matched only within
/// that district. Each stage may fail on its own.
#[derive(Debug, Clone)]
pub struct HierarchyResolver<'g> {
    gazetteer: &'g Gazetteer,
    matcher: NameMatcher,
    leaf_fallback: bool,
}

impl<'g> HierarchyResolver<'g> {
    pub fn new(gazetteer: &'g Gazetteer, matcher: NameMatcher) -> Self {
        Self { gazetteer, matcher, leaf_fallback: false }
    }

    /// When the district text is unusable, try locating the municipality
    /// across every district. Accepted only if exactly one district matches.
    pub fn with_leaf_fallback(mut self, enabled: bool) -> Self {
        self.leaf_fallback = enabled;
        self
    }

    pub fn gazetteer(&self) -> &'g Gazetteer {
        self.gazetteer
    }

    pub fn resolve_location(
        &self,
        district_text: Option<&str>,
        municipality_text: Option<&str>,
    ) -> ResolvedLocation {
        self.resolve_with_outcome(district_text, municipality_text).0
    }

    /// Resolve and report each failed stage as a `NoMatch`.
    pub fn resolve_with_outcome(
        &self,
        district_text: Option<&str>,
        municipality_text: Option<&str>,
    ) -> (ResolvedLocation, Vec<ReconError>) {
        let district_text = district_text.map(str::trim).filter(|t| !t.is_empty());
        let municipality_text = municipality_text.map(str::trim).filter(|t| !t.is_empty());
        let mut issues = Vec::new();

        let mut location = match district_text.and_then(|t| self.resolve_district(t)) {
            Some((province, district)) => ResolvedLocation {
                province: Some(province.to_string()),
                district: Some(district.to_string()),
                municipality: None,
            },
            None => {
                if let Some(text) = district_text {
                    issues.push(ReconError::NoMatch { level: Level::District, candidate: text.into() });
                }
                match municipality_text.filter(|_| self.leaf_fallback) {
                    Some(text) => match self.resolve_leaf(text) {
                        Some(location) => return (location, issues),
                        None => {
                            issues.push(ReconError::NoMatch {
                                level: Level::Municipality,
                                candidate: text.into(),
                            });
                            return (ResolvedLocation::default(), issues);
                        }
                    },
                    None => return (ResolvedLocation::default(), issues),
                }
            }
        };

        if let (Some(district), Some(text)) = (location.district.as_deref(), municipality_text) {
            let options = self.gazetteer.municipalities_of(district);
            match self.matcher.best_match(text, options) {
                Some(m) => location.municipality = Some(m.to_string()),
                None => issues.push(ReconError::NoMatch {
                    level: Level::Municipality,
                    candidate: text.into(),
                }),
            }
        }

        (location, issues)
    }

    /// First province (canonical order) whose districts match `text`.
    pub fn resolve_district(&self, text: &str) -> Option<(&'g str, &'g str)> {
        self.gazetteer.all_provinces().iter().find_map(|province| {
            let districts = self.gazetteer.districts_of(province);
            self.matcher
                .best_match(text, districts)
                .map(|district| (province.as_str(), district))
        })
    }

    fn resolve_leaf(&self, text: &str) -> Option<ResolvedLocation> {
        let mut found: Option<(&str, &str, &str)> = None;
        for province in self.gazetteer.all_provinces() {
            for district in self.gazetteer.districts_of(province) {
                let options = self.gazetteer.municipalities_of(district);
                if let Some(m) = self.matcher.best_match(text, options) {
                    if found.is_some() {
                        log::debug!("leaf fallback: '{text}' is ambiguous across districts");
                        return None;
                    }
                    found = Some((province, district, m));
                }
            }
        }

        let (province, district, municipality) = found?;
        log::debug!("leaf fallback: '{text}' -> {municipality}, {district}, {province}");
        Some(ResolvedLocation {
            province: Some(province.to_string()),
            district: Some(district.to_string()),
            municipality: Some(municipality.to_string()),
        })
    }
}
