use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::ReconError;
use crate::nepal::NEPAL;

/// Read-only province → district → municipality directory.
///
/// Built once and shared by reference. District names are unique across
/// the whole table; municipality names are unique within their district
/// (the same local-level name may appear under several districts).
#[derive(Debug, Clone)]
pub struct Gazetteer {
    provinces: Vec<String>,
    districts: Vec<Vec<String>>,
    /// Indexed like a flattened `districts`, via `district_index`.
    municipalities: Vec<Vec<String>>,
    /// district → (province index, flat district index)
    district_index: HashMap<String, (usize, usize)>,
    province_index: HashMap<String, usize>,
}

static NEPAL_GAZETTEER: Lazy<Gazetteer> = Lazy::new(|| {
    let mut builder = Gazetteer::builder();
    for (province, districts) in NEPAL {
        builder = builder.province(*province);
        for (district, municipalities) in *districts {
            builder = builder.district(*province, *district, municipalities.iter().copied());
        }
    }
    builder.build().expect("compiled-in Nepal gazetteer is valid")
});

impl Gazetteer {
    pub fn builder() -> GazetteerBuilder {
        GazetteerBuilder::default()
    }

    /// The compiled-in table of Nepal's provinces, districts and local levels.
    pub fn nepal() -> &'static Gazetteer {
        &NEPAL_GAZETTEER
    }

    /// Load a substitute table.
    ///
    /// ```toml
    /// [[province]]
    /// name = "Bagmati Pradesh"
    ///
    /// [[province.district]]
    /// name = "Kathmandu"
    /// municipalities = ["Kathmandu Metropolitan", "Tokha Municipality"]
    /// ```
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let file: GazetteerFile =
            toml::from_str(input).map_err(|e| ReconError::Gazetteer(e.to_string()))?;

        let mut builder = Self::builder();
        for province in &file.province {
            builder = builder.province(&province.name);
            for district in &province.district {
                builder = builder.district(
                    &province.name,
                    &district.name,
                    district.municipalities.iter().map(String::as_str),
                );
            }
        }
        builder.build()
    }

    /// Provinces in canonical order.
    pub fn all_provinces(&self) -> &[String] {
        &self.provinces
    }

    /// Districts of `province` in canonical order; empty when unknown.
    pub fn districts_of(&self, province: &str) -> &[String] {
        self.province_index
            .get(province)
            .map(|&i| self.districts[i].as_slice())
            .unwrap_or(&[])
    }

    /// Municipalities of `district` in canonical order; empty when unknown.
    pub fn municipalities_of(&self, district: &str) -> &[String] {
        self.district_index
            .get(district)
            .map(|&(_, flat)| self.municipalities[flat].as_slice())
            .unwrap_or(&[])
    }

    pub fn province_of(&self, district: &str) -> Option<&str> {
        self.district_index
            .get(district)
            .map(|&(p, _)| self.provinces[p].as_str())
    }

    /// Every district listing `municipality` by its exact canonical name,
    /// in canonical order.
    pub fn districts_containing(&self, municipality: &str) -> Vec<&str> {
        self.districts
            .iter()
            .flatten()
            .filter(|d| self.municipalities_of(d).iter().any(|m| m == municipality))
            .map(String::as_str)
            .collect()
    }

    /// Every (province, district, municipality) triple, in canonical order.
    pub fn triples(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.provinces.iter().zip(&self.districts).flat_map(move |(p, ds)| {
            ds.iter().flat_map(move |d| {
                self.municipalities_of(d)
                    .iter()
                    .map(move |m| (p.as_str(), d.as_str(), m.as_str()))
            })
        })
    }

    pub fn district_count(&self) -> usize {
        self.district_index.len()
    }

    pub fn municipality_count(&self) -> usize {
        self.municipalities.iter().map(Vec::len).sum()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct GazetteerBuilder {
    provinces: Vec<(String, Vec<(String, Vec<String>)>)>,
}

impl GazetteerBuilder {
    /// Declare a province. Order of first declaration is canonical order.
    pub fn province(mut self, name: impl Into<String>) -> Self {
        self.province_slot(name.into());
        self
    }

    /// Add a district under `province`, declaring the province if needed.
    pub fn district<'a>(
        mut self,
        province: impl Into<String>,
        district: impl Into<String>,
        municipalities: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let slot = self.province_slot(province.into());
        slot.push((district.into(), municipalities.into_iter().map(str::to_string).collect()));
        self
    }

    fn province_slot(&mut self, name: String) -> &mut Vec<(String, Vec<String>)> {
        let pos = match self.provinces.iter().position(|(p, _)| *p == name) {
            Some(pos) => pos,
            None => {
                self.provinces.push((name, Vec::new()));
                self.provinces.len() - 1
            }
        };
        &mut self.provinces[pos].1
    }

    /// Check the tree invariants and freeze.
    pub fn build(self) -> Result<Gazetteer, ReconError> {
        if self.provinces.is_empty() {
            return Err(ReconError::Gazetteer("no provinces".into()));
        }

        let mut gazetteer = Gazetteer {
            provinces: Vec::with_capacity(self.provinces.len()),
            districts: Vec::with_capacity(self.provinces.len()),
            municipalities: Vec::new(),
            district_index: HashMap::new(),
            province_index: HashMap::new(),
        };

        for (p_idx, (province, districts)) in self.provinces.into_iter().enumerate() {
            if province.trim().is_empty() {
                return Err(ReconError::Gazetteer("blank province name".into()));
            }
            gazetteer.province_index.insert(province.clone(), p_idx);

            let mut names = Vec::with_capacity(districts.len());
            for (district, municipalities) in districts {
                if district.trim().is_empty() {
                    return Err(ReconError::Gazetteer(format!(
                        "blank district name in province '{province}'"
                    )));
                }
                if let Some(&(other, _)) = gazetteer.district_index.get(&district) {
                    let other = if other == p_idx { &province } else { &gazetteer.provinces[other] };
                    return Err(ReconError::Gazetteer(format!(
                        "district '{district}' listed twice (provinces '{other}' and '{province}')"
                    )));
                }
                check_siblings(&district, &municipalities)?;

                let flat = gazetteer.municipalities.len();
                gazetteer.district_index.insert(district.clone(), (p_idx, flat));
                gazetteer.municipalities.push(municipalities);
                names.push(district);
            }

            gazetteer.provinces.push(province);
            gazetteer.districts.push(names);
        }

        Ok(gazetteer)
    }
}

fn check_siblings(district: &str, municipalities: &[String]) -> Result<(), ReconError> {
    for (i, name) in municipalities.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ReconError::Gazetteer(format!(
                "blank municipality name in district '{district}'"
            )));
        }
        if municipalities[..i].contains(name) {
            return Err(ReconError::Gazetteer(format!(
                "municipality '{name}' listed twice in district '{district}'"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// TOML shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GazetteerFile {
    #[serde(default)]
    province: Vec<ProvinceDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProvinceDef {
    name: String,
    #[serde(default)]
    district: Vec<DistrictDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DistrictDef {
    name: String,
    #[serde(default)]
    municipalities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Gazetteer {
        Gazetteer::builder()
            .district("Koshi Pradesh", "Ilam", ["Ilam Municipality", "Mai Municipality"])
            .district("Bagmati Pradesh", "Lalitpur", ["Lalitpur Metropolitan", "Bagmati"])
            .district("Bagmati Pradesh", "Makwanpur", ["Hetauda Sub-Metropolitan", "Bagmati"])
            .build()
            .unwrap()
    }

    #[test]
    fn lookups() {
        let g = fixture();
        assert_eq!(g.all_provinces(), ["Koshi Pradesh", "Bagmati Pradesh"]);
        assert_eq!(g.districts_of("Bagmati Pradesh"), ["Lalitpur", "Makwanpur"]);
        assert_eq!(g.municipalities_of("Ilam"), ["Ilam Municipality", "Mai Municipality"]);
        assert_eq!(g.province_of("Makwanpur"), Some("Bagmati Pradesh"));
    }

    #[test]
    fn unknown_names_are_empty_not_errors() {
        let g = fixture();
        assert!(g.districts_of("Atlantis").is_empty());
        assert!(g.municipalities_of("Atlantis").is_empty());
        assert_eq!(g.province_of("Atlantis"), None);
        // Lookups are by canonical spelling only.
        assert_eq!(g.province_of("ilam"), None);
    }

    #[test]
    fn shared_local_level_names() {
        let g = fixture();
        assert_eq!(g.districts_containing("Bagmati"), vec!["Lalitpur", "Makwanpur"]);
        assert!(g.districts_containing("Nowhere").is_empty());
    }

    #[test]
    fn triples_in_canonical_order() {
        let g = fixture();
        let triples: Vec<_> = g.triples().collect();
        assert_eq!(triples.len(), 6);
        assert_eq!(triples[0], ("Koshi Pradesh", "Ilam", "Ilam Municipality"));
        assert_eq!(triples[5], ("Bagmati Pradesh", "Makwanpur", "Bagmati"));
    }

    #[test]
    fn rejects_district_in_two_provinces() {
        let err = Gazetteer::builder()
            .district("Koshi Pradesh", "Ilam", ["Mai"])
            .district("Bagmati Pradesh", "Ilam", ["Mai"])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("listed twice"), "{err}");
    }

    #[test]
    fn rejects_duplicate_siblings() {
        let err = Gazetteer::builder()
            .district("Koshi Pradesh", "Ilam", ["Mai", "Mai"])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("'Mai' listed twice"), "{err}");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(Gazetteer::builder().build().is_err());
        assert!(Gazetteer::builder().district("Koshi Pradesh", " ", ["Mai"]).build().is_err());
        assert!(Gazetteer::builder().district("Koshi Pradesh", "Ilam", [""]).build().is_err());
    }

    #[test]
    fn from_toml() {
        let g = Gazetteer::from_toml(
            r#"
[[province]]
name = "Bagmati Pradesh"

[[province.district]]
name = "Kathmandu"
municipalities = ["Kathmandu Metropolitan", "Tokha Municipality"]

[[province.district]]
name = "Bhaktapur"
municipalities = ["Bhaktapur Municipality"]

[[province]]
name = "Gandaki Pradesh"
"#,
        )
        .unwrap();
        assert_eq!(g.all_provinces().len(), 2);
        assert_eq!(g.districts_of("Bagmati Pradesh"), ["Kathmandu", "Bhaktapur"]);
        assert!(g.districts_of("Gandaki Pradesh").is_empty());
        assert_eq!(g.municipality_count(), 3);
    }

    #[test]
    fn from_toml_rejects_unknown_keys() {
        let err = Gazetteer::from_toml("[[province]]\nname = \"X\"\nregion = \"Y\"\n").unwrap_err();
        assert!(matches!(err, ReconError::Gazetteer(_)));
    }

    #[test]
    fn nepal_table_shape() {
        let g = Gazetteer::nepal();
        assert_eq!(g.all_provinces().len(), 7);
        assert_eq!(g.district_count(), 76);
        assert_eq!(g.province_of("Kathmandu"), Some("Bagmati Pradesh"));
        assert_eq!(g.province_of("Kailali"), Some("Sudurpashchim Pradesh"));
        assert!(g
            .municipalities_of("Kathmandu")
            .iter()
            .any(|m| m == "Kageshwari Manohara Municipality"));
    }
}
