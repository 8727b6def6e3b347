use crate::Species;

/// How a fluid's saturation pressure is obtained from temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaporPressureModel {
    /// Inverse lookup in a measured boiling table.
    Tabulated,
    /// Closed-form Antoine fit.
    Antoine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidCatalogEntry {
    pub species: Species,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub formula: &'static str,
    pub aliases: &'static [&'static str],
    pub vapor_pressure: VaporPressureModel,
}

impl FluidCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self.formula.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

const LIQUID_CATALOG: [FluidCatalogEntry; 2] = [
    FluidCatalogEntry {
        species: Species::Acetone,
        canonical_id: "acetone",
        display_name: "Acetone",
        formula: "C3H6O",
        aliases: &["ace", "propanone"],
        vapor_pressure: VaporPressureModel::Tabulated,
    },
    FluidCatalogEntry {
        species: Species::Decafluoropentane,
        canonical_id: "decafluoropentane",
        display_name: "Decafluoropentane",
        formula: "C5H2F10",
        aliases: &["dfp", "hfc-43-10mee"],
        vapor_pressure: VaporPressureModel::Antoine,
    },
];

pub fn liquid_catalog() -> &'static [FluidCatalogEntry] {
    &LIQUID_CATALOG
}

pub fn filter_liquid_catalog(query: &str) -> Vec<FluidCatalogEntry> {
    LIQUID_CATALOG
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

pub fn catalog_entry(species: Species) -> &'static FluidCatalogEntry {
    match species {
        Species::Acetone => &LIQUID_CATALOG[0],
        Species::Decafluoropentane => &LIQUID_CATALOG[1],
    }
}
