use serde::Deserialize;

/* ------------- Minimal serde mapping of /ref-data/symbols ------------- */

#[derive(Deserialize)]
pub(crate) struct SymbolRow {
    #[serde(default)]
    pub(crate) symbol: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
}
