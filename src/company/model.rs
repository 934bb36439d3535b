use serde::{Deserialize, Serialize};

/// Descriptive company information for one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Chief executive officer.
    #[serde(default, rename = "CEO")]
    pub ceo: Option<String>,
    /// Issue type code (`cs` common stock, `et` ETF, ...).
    #[serde(default)]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub employees: Option<u64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}
