use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::format;

/// Reporting period of financial statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Period {
    /// Quarterly reports. (Default)
    #[default]
    Quarter,
    /// Annual reports.
    Annual,
}

impl Period {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Quarter => "quarter",
            Self::Annual => "annual",
        }
    }
}

/// One financial report of a company.
///
/// `fields` holds every value the API returned plus a thousands-grouped `<name>_s` string for
/// each numeric one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialReport {
    /// The end date of the reporting period.
    pub report_date: NaiveDate,
    pub fields: Map<String, Value>,
}

impl FinancialReport {
    /// A raw numeric field, e.g. `report.number("totalRevenue")`.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.fields.get(name)?.as_f64()
    }

    /// The pretty-printed sibling of a numeric field, e.g. `"1,234"`.
    #[must_use]
    pub fn pretty(&self, name: &str) -> Option<&str> {
        self.fields
            .get(&format!("{name}{}", format::PRETTY_SUFFIX))?
            .as_str()
    }
}

/// Flattens the `{"financials": [ ... ]}` envelope of one symbol into reports sorted by date.
///
/// Reports without a parseable `reportDate` are dropped.
pub(crate) fn reports_from(node: Value) -> Vec<FinancialReport> {
    let list = match node {
        Value::Object(mut m) => m.remove("financials").unwrap_or(Value::Null),
        other => other,
    };
    let Value::Array(items) = list else {
        return Vec::new();
    };

    let mut reports: Vec<FinancialReport> = items
        .into_iter()
        .filter_map(|item| {
            let Value::Object(mut fields) = item else {
                return None;
            };
            let report_date = fields
                .get("reportDate")
                .and_then(Value::as_str)
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())?;
            format::augment(&mut fields);
            Some(FinancialReport {
                report_date,
                fields,
            })
        })
        .collect();

    reports.sort_by_key(|r| r.report_date);
    reports
}
