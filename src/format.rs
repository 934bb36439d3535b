//! Pure response shaping helpers. Nothing here performs I/O.

use serde_json::{Map, Number, Value};

use crate::core::IexError;

/// Suffix of the string siblings added by [`pretty_numbers`].
pub const PRETTY_SUFFIX: &str = "_s";

/// Inserts `,` between groups of three digits of an unsigned digit string.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats an integer with thousands separators, e.g. `1234567` -> `"1,234,567"`.
#[must_use]
pub fn format_integer(n: i128) -> String {
    let grouped = group_digits(&n.unsigned_abs().to_string());
    if n < 0 { format!("-{grouped}") } else { grouped }
}

/// Formats a float with thousands separators and two decimals, e.g. `1234.5` -> `"1,234.50"`.
#[must_use]
pub fn format_decimal(x: f64) -> String {
    let fixed = format!("{:.2}", x.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if x.is_sign_negative() && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{}.{frac_part}", group_digits(int_part))
}

fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        format_integer(i128::from(i))
    } else if let Some(u) = n.as_u64() {
        format_integer(i128::from(u))
    } else {
        format_decimal(n.as_f64().unwrap_or_default())
    }
}

/// Adds a `<key>_s` string sibling for every numeric field of `map`. Existing keys are never
/// overwritten.
pub(crate) fn augment(map: &mut Map<String, Value>) {
    let additions: Vec<(String, String)> = map
        .iter()
        .filter_map(|(k, v)| match v {
            Value::Number(n) => Some((format!("{k}{PRETTY_SUFFIX}"), format_number(n))),
            _ => None,
        })
        .collect();
    for (k, s) in additions {
        map.entry(k).or_insert(Value::String(s));
    }
}

/// Returns a copy of `record` with a thousands-grouped string sibling (suffixed `_s`) for every
/// numeric field. Integers are grouped as-is; floats are fixed to two decimals.
///
/// ```
/// # use serde_json::json;
/// let out = iex_rs::format::pretty_numbers(&json!({"price": 1234, "ratio": 3.14159})).unwrap();
/// assert_eq!(out["price_s"], "1,234");
/// assert_eq!(out["ratio_s"], "3.14");
/// ```
///
/// # Errors
///
/// Returns [`IexError::InvalidArgument`] if `record` is not a JSON object.
pub fn pretty_numbers(record: &Value) -> Result<Value, IexError> {
    let Value::Object(map) = record else {
        return Err(IexError::InvalidArgument(format!(
            "pretty_numbers expects a record, got {}",
            kind(record)
        )));
    };
    let mut out = map.clone();
    augment(&mut out);
    Ok(Value::Object(out))
}

const fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
