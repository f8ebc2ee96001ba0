//! Serde helpers for numeric fields whose JSON type is not stable.
//!
//! Some KPI and proxy fields arrive as numbers in one response shape and as
//! pre-formatted display strings (`"$73,750.00"`) in another.

use serde::{Deserialize, Deserializer};

use crate::utils::coerce_number;

#[derive(Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum NumberOrText {
    Number(f64),
    Text(String),
    // Booleans, arrays, objects: treated as absent
    Other(serde::de::IgnoredAny),
}

/// `deserialize_with` target for `Option<f64>` fields. Numbers pass through,
/// strings are coerced, `null` and anything else become `None`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(v)) if v.is_finite() => Some(v),
        Some(NumberOrText::Text(text)) => coerce_number(&text),
        _ => None,
    })
}

/// `deserialize_with` target for optional strings where the backend sends `""` for "none".
pub fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
