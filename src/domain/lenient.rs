//! Tolerant field decoders for hand-edited fixture files.
//!
//! Fixture authors write `"id": 3` as often as `"id": "3"` and leave
//! `null` where a value is unknown; these helpers accept both so a single
//! sloppy record does not blank the whole file.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes a string, number or bool as a `String`. `null` becomes `""`.
///
/// # Errors
///
/// Only fails when the underlying deserializer fails.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Decodes `T`, treating an explicit `null` like a missing field.
///
/// # Errors
///
/// Fails when a non-null value does not decode as `T`.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a counter, clamping negatives and garbage to `0`.
///
/// # Errors
///
/// Only fails when the underlying deserializer fails.
pub fn counter<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => clamp_counter(n.as_f64().unwrap_or(0.0)),
        Some(Value::String(s)) => clamp_counter(s.trim().parse().unwrap_or(0.0)),
        _ => 0,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_counter(raw: f64) -> u32 {
    if raw.is_finite() && raw > 0.0 {
        raw.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "super::string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "super::counter")]
        count: u32,
        #[serde(default, deserialize_with = "super::null_default")]
        tags: Vec<String>,
    }

    fn record(json: &str) -> Option<Record> {
        serde_json::from_str(json).ok()
    }

    #[test]
    fn accepts_numeric_ids() {
        let p = record(r#"{"id": 42, "count": 3}"#);
        assert_eq!(p.map(|p| (p.id, p.count)), Some(("42".to_string(), 3)));
    }

    #[test]
    fn null_and_missing_default() {
        let p = record(r#"{"id": null}"#);
        assert_eq!(p.map(|p| (p.id, p.count)), Some((String::new(), 0)));
    }

    #[test]
    fn negative_counters_clamp_to_zero() {
        let p = record(r#"{"id": "a", "count": -5}"#);
        assert_eq!(p.map(|p| p.count), Some(0));
        let p = record(r#"{"id": "a", "count": "12"}"#);
        assert_eq!(p.map(|p| p.count), Some(12));
    }

    #[test]
    fn null_collections_default() {
        let r = record(r#"{"id": "a", "tags": null}"#);
        assert_eq!(r.map(|r| r.tags), Some(Vec::new()));
        let r = record(r#"{"id": "a", "tags": ["x"]}"#);
        assert_eq!(r.map(|r| r.tags), Some(vec!["x".to_string()]));
    }

    #[test]
    fn null_default_still_rejects_wrong_types() {
        assert!(record(r#"{"tags": "not-a-list"}"#).is_none());
    }
}
