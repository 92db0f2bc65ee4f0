//! Serde helpers for money fields.
//!
//! The backend serializes decimal columns as JSON strings (`"9.99"`),
//! while report endpoints emit plain numbers. `lenient_f64` accepts both.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

/// Deserialize an `f64` from either a JSON number or a numeric string.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal string: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "super::lenient_f64")]
        value: f64,
    }

    #[test]
    fn accepts_json_number() {
        let w: Wrapper = serde_json::from_str(r#"{"value": 9.99}"#).unwrap();
        assert_eq!(w.value, 9.99);
    }

    #[test]
    fn accepts_integer_number() {
        let w: Wrapper = serde_json::from_str(r#"{"value": 1200}"#).unwrap();
        assert_eq!(w.value, 1200.0);
    }

    #[test]
    fn accepts_decimal_string() {
        let w: Wrapper = serde_json::from_str(r#"{"value": "19.50"}"#).unwrap();
        assert_eq!(w.value, 19.5);
    }

    #[test]
    fn rejects_non_numeric_string() {
        let result = serde_json::from_str::<Wrapper>(r#"{"value": "abc"}"#);
        assert!(result.is_err());
    }
}
