//! Helpers shared by all entity models.
//!
//! Zammad returns relational fields in one of two shapes depending on
//! whether expansion was requested: a resolved display name (`"state": "open"`)
//! or only the foreign key (`"state_id": 2`). Often both are present, and a
//! single record may mix expanded and unexpanded fields. [`name_or_id`] is
//! the one place that decides which form is shown.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// Numeric identifier carried by every Zammad entity.
pub type EntityId = u64;

/// Unknown fields of a record, kept verbatim so they pass through untouched.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Placeholder shown when neither the name nor the id of a relation is known.
pub const MISSING: &str = "-";

/// Resolves a relational field to its display form.
///
/// Returns the name when it is present and non-empty, otherwise the id,
/// otherwise [`MISSING`].
pub fn name_or_id(name: Option<&str>, id: Option<EntityId>) -> String {
    match name.filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => id.map_or_else(|| MISSING.to_string(), |id| id.to_string()),
    }
}

/// Returns an optional text field, or [`MISSING`] when absent.
pub fn text_or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

/// Deserializes an optional value that can be either a string or an integer
/// into `Option<String>`.
///
/// Expanded relation names are strings, but some servers return numeric
/// values in the same slot (e.g. the ticket `number`).
pub(crate) fn deserialize_optional_string_or_int<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptionalStringOrIntVisitor;

    impl<'de> Visitor<'de> for OptionalStringOrIntVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("null, a string, or an integer")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }
    }

    deserializer.deserialize_any(OptionalStringOrIntVisitor)
}

/// Deserializes a field that may be `null`, substituting the type's default.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub(crate) fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Lenient {
        #[serde(default, deserialize_with = "deserialize_optional_string_or_int")]
        value: Option<String>,
    }

    #[derive(Deserialize)]
    struct Flags {
        #[serde(default, deserialize_with = "deserialize_null_as_default")]
        enabled: bool,
        #[serde(default, deserialize_with = "deserialize_null_as_default")]
        ids: Vec<EntityId>,
    }

    #[test]
    fn test_null_as_default() {
        let f: Flags = serde_json::from_str(r#"{"enabled": null, "ids": null}"#).unwrap();
        assert!(!f.enabled);
        assert!(f.ids.is_empty());

        let f: Flags = serde_json::from_str("{}").unwrap();
        assert!(!f.enabled);

        let f: Flags = serde_json::from_str(r#"{"enabled": true, "ids": [1, 2]}"#).unwrap();
        assert!(f.enabled);
        assert_eq!(f.ids, vec![1, 2]);
    }

    #[test]
    fn test_name_or_id_prefers_name() {
        assert_eq!(name_or_id(Some("open"), Some(2)), "open");
    }

    #[test]
    fn test_name_or_id_falls_back_to_id() {
        assert_eq!(name_or_id(None, Some(2)), "2");
        assert_eq!(name_or_id(Some(""), Some(2)), "2");
    }

    #[test]
    fn test_name_or_id_both_missing() {
        assert_eq!(name_or_id(None, None), MISSING);
        assert_eq!(name_or_id(Some(""), None), MISSING);
    }

    #[test]
    fn test_string_or_int_accepts_both() {
        let p: Lenient = serde_json::from_str(r#"{"value": "31001"}"#).unwrap();
        assert_eq!(p.value.as_deref(), Some("31001"));

        let p: Lenient = serde_json::from_str(r#"{"value": 31001}"#).unwrap();
        assert_eq!(p.value.as_deref(), Some("31001"));

        let p: Lenient = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert!(p.value.is_none());

        let p: Lenient = serde_json::from_str("{}").unwrap();
        assert!(p.value.is_none());
    }

    #[test]
    fn test_string_or_int_rejects_objects() {
        let result = serde_json::from_str::<Lenient>(r#"{"value": {"name": "x"}}"#);
        assert!(result.is_err());
    }
}
