//! Framework record model and its JSON representation.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A JavaScript framework description.
///
/// Serialized with camelCase keys:
/// `{id, name, version, deprecationDate, hypeLevel}`.
/// `id`, `version` and `deprecationDate` are written as `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkRecord {
    /// Store-assigned identifier. `None` until the record is first saved.
    #[serde(default)]
    pub id: Option<i64>,

    /// Framework name. A missing or `null` name decodes as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Semantic version string, if known.
    #[serde(default)]
    pub version: Option<String>,

    /// Date the framework was (or will be) deprecated, as `YYYY-MM-DD`.
    ///
    /// Anything else, including impossible dates, fails decoding.
    #[serde(default)]
    pub deprecation_date: Option<NaiveDate>,

    /// Hype on a 0..=10 scale. Missing or `null` decodes as 0.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hype_level: i64,
}

impl FrameworkRecord {
    /// Create an unsaved record with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            version: None,
            deprecation_date: None,
            hype_level: 0,
        }
    }

    /// Builder-style id setter.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder-style version setter.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Builder-style deprecation date setter.
    pub fn with_deprecation_date(mut self, date: NaiveDate) -> Self {
        self.deprecation_date = Some(date);
        self
    }

    /// Builder-style hype level setter.
    pub fn with_hype_level(mut self, hype_level: i64) -> Self {
        self.hype_level = hype_level;
        self
    }

    /// Overwrite every mutable field from `other`, keeping this record's id.
    pub fn apply(&mut self, other: FrameworkRecord) {
        self.name = other.name;
        self.version = other.version;
        self.hype_level = other.hype_level;
        self.deprecation_date = other.deprecation_date;
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_camel_case_with_nulls() {
        let record = FrameworkRecord::new("ReactJS");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            json!({
                "id": null,
                "name": "ReactJS",
                "version": null,
                "deprecationDate": null,
                "hypeLevel": 0
            })
        );
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let record = FrameworkRecord::new("Vue.js")
            .with_id(3)
            .with_deprecation_date(NaiveDate::from_ymd_opt(2030, 1, 31).unwrap());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["deprecationDate"], "2030-01-31");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let record: FrameworkRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record, FrameworkRecord::new(""));
    }

    #[test]
    fn test_null_name_and_hype_level_take_defaults() {
        let record: FrameworkRecord =
            serde_json::from_value(json!({"name": null, "hypeLevel": null})).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.hype_level, 0);
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        for date in [json!("2020-13-45"), json!("not-a-date"), json!(20200101)] {
            let result = serde_json::from_value::<FrameworkRecord>(json!({
                "name": "Ember",
                "deprecationDate": date
            }));
            assert!(result.is_err(), "date {}", date);
        }
    }

    #[test]
    fn test_null_date_decodes_as_none() {
        let record: FrameworkRecord =
            serde_json::from_value(json!({"name": "Ember", "deprecationDate": null})).unwrap();
        assert_eq!(record.deprecation_date, None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let record: FrameworkRecord =
            serde_json::from_value(json!({"name": "Svelte", "stars": 80000})).unwrap();
        assert_eq!(record.name, "Svelte");
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let result = serde_json::from_value::<FrameworkRecord>(json!({"hypeLevel": "high"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut stored = FrameworkRecord::new("Old").with_id(7);
        let incoming = FrameworkRecord::new("New")
            .with_id(99)
            .with_version("2.1.0-dev")
            .with_hype_level(9);

        stored.apply(incoming);

        assert_eq!(stored.id, Some(7));
        assert_eq!(stored.name, "New");
        assert_eq!(stored.version.as_deref(), Some("2.1.0-dev"));
        assert_eq!(stored.hype_level, 9);
    }
}
