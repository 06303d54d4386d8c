use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Processing state reported by Alertmanager
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    #[default]
    Unprocessed,
    Active,
    Suppressed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertStatus {
    pub state: AlertState,
    /// IDs of the silences muting this alert
    #[serde(deserialize_with = "null_as_default")]
    pub silenced_by: Vec<String>,
    /// Fingerprints of the alerts inhibiting this alert
    #[serde(deserialize_with = "null_as_default")]
    pub inhibited_by: Vec<String>,
}

/// An alert as returned by `GET /api/v1/alerts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtendedAlert {
    #[serde(deserialize_with = "null_as_default")]
    pub labels: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub annotations: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(rename = "generatorURL")]
    pub generator_url: String,
    pub status: AlertStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub receivers: Vec<String>,
    pub fingerprint: String,
}

impl ExtendedAlert {
    /// Create an alert carrying only an `alertname` label
    pub fn new(alertname: impl Into<String>) -> Self {
        let mut alert = Self::default();
        alert.labels.insert("alertname".to_string(), alertname.into());
        alert
    }

    pub fn with_label(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(name.into(), value.into());
        self
    }

    pub fn with_annotation(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(name.into(), value.into());
        self
    }

    pub fn with_starts_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    pub fn alertname(&self) -> &str {
        self.labels.get("alertname").map(String::as_str).unwrap_or("")
    }

    pub fn summary(&self) -> &str {
        self.annotations.get("summary").map(String::as_str).unwrap_or("")
    }

    pub fn is_silenced(&self) -> bool {
        !self.status.silenced_by.is_empty()
    }

    pub fn is_inhibited(&self) -> bool {
        !self.status.inhibited_by.is_empty()
    }
}

/// Go encodes nil slices and maps as `null`
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

    #[test]
    fn test_deserialize_v1_alert() {
        let raw = r#"{
            "labels": {"alertname": "DiskFull", "instance": "db-1"},
            "annotations": {"summary": "disk is full"},
            "startsAt": "2026-01-01T10:00:00.000Z",
            "endsAt": "2026-01-01T11:00:00Z",
            "generatorURL": "http://prometheus/graph",
            "status": {"state": "suppressed", "silencedBy": ["abc"], "inhibitedBy": null},
            "receivers": ["team-ops"],
            "fingerprint": "0123456789abcdef",
            "unknownField": 1
        }"#;

        let alert: ExtendedAlert = serde_json::from_str(raw).unwrap();
        assert_eq!(alert.alertname(), "DiskFull");
        assert_eq!(alert.summary(), "disk is full");
        assert_eq!(alert.status.state, AlertState::Suppressed);
        assert!(alert.is_silenced());
        assert!(!alert.is_inhibited());
        assert_eq!(alert.generator_url, "http://prometheus/graph");
        assert_eq!(alert.receivers, vec!["team-ops"]);
        assert!(alert.starts_at.is_some());
    }

    #[test]
    fn test_missing_fields_default() {
        let alert: ExtendedAlert = serde_json::from_str(r#"{"labels": {}}"#).unwrap();
        assert_eq!(alert.alertname(), "");
        assert_eq!(alert.status.state, AlertState::Unprocessed);
        assert!(alert.ends_at.is_none());
    }
}
