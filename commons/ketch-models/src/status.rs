use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health of a single application as last reported by its runtime.
///
/// The wire representation is the raw upper-case label. Labels outside the
/// known set round-trip through `Other` so a newer server can introduce a
/// health kind without breaking older clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum HealthStatus {
    Ready,
    Alive,
    Down,
    Partial,
    Unknown,
    Other(String),
}

impl HealthStatus {
    pub fn as_label(&self) -> &str {
        match self {
            HealthStatus::Ready => "READY",
            HealthStatus::Alive => "ALIVE",
            HealthStatus::Down => "DOWN",
            HealthStatus::Partial => "PARTIAL",
            HealthStatus::Unknown => "UNKNOWN",
            HealthStatus::Other(label) => label,
        }
    }
}

impl From<String> for HealthStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "READY" => HealthStatus::Ready,
            "ALIVE" => HealthStatus::Alive,
            "DOWN" => HealthStatus::Down,
            "PARTIAL" => HealthStatus::Partial,
            "UNKNOWN" => HealthStatus::Unknown,
            _ => HealthStatus::Other(label),
        }
    }
}

impl From<HealthStatus> for String {
    fn from(status: HealthStatus) -> Self {
        status.as_label().to_string()
    }
}

/// The latest health report for one application in one workspace.
///
/// Absence of a report ("not yet deployed") is signalled by the API's
/// not-found status, never by this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusReport {
    pub application: String,
    pub project: String,
    pub workspace: String,
    pub health: HealthStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_timestamp"
    )]
    pub generated_at: Option<DateTime<Utc>>,
}

// A malformed timestamp downgrades to "no timestamp" instead of failing the
// whole report.
fn lenient_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}
