//! Core data types for the tribunal dashboard

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Dispute identifier type
pub type DisputeId = String;

/// Fallback shown when a dispute has no description
pub const DESCRIPTION_FALLBACK: &str = "No description provided";

/// Fallback shown when a dispute has a blank reason
pub const REASON_FALLBACK: &str = "No reason given";

/// Dispute status as reported by the backend
///
/// The backend sends an open string. The three known values map to their
/// variants; anything else (including `null` or a missing field) is kept
/// verbatim in [`DisputeStatus::Unknown`] so it round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum DisputeStatus {
    /// Raised, awaiting review
    Pending,
    /// Being examined by the tribunal
    UnderReview,
    /// Closed with a decision
    Resolved,
    /// Any status string outside the known set
    Unknown(String),
}

impl DisputeStatus {
    /// The known statuses, in display order
    pub const KNOWN: [Self; 3] = [Self::Pending, Self::UnderReview, Self::Resolved];

    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Resolved => "RESOLVED",
            Self::Unknown(raw) => raw,
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::UnderReview => "Under Review",
            Self::Resolved => "Resolved",
            Self::Unknown(_) => "Unknown",
        }
    }

    /// Only `RESOLVED` counts as resolved; unknown statuses stay open
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }

    /// Whether the status is one of the three known values
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl Default for DisputeStatus {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<&str> for DisputeStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "PENDING" => Self::Pending,
            "UNDER_REVIEW" => Self::UnderReview,
            "RESOLVED" => Self::Resolved,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for DisputeStatus {
    fn from(raw: String) -> Self {
        match Self::from(raw.as_str()) {
            Self::Unknown(_) => Self::Unknown(raw),
            known => known,
        }
    }
}

impl From<Option<String>> for DisputeStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map_or_else(Self::default, Self::from)
    }
}

impl From<DisputeStatus> for String {
    fn from(status: DisputeStatus) -> Self {
        match status {
            DisputeStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for DisputeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dispute raised against a completed job
///
/// Only `dispute_id` is required on the wire. Text fields that arrive as
/// `null` or are missing read as empty. The display-only `amount` and
/// `raised_at` never fail a decode: an amount that is neither a number nor
/// a numeric string reads as zero, and an unparsable timestamp as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeRecord {
    /// Unique identifier for the dispute
    pub dispute_id: DisputeId,

    /// Identifier of the disputed job
    #[serde(default, deserialize_with = "nullable_string")]
    pub job_id: String,

    /// Lifecycle status
    #[serde(default)]
    pub status: DisputeStatus,

    /// Optional free text from the raising party
    #[serde(default)]
    pub description: Option<String>,

    /// Why the dispute was raised
    #[serde(default, deserialize_with = "nullable_string")]
    pub reason: String,

    /// Party that opened the dispute
    #[serde(default, deserialize_with = "nullable_string")]
    pub raised_by: String,

    /// Disputed amount
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,

    /// When the dispute was opened
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub raised_at: Option<DateTime<Utc>>,
}

impl DisputeRecord {
    /// Create a record with the given id and status, every other field empty
    pub fn new(dispute_id: impl Into<DisputeId>, status: impl Into<DisputeStatus>) -> Self {
        Self {
            dispute_id: dispute_id.into(),
            job_id: String::new(),
            status: status.into(),
            description: None,
            reason: String::new(),
            raised_by: String::new(),
            amount: 0.0,
            raised_at: None,
        }
    }

    /// Description, or the display fallback when absent or blank
    #[must_use]
    pub fn description_or_fallback(&self) -> &str {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(DESCRIPTION_FALLBACK)
    }

    /// Reason, or the display fallback when blank
    #[must_use]
    pub fn reason_or_fallback(&self) -> &str {
        if self.reason.trim().is_empty() {
            REASON_FALLBACK
        } else {
            &self.reason
        }
    }

    /// Amount with two decimal places
    #[must_use]
    pub fn amount_display(&self) -> String {
        format!("{:.2}", self.amount)
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|value| value.is_finite()).unwrap_or_default())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => parse_timestamp(&text),
        _ => None,
    })
}

/// RFC 3339 first, then naive `YYYY-MM-DD[T ]HH:MM:SS[.fff]` read as UTC
fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc())
}
