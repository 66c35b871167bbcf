use std::fmt::Display;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Paused,
    Cancelled,
}

impl SubscriptionStatus {
    pub const ALL: [SubscriptionStatus; 3] = [
        SubscriptionStatus::Active,
        SubscriptionStatus::Paused,
        SubscriptionStatus::Cancelled,
    ];

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubscriptionStatus::Cancelled)
    }
}

impl Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Paused => "paused",
            SubscriptionStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", status)
    }
}

/// Parses the stored representation. Unknown values are rejected.
impl TryFrom<&str> for SubscriptionStatus {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "active" => Ok(SubscriptionStatus::Active),
            "paused" => Ok(SubscriptionStatus::Paused),
            "cancelled" => Ok(SubscriptionStatus::Cancelled),
            other => Err(anyhow!("unknown subscription status: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_stored_value() {
        for status in SubscriptionStatus::ALL {
            let parsed = SubscriptionStatus::try_from(status.to_string().as_str()).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = SubscriptionStatus::try_from("expired").unwrap_err().to_string();
        assert!(err.contains("expired"), "got: {err}");
    }

    #[test]
    fn only_cancelled_is_terminal() {
        assert!(SubscriptionStatus::Cancelled.is_terminal());
        assert!(!SubscriptionStatus::Active.is_terminal());
        assert!(!SubscriptionStatus::Paused.is_terminal());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&SubscriptionStatus::Paused).unwrap();
        assert_eq!(json, "\"paused\"");
    }
}
