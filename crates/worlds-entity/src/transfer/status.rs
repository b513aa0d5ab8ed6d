//! Transfer status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a transfer job or of one world within it.
///
/// The only allowed transition is `Created -> Completed`; `Completed` is
/// terminal and never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transfer_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    /// The transfer has been requested and is still pending.
    Created,
    /// The target environment has caught up; terminal.
    Completed,
}

impl TransferStatus {
    /// Check if the status is terminal.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransferStatus {
    type Err = worlds_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" => Ok(Self::Created),
            "completed" => Ok(Self::Completed),
            _ => Err(worlds_core::AppError::validation(format!(
                "Invalid transfer status: '{s}'. Expected one of: created, completed"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_state() {
        assert!(TransferStatus::Completed.is_completed());
        assert!(!TransferStatus::Created.is_completed());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "created".parse::<TransferStatus>().unwrap(),
            TransferStatus::Created
        );
        assert_eq!(
            "COMPLETED".parse::<TransferStatus>().unwrap(),
            TransferStatus::Completed
        );
        assert!("done".parse::<TransferStatus>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransferStatus::Completed).unwrap(),
            "\"completed\""
        );
    }
}
