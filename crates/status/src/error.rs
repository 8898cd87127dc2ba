//! Decode error types.

use thiserror::Error;

/// Why a record could not be turned into a [`crate::Status`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The record is well-formed but is some other journal event. Callers
    /// filter these silently.
    #[error("Not a status record (event: {})", .event.as_deref().unwrap_or("<missing>"))]
    NotAStatusRecord { event: Option<String> },

    /// The record could not be decoded; skip it and carry on with the stream.
    #[error("Malformed status frame: {reason}")]
    MalformedFrame { reason: String },
}

impl DecodeError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedFrame {
            reason: reason.into(),
        }
    }

    /// `true` for records that are simply of another kind.
    #[must_use]
    pub fn is_not_status_record(&self) -> bool {
        matches!(self, Self::NotAStatusRecord { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DecodeError::NotAStatusRecord {
            event: Some("Docked".to_string()),
        };
        assert_eq!(err.to_string(), "Not a status record (event: Docked)");

        let err = DecodeError::NotAStatusRecord { event: None };
        assert_eq!(err.to_string(), "Not a status record (event: <missing>)");

        let err = DecodeError::malformed("bad timestamp");
        assert_eq!(err.to_string(), "Malformed status frame: bad timestamp");
        assert!(!err.is_not_status_record());
    }
}
