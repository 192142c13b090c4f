//! Outcome: the uniform result envelope returned by every fallible operation.
//!
//! Failures are values, not panics. Callers branch on [`Outcome::is_success`]
//! (or the `success` field) before reading the payload.

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// Success/message/payload envelope.
///
/// `payload` is only present on success paths that produce data and
/// `error` is only present on failure paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
}

impl<T> Outcome<T> {
    /// A successful outcome carrying `payload`.
    pub fn success(message: impl Into<String>, payload: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            payload: Some(payload),
            error: None,
        }
    }

    /// A failed outcome tagged with `kind`.
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            payload: None,
            error: Some(kind),
        }
    }

    /// Whether the call succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The failure tag, if this outcome failed.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error
    }

    /// Borrow the payload, if any.
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Take the payload, if any.
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// Transform the payload, keeping the message and tag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            success: self.success,
            message: self.message,
            payload: self.payload.map(f),
            error: self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_payload() {
        let outcome = Outcome::success("found", 7u32);
        assert!(outcome.is_success());
        assert_eq!(outcome.payload(), Some(&7));
        assert_eq!(outcome.error_kind(), None);
    }

    #[test]
    fn test_failure_has_no_payload() {
        let outcome: Outcome<u32> = Outcome::failure(ErrorKind::NotFound, "student 9 not found");
        assert!(!outcome.is_success());
        assert_eq!(outcome.payload(), None);
        assert_eq!(outcome.error_kind(), Some(ErrorKind::NotFound));
        assert_eq!(outcome.message, "student 9 not found");
    }

    #[test]
    fn test_map_keeps_envelope() {
        let outcome = Outcome::success("ok", 2u32).map(|n| n * 10);
        assert_eq!(outcome.into_payload(), Some(20));
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let ok = serde_json::to_value(Outcome::success("ok", 1u32)).unwrap();
        assert_eq!(ok, serde_json::json!({ "success": true, "message": "ok", "payload": 1 }));

        let failed: Outcome<u32> = Outcome::failure(ErrorKind::DuplicateId, "dup");
        let failed = serde_json::to_value(failed).unwrap();
        assert_eq!(
            failed,
            serde_json::json!({ "success": false, "message": "dup", "error": "DuplicateId" })
        );
    }
}
