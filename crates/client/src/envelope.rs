//! Remote API response envelope.
//!
//! The server wraps every payload in the same envelope. This crate consumes
//! the shape but does not define it; changing it is a server concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard response wrapper: `{data, message, statusCode, success, timestamp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub data: T,
    pub message: String,
    pub status_code: u16,
    pub success: bool,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_fields() {
        let raw = r#"{
            "data": 42,
            "message": "ok",
            "statusCode": 200,
            "success": true,
            "timestamp": "2026-01-15T08:30:00Z"
        }"#;

        let envelope: Envelope<u32> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.data, 42);
        assert_eq!(envelope.status_code, 200);
        assert!(envelope.success);
    }
}
