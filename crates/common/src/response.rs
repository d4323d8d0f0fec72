use serde::{Deserialize, Serialize};

/// JSON body returned by every endpoint.
///
/// Serializes as `{"message": ..., "status": ...}` in that key order.
/// Both keys are always present, even when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Response {
    /// Human-readable text.
    pub message: String,
    /// Short status token such as `"success"` or `"ok"`.
    pub status: String,
}

impl Response {
    pub fn new(message: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: status.into(),
        }
    }
}
