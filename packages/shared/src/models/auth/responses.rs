use serde::{Deserialize, Serialize};

/// Body of every account endpoint response: `{"success": true}` or
/// `{"success": false, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccountResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AccountResponse {
    pub fn ok() -> Self {
        AccountResponse {
            success: true,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        AccountResponse {
            success: false,
            message: Some(message.into()),
        }
    }
}
