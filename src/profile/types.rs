use serde::{Deserialize, Serialize};

/// User profile as known to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub family_name: String,
    pub fiscal_code: String,
    pub email: Option<String>,
    pub is_inbox_enabled: bool,
    pub is_webhook_enabled: bool,
    /// Server-side revision, bumped on every accepted upsert.
    pub version: u64,
}

/// Partial profile update. The version is owned by the server and
/// cannot be patched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub email: Option<String>,
    pub is_inbox_enabled: Option<bool>,
    pub is_webhook_enabled: Option<bool>,
}
