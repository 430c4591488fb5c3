use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application context: metadata and platform URLs the core would
/// otherwise have to look up ambiently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppContext {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub store: StoreUrls,
    /// How long the update gate's transient error flag stays visible.
    #[serde(default = "default_update_error_ttl_ms")]
    pub update_error_ttl_ms: u64,
}

/// Where to send the user for an app update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreUrls {
    /// Platform-native store URL (e.g. a `market://` or `itms-apps://` link).
    pub native: String,
    /// Browser fallback when the native store cannot be opened.
    pub web: String,
}

impl Default for AppContext {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            version: default_version(),
            store: StoreUrls::default(),
            update_error_ttl_ms: default_update_error_ttl_ms(),
        }
    }
}

impl AppContext {
    pub fn update_error_ttl(&self) -> Duration {
        Duration::from_millis(self.update_error_ttl_ms)
    }
}

fn default_app_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_update_error_ttl_ms() -> u64 {
    5_000
}
