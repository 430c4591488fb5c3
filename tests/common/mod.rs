//! Shared test utilities and mock collaborators.

#![allow(dead_code, unused_imports)]

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use remoteview::config::{AppContext, StoreUrls};
use remoteview::profile::Profile;
use remoteview::update::{LaunchError, StoreLauncher};

/// Context with realistic store URLs and the default 5 s error TTL.
pub fn test_context() -> AppContext {
    AppContext {
        app_name: "civicapp".to_string(),
        version: "1.2.3".to_string(),
        store: StoreUrls {
            native: "market://details?id=it.example.civic".to_string(),
            web: "https://play.example.com/store/apps/details?id=it.example.civic".to_string(),
        },
        update_error_ttl_ms: 5_000,
    }
}

pub fn sample_profile(version: u64) -> Profile {
    Profile {
        name: "Maria".to_string(),
        family_name: "Rossi".to_string(),
        fiscal_code: "RSSMRA80A41H501X".to_string(),
        email: Some("maria.rossi@example.com".to_string()),
        is_inbox_enabled: true,
        is_webhook_enabled: false,
        version,
    }
}

/// Launcher that succeeds only for a scripted set of URLs and records
/// every attempt in order.
pub struct ScriptedLauncher {
    accepts: Vec<String>,
    attempts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedLauncher {
    pub fn accepting(urls: &[&str]) -> Self {
        Self {
            accepts: urls.iter().map(|u| u.to_string()).collect(),
            attempts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn rejecting_all() -> Self {
        Self::accepting(&[])
    }

    /// URLs attempted so far, in call order.
    pub fn attempted(&self) -> Vec<String> {
        self.attempts.lock().clone()
    }

    /// Handle that stays observable after the launcher moves into a gate.
    pub fn attempts_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.attempts)
    }
}

impl StoreLauncher for ScriptedLauncher {
    fn open(&self, url: &str) -> impl Future<Output = Result<(), LaunchError>> + Send {
        let ok = self.accepts.iter().any(|u| u == url);
        let url = url.to_string();
        let attempts = Arc::clone(&self.attempts);
        async move {
            attempts.lock().push(url.clone());
            if ok {
                Ok(())
            } else {
                Err(LaunchError {
                    url,
                    reason: "scripted rejection".to_string(),
                })
            }
        }
    }
}
