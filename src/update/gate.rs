use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::config::{AppContext, StoreUrls};
use crate::flow::Reducer;
use crate::update::intent::UpdateIntent;
use crate::update::reducer::UpdateReducer;
use crate::update::state::UpdateModalState;

/// A platform URL opener failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not open '{url}': {reason}")]
pub struct LaunchError {
    pub url: String,
    pub reason: String,
}

/// Platform seam for opening external URLs.
///
/// Implementations live outside this crate (the mobile shell, a
/// desktop opener). The gate only needs success or failure per URL.
pub trait StoreLauncher {
    fn open(&self, url: &str) -> impl Future<Output = Result<(), LaunchError>> + Send;
}

/// What a single `open_app_store` invocation did.
///
/// Exactly one of `Native`, `Web` or `Failed` occurs per attempt;
/// `AlreadyFailed` means the attempt was swallowed because the error
/// flag from a previous one is still showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOpenOutcome {
    Native,
    Web,
    Failed,
    AlreadyFailed,
}

/// Drives the store-open fallback chain for the update modal.
///
/// State transitions go through [`UpdateReducer`]; the gate owns the
/// side effects (launcher calls, the clear timer) around it.
pub struct UpdateGate<L> {
    launcher: L,
    store: StoreUrls,
    error_ttl: Duration,
    state: Arc<Mutex<UpdateModalState>>,
    clear_task: Mutex<Option<JoinHandle<()>>>,
}

impl<L: StoreLauncher> UpdateGate<L> {
    pub fn new(launcher: L, context: &AppContext) -> Self {
        Self {
            launcher,
            store: context.store.clone(),
            error_ttl: context.update_error_ttl(),
            state: Arc::new(Mutex::new(UpdateModalState::default())),
            clear_task: Mutex::new(None),
        }
    }

    /// Current modal state, for the consumer deciding what to render.
    pub fn modal_state(&self) -> UpdateModalState {
        *self.state.lock()
    }

    /// Try to send the user to the app store.
    ///
    /// Attempts the native URL, falls back to the web URL, and as a
    /// last resort raises the transient error flag and schedules its
    /// clear after the configured interval. While the flag is up,
    /// further invocations are swallowed.
    pub async fn open_app_store(&self) -> StoreOpenOutcome {
        if self.state.lock().is_failed() {
            return StoreOpenOutcome::AlreadyFailed;
        }

        match self.launcher.open(&self.store.native).await {
            Ok(()) => {
                tracing::info!(url = %self.store.native, "opened native store");
                StoreOpenOutcome::Native
            }
            Err(native_err) => {
                tracing::warn!(error = %native_err, "native store open failed, trying web store");
                match self.launcher.open(&self.store.web).await {
                    Ok(()) => {
                        tracing::info!(url = %self.store.web, "opened web store");
                        StoreOpenOutcome::Web
                    }
                    Err(web_err) => {
                        tracing::warn!(error = %web_err, "web store open failed");
                        self.apply(UpdateIntent::OpenFailed);
                        self.schedule_clear();
                        StoreOpenOutcome::Failed
                    }
                }
            }
        }
    }

    fn apply(&self, intent: UpdateIntent) {
        let mut guard = self.state.lock();
        *guard = UpdateReducer::reduce(*guard, intent);
    }

    /// Arm the auto-clear timer, superseding any previous one.
    fn schedule_clear(&self) {
        let state = Arc::clone(&self.state);
        let ttl = self.error_ttl;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut guard = state.lock();
            *guard = UpdateReducer::reduce(*guard, UpdateIntent::ErrorExpired);
        });
        if let Some(previous) = self.clear_task.lock().replace(handle) {
            previous.abort();
        }
    }
}

// A pending clear must not outlive the gate: acting on state after
// teardown is the async analogue of setState on an unmounted component.
impl<L> Drop for UpdateGate<L> {
    fn drop(&mut self) {
        if let Some(task) = self.clear_task.lock().take() {
            task.abort();
        }
    }
}
