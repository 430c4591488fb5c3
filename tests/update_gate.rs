mod common;

use std::time::Duration;

use common::{test_context, ScriptedLauncher};
use remoteview::update::{StoreOpenOutcome, UpdateGate};

#[tokio::test]
async fn native_success_stops_the_chain() {
    let context = test_context();
    let launcher = ScriptedLauncher::accepting(&[context.store.native.as_str()]);
    let attempts = launcher.attempts_handle();

    let gate = UpdateGate::new(launcher, &context);
    assert_eq!(gate.open_app_store().await, StoreOpenOutcome::Native);
    assert_eq!(*attempts.lock(), vec![context.store.native.clone()]);
    assert!(!gate.modal_state().is_failed());
}

#[tokio::test]
async fn web_fallback_after_native_failure() {
    let context = test_context();
    let launcher = ScriptedLauncher::accepting(&[context.store.web.as_str()]);
    let attempts = launcher.attempts_handle();

    let gate = UpdateGate::new(launcher, &context);
    assert_eq!(gate.open_app_store().await, StoreOpenOutcome::Web);
    assert_eq!(
        *attempts.lock(),
        vec![context.store.native.clone(), context.store.web.clone()]
    );
    assert!(!gate.modal_state().is_failed());
}

#[tokio::test(start_paused = true)]
async fn total_failure_sets_then_clears_error_flag() {
    let context = test_context();
    let gate = UpdateGate::new(ScriptedLauncher::rejecting_all(), &context);

    assert_eq!(gate.open_app_store().await, StoreOpenOutcome::Failed);
    assert!(gate.modal_state().is_failed());

    // Flag clears once the TTL elapses...
    tokio::time::sleep(context.update_error_ttl() + Duration::from_millis(100)).await;
    assert!(!gate.modal_state().is_failed());

    // ...and stays clear afterwards.
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert!(!gate.modal_state().is_failed());
}

#[tokio::test(start_paused = true)]
async fn invocations_while_failed_are_swallowed() {
    let context = test_context();
    let launcher = ScriptedLauncher::rejecting_all();
    let attempts = launcher.attempts_handle();

    let gate = UpdateGate::new(launcher, &context);
    assert_eq!(gate.open_app_store().await, StoreOpenOutcome::Failed);
    let attempts_after_failure = attempts.lock().len();

    // Button presses while the error is showing do nothing.
    assert_eq!(gate.open_app_store().await, StoreOpenOutcome::AlreadyFailed);
    assert_eq!(attempts.lock().len(), attempts_after_failure);

    // After the flag clears, the chain runs again.
    tokio::time::sleep(context.update_error_ttl() + Duration::from_millis(100)).await;
    assert_eq!(gate.open_app_store().await, StoreOpenOutcome::Failed);
    assert_eq!(attempts.lock().len(), attempts_after_failure * 2);
}

#[tokio::test(start_paused = true)]
async fn drop_cancels_pending_clear() {
    let context = test_context();
    let gate = UpdateGate::new(ScriptedLauncher::rejecting_all(), &context);
    assert_eq!(gate.open_app_store().await, StoreOpenOutcome::Failed);

    // Tearing the gate down aborts the pending clear; advancing time
    // past the TTL afterwards exercises that path.
    drop(gate);
    tokio::time::sleep(Duration::from_secs(10)).await;
}
