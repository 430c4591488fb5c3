//! Thread-safe snapshot store with selector reads.

use std::sync::Arc;

use parking_lot::RwLock;

use super::reducer::Reducer;
use super::state::AppState;

/// Snapshot container for one state slice.
///
/// Readers always observe a complete snapshot: `dispatch` replaces the
/// state wholesale under the write lock, never field by field. Clones
/// share the same underlying state.
#[derive(Clone)]
pub struct StateStore<S> {
    inner: Arc<RwLock<S>>,
}

impl<S: AppState> StateStore<S> {
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> S {
        self.inner.read().clone()
    }

    /// Read a projection of the current snapshot under the lock.
    ///
    /// This is the selector surface consumers use to derive values
    /// without cloning the whole state.
    pub fn select<T>(&self, selector: impl FnOnce(&S) -> T) -> T {
        selector(&self.inner.read())
    }

    /// Run an intent through `R` and atomically install the new state.
    pub fn dispatch<R>(&self, intent: R::Intent)
    where
        R: Reducer<State = S>,
    {
        let mut guard = self.inner.write();
        let next = R::reduce(std::mem::take(&mut *guard), intent);
        *guard = next;
    }
}

impl<S: AppState> Default for StateStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::Intent;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter(u32);
    impl AppState for Counter {}

    enum CounterIntent {
        Add(u32),
    }
    impl Intent for CounterIntent {}

    struct CounterReducer;
    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = CounterIntent;

        fn reduce(state: Counter, intent: CounterIntent) -> Counter {
            match intent {
                CounterIntent::Add(n) => Counter(state.0 + n),
            }
        }
    }

    #[test]
    fn dispatch_replaces_snapshot() {
        let store = StateStore::<Counter>::default();
        store.dispatch::<CounterReducer>(CounterIntent::Add(2));
        store.dispatch::<CounterReducer>(CounterIntent::Add(3));
        assert_eq!(store.snapshot(), Counter(5));
    }

    #[test]
    fn select_projects_without_cloning_state() {
        let store = StateStore::new(Counter(7));
        let doubled = store.select(|s| s.0 * 2);
        assert_eq!(doubled, 14);
    }

    #[test]
    fn clones_share_state() {
        let store = StateStore::<Counter>::default();
        let other = store.clone();
        store.dispatch::<CounterReducer>(CounterIntent::Add(1));
        assert_eq!(other.snapshot(), Counter(1));
    }
}
