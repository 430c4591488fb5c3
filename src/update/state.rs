use crate::flow::AppState;

/// Visible state of the update modal's store-open attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateModalState {
    /// No failed attempt pending; the update button is active.
    #[default]
    Idle,
    /// Both store URLs failed to open; an error message is shown and
    /// the button is inert until the flag clears.
    Failed,
}

impl AppState for UpdateModalState {}

impl UpdateModalState {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}
