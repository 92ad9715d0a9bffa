//! Observable store state.

use birthday_core::Birthday;

/// A snapshot of the collection store.
///
/// `current` is what the user sees, possibly sorted or filtered. The list
/// from the last successful refresh is kept alongside it as the base for
/// filtering, but is not readable from outside the crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    pub(crate) current: Vec<Birthday>,
    pub(crate) pristine: Vec<Birthday>,
    pub(crate) is_loading: bool,
    pub(crate) last_error: Option<String>,
}

impl StoreState {
    /// The list as currently sorted and filtered.
    pub fn current(&self) -> &[Birthday] {
        &self.current
    }

    /// True while a refresh is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the last failed operation, if it has not been cleared.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
