//! Presentation-facing facade over the collection store.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use birthday_core::traits::BirthdayRemote;
use birthday_core::{Birthday, BirthdayId, Result};

use crate::auth::Auth;
use crate::state::StoreState;
use crate::store::{CollectionStore, RefreshOutcome};
use crate::view::{FilterField, SortField};

/// View model for a birthday list screen.
///
/// Remote operations are started in the background and return at once; the
/// returned handle resolves when the operation (including its follow-up
/// refresh) completes. Screens normally ignore the handle and watch
/// [`subscribe`](Self::subscribe) instead.
///
/// Dropping the view model cancels the work it started: refreshes and
/// write follow-ups still in flight finish without touching the list. Work
/// started through other handles to the same store is unaffected.
///
/// Must be created inside a Tokio runtime.
#[derive(Debug)]
pub struct BirthdayViewModel<R: BirthdayRemote + 'static> {
    store: CollectionStore<R>,
    auth: Auth,
    closed: Arc<AtomicBool>,
}

impl<R: BirthdayRemote + 'static> BirthdayViewModel<R> {
    /// Wrap a store and start the initial fetch.
    pub fn new(store: CollectionStore<R>, auth: Auth) -> Self {
        let closed = Arc::new(AtomicBool::new(false));
        let view_model = Self {
            store: store.scoped(Arc::clone(&closed)),
            auth,
            closed,
        };
        view_model.refresh();
        view_model
    }

    /// The store handle this view model works through.
    pub fn store(&self) -> &CollectionStore<R> {
        &self.store
    }

    /// Session used to stamp owners on new records.
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Subscribe to list, loading and error changes.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.store.subscribe()
    }

    /// The list as currently sorted and filtered.
    pub fn birthdays(&self) -> Vec<Birthday> {
        self.store.current()
    }

    /// True while a refresh is in flight.
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// Message of the last failed operation, if not yet dismissed.
    pub fn error_message(&self) -> Option<String> {
        self.store.last_error()
    }

    pub fn clear_error(&self) {
        self.store.clear_error();
    }

    /// Re-fetch the collection. Loading is flagged before this returns.
    pub fn refresh(&self) -> JoinHandle<Result<RefreshOutcome>> {
        let generation = self.store.begin_refresh();
        let store = self.store.clone();
        tokio::spawn(async move { store.refresh_with(generation).await })
    }

    /// Add a record. When a user is signed in and the record has no owner,
    /// the user becomes its owner.
    pub fn add(&self, mut birthday: Birthday) -> JoinHandle<Result<()>> {
        if birthday.owner_id.is_empty()
            && let Some(owner) = self.auth.owner()
        {
            debug!(%owner, "Stamping owner on new birthday");
            birthday.owner_id = owner;
        }
        let store = self.store.clone();
        tokio::spawn(async move { store.add(birthday).await })
    }

    pub fn update(&self, id: BirthdayId, birthday: Birthday) -> JoinHandle<Result<()>> {
        let store = self.store.clone();
        tokio::spawn(async move { store.update(id, birthday).await })
    }

    pub fn delete(&self, id: BirthdayId) -> JoinHandle<Result<()>> {
        let store = self.store.clone();
        tokio::spawn(async move { store.delete(id).await })
    }

    pub fn sort(&self, field: SortField, ascending: bool) {
        self.store.sort(field, ascending);
    }

    pub fn filter(&self, field: FilterField, value: &str) {
        self.store.filter(field, value);
    }
}

impl<R: BirthdayRemote + 'static> Drop for BirthdayViewModel<R> {
    fn drop(&mut self) {
        debug!("Closing birthday view model");
        self.closed.store(true, Ordering::SeqCst);
    }
}
