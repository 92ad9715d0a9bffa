//! The collection store.
//!
//! The store is the single owner of the in-memory birthday list. It never
//! edits the list optimistically: add, update and delete go to the remote
//! first and then trigger a full refresh, so the list is never ahead of
//! the server.
//!
//! Every refresh takes a generation number when it starts. A completion is
//! applied only if no newer refresh has started since, so responses that
//! arrive out of order cannot overwrite fresher data.
//!
//! A store handle may also be scoped to an owner's lifetime with a shared
//! closed flag. Once the flag is set, that handle's pending work finishes
//! without touching the list. Other handles are unaffected.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, error, info, instrument, warn};

use birthday_core::traits::BirthdayRemote;
use birthday_core::{Birthday, BirthdayId, Clock, Error, Result, SystemClock};

use crate::state::StoreState;
use crate::view::{FilterField, SortField, filter_records, sort_records};

/// Observable, remote-backed birthday collection.
///
/// Cheap to clone; clones share the same state.
///
/// Operations that reach the remote record any failure as
/// [`StoreState::last_error`] and also return it, so callers may either
/// await the result or just observe the state.
pub struct CollectionStore<R> {
    inner: Arc<StoreInner<R>>,
    closed: Option<Arc<AtomicBool>>,
}

/// How a refresh that fetched successfully ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The fetched list replaced the current one.
    Applied,
    /// A newer refresh started first, so the result was dropped.
    Superseded,
    /// The handle's owner went away, so the result was dropped.
    Cancelled,
}

struct StoreInner<R> {
    remote: R,
    clock: Arc<dyn Clock>,
    state: watch::Sender<StoreState>,
    generation: AtomicU64,
}

impl<R> Clone for CollectionStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            closed: self.closed.clone(),
        }
    }
}

impl<R: BirthdayRemote> CollectionStore<R> {
    /// Create an empty store that computes ages against the system clock.
    pub fn new(remote: R) -> Self {
        Self::with_clock(remote, SystemClock)
    }

    /// Create an empty store with an explicit clock.
    pub fn with_clock(remote: R, clock: impl Clock + 'static) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            inner: Arc::new(StoreInner {
                remote,
                clock: Arc::new(clock),
                state,
                generation: AtomicU64::new(0),
            }),
            closed: None,
        }
    }

    /// A handle whose work is cancelled once `closed` is set.
    pub(crate) fn scoped(&self, closed: Arc<AtomicBool>) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            closed: Some(closed),
        }
    }

    fn is_closed(&self) -> bool {
        self.closed
            .as_ref()
            .is_some_and(|closed| closed.load(Ordering::SeqCst))
    }

    /// Returns the remote this store synchronizes with.
    pub fn remote(&self) -> &R {
        &self.inner.remote
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.inner.state.subscribe()
    }

    /// Stream of snapshots, starting with the current one.
    pub fn updates(&self) -> WatchStream<StoreState> {
        WatchStream::new(self.subscribe())
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.inner.state.borrow().clone()
    }

    /// Returns the list as currently sorted and filtered.
    pub fn current(&self) -> Vec<Birthday> {
        self.inner.state.borrow().current.clone()
    }

    /// True while a refresh is in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading
    }

    /// Message of the last failed operation.
    pub fn last_error(&self) -> Option<String> {
        self.inner.state.borrow().last_error.clone()
    }

    /// Dismiss the last error.
    pub fn clear_error(&self) {
        self.inner.state.send_if_modified(|s| s.last_error.take().is_some());
    }

    /// Re-fetch the whole collection.
    ///
    /// On success both the current and the pristine list are replaced, with
    /// ages computed as of today, and the last error is cleared. On failure
    /// the lists are left as they were. Sort order is not preserved.
    ///
    /// A fetch that succeeded but was not applied reports why in its
    /// [`RefreshOutcome`]. A failed fetch is an error either way, but only
    /// the latest one is recorded.
    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        let generation = self.begin_refresh();
        self.refresh_with(generation).await
    }

    /// Mark a refresh as started and return its generation.
    pub(crate) fn begin_refresh(&self) -> u64 {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.send_modify(|s| s.is_loading = true);
        generation
    }

    #[instrument(skip(self))]
    pub(crate) async fn refresh_with(&self, generation: u64) -> Result<RefreshOutcome> {
        debug!("Refreshing birthdays");

        let today = self.inner.clock.today();
        let result = self.inner.remote.list().await.and_then(|records| {
            records
                .into_iter()
                .map(|record| {
                    let id = record.id;
                    record.with_age_on(today).map_err(|e| {
                        error!(%id, error = %e, "Record has an impossible birth date");
                        Error::from(e)
                    })
                })
                .collect::<Result<Vec<_>>>()
        });

        let mut outcome = RefreshOutcome::Applied;
        self.inner.state.send_if_modified(|s| {
            let latest = self.inner.generation.load(Ordering::SeqCst) == generation;
            if self.is_closed() {
                outcome = RefreshOutcome::Cancelled;
                return latest && std::mem::replace(&mut s.is_loading, false);
            }
            if !latest {
                outcome = RefreshOutcome::Superseded;
                return false;
            }
            s.is_loading = false;
            match &result {
                Ok(records) => {
                    s.current = records.clone();
                    s.pristine = records.clone();
                    s.last_error = None;
                }
                Err(err) => s.last_error = Some(err.to_string()),
            }
            true
        });

        if outcome != RefreshOutcome::Applied {
            debug!(?outcome, "Discarding refresh");
            return result.map(|_| outcome);
        }

        match result {
            Ok(records) => {
                info!(count = records.len(), "Birthdays refreshed");
                Ok(outcome)
            }
            Err(err) => {
                warn!(error = %err, "Refresh failed");
                Err(err)
            }
        }
    }

    /// Fetch a single record with its age computed. The collection is not touched.
    #[instrument(skip(self))]
    pub async fn get(&self, id: BirthdayId) -> Result<Birthday> {
        let today = self.inner.clock.today();
        let result = self
            .inner
            .remote
            .get(id)
            .await
            .and_then(|record| record.with_age_on(today).map_err(Error::from));
        self.recorded(result)
    }

    /// Create a record on the remote, then refresh.
    #[instrument(skip(self, birthday), fields(name = %birthday.name))]
    pub async fn add(&self, birthday: Birthday) -> Result<()> {
        self.recorded(birthday.validate())?;
        let created = self.recorded(self.inner.remote.create(&birthday).await)?;
        debug!(id = %created.id, "Birthday added");
        self.refresh_after_write().await
    }

    /// Replace the record stored under `id`, then refresh.
    #[instrument(skip(self, birthday))]
    pub async fn update(&self, id: BirthdayId, birthday: Birthday) -> Result<()> {
        self.recorded(id.assigned().and_then(|_| birthday.validate()))?;
        self.recorded(self.inner.remote.update(id, &birthday).await)?;
        debug!("Birthday updated");
        self.refresh_after_write().await
    }

    /// Delete the record stored under `id`, then refresh.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: BirthdayId) -> Result<()> {
        self.recorded(id.assigned())?;
        self.recorded(self.inner.remote.delete(id).await)?;
        debug!("Birthday deleted");
        self.refresh_after_write().await
    }

    async fn refresh_after_write(&self) -> Result<()> {
        if self.is_closed() {
            debug!("Skipping refresh for closed handle");
            return Ok(());
        }
        self.refresh().await.map(|_| ())
    }

    /// Reorder the current list. The pristine list is untouched.
    pub fn sort(&self, field: SortField, ascending: bool) {
        debug!(%field, ascending, "Sorting birthdays");
        self.inner
            .state
            .send_modify(|s| sort_records(&mut s.current, field, ascending));
    }

    /// Replace the current list with the pristine records matching `value`.
    ///
    /// Always derived from the pristine list, so filters never compound. An
    /// empty value restores the pristine list.
    pub fn filter(&self, field: FilterField, value: &str) {
        debug!(%field, value, "Filtering birthdays");
        self.inner
            .state
            .send_modify(|s| s.current = filter_records(&s.pristine, field, value));
    }

    fn recorded<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            if self.is_closed() {
                debug!(error = %err, "Birthday operation failed after close");
                return result;
            }
            warn!(error = %err, "Birthday operation failed");
            let message = err.to_string();
            self.inner
                .state
                .send_modify(|s| s.last_error = Some(message));
        }
        result
    }
}

impl<R> std::fmt::Debug for CollectionStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("CollectionStore")
            .field("records", &state.current.len())
            .field("is_loading", &state.is_loading)
            .field("last_error", &state.last_error)
            .finish()
    }
}
