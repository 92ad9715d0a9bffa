//! birthday-store - Client-side state for a remote birthday collection.
//!
//! [`CollectionStore`] owns the in-memory list, keeps it in step with a
//! [`BirthdayRemote`](birthday_core::BirthdayRemote) and derives sorted and
//! filtered views. [`BirthdayViewModel`] wraps a store for presentation
//! layers, running operations in the background and fetching on creation.
//! [`Auth`] plugs an optional identity provider in next to it.
//!
//! All state changes go through the store's operations; observers read
//! snapshots through [`CollectionStore::subscribe`] or
//! [`CollectionStore::updates`].

pub mod auth;
pub mod state;
pub mod store;
pub mod view;
pub mod view_model;

pub use auth::{Auth, AuthAdapter, AuthPhase, AuthState};
pub use state::StoreState;
pub use store::{CollectionStore, RefreshOutcome};
pub use view::{FilterField, SortField};
pub use view_model::BirthdayViewModel;
