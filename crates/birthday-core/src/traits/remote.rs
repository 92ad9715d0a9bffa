//! Remote record source trait.

use async_trait::async_trait;

use crate::record::Birthday;
use crate::types::BirthdayId;
use crate::Result;

/// The remote source of truth for birthday records.
///
/// Each call issues one request and resolves once the response has been
/// parsed. Implementations hold no mutable state besides their endpoint
/// configuration; they never retry.
#[async_trait]
pub trait BirthdayRemote: Send + Sync {
    /// List every record, in server order.
    async fn list(&self) -> Result<Vec<Birthday>>;

    /// Fetch a single record by id.
    async fn get(&self, id: BirthdayId) -> Result<Birthday>;

    /// Create a record; returns it with the server-assigned id.
    async fn create(&self, birthday: &Birthday) -> Result<Birthday>;

    /// Replace the record stored under `id`.
    async fn update(&self, id: BirthdayId, birthday: &Birthday) -> Result<Birthday>;

    /// Delete the record stored under `id`.
    ///
    /// Returns the deleted representation when the server sends one.
    async fn delete(&self, id: BirthdayId) -> Result<Option<Birthday>>;
}
