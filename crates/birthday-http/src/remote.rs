//! REST-backed birthday remote.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use birthday_core::traits::BirthdayRemote;
use birthday_core::{ApiUrl, Birthday, BirthdayId, IdToken, ResourcePath, Result};

use crate::client::RestClient;

/// A [`BirthdayRemote`] that talks to the birthdays REST API.
///
/// | Operation | Request |
/// |-----------|---------|
/// | list | `GET /{resource}` |
/// | get | `GET /{resource}/{id}` |
/// | create | `POST /{resource}` |
/// | update | `PUT /{resource}/{id}` |
/// | delete | `DELETE /{resource}/{id}` |
#[derive(Debug, Clone)]
pub struct HttpRemote {
    api: ApiUrl,
    resource: ResourcePath,
    client: RestClient,
}

impl HttpRemote {
    /// Create a remote for the given API and collection.
    pub fn new(api: ApiUrl, resource: ResourcePath) -> Self {
        Self {
            api,
            resource,
            client: RestClient::new(None),
        }
    }

    /// Apply a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let client = RestClient::new(Some(timeout));
        self.client = match self.client.bearer() {
            Some(token) => client.with_bearer(token.clone()),
            None => client,
        };
        self
    }

    /// Present a signed-in user's ID token on every request.
    pub fn with_id_token(mut self, token: IdToken) -> Self {
        self.client = self.client.with_bearer(token);
        self
    }

    /// Returns the API base URL.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Returns the collection path.
    pub fn resource(&self) -> &ResourcePath {
        &self.resource
    }
}

#[async_trait]
impl BirthdayRemote for HttpRemote {
    #[instrument(skip(self), fields(api = %self.api, resource = %self.resource))]
    async fn list(&self) -> Result<Vec<Birthday>> {
        let records: Vec<Birthday> = self
            .client
            .get(&self.api.collection_url(&self.resource))
            .await?;
        debug!(count = records.len(), "Listed birthdays");
        Ok(records)
    }

    #[instrument(skip(self), fields(api = %self.api, resource = %self.resource, %id))]
    async fn get(&self, id: BirthdayId) -> Result<Birthday> {
        debug!("Getting birthday");
        self.client
            .get(&self.api.item_url(&self.resource, id))
            .await
    }

    #[instrument(skip(self, birthday), fields(api = %self.api, resource = %self.resource))]
    async fn create(&self, birthday: &Birthday) -> Result<Birthday> {
        debug!(name = %birthday.name, "Creating birthday");
        let created: Birthday = self
            .client
            .post(&self.api.collection_url(&self.resource), birthday)
            .await?;
        debug!(id = %created.id, "Birthday created");
        Ok(created)
    }

    #[instrument(skip(self, birthday), fields(api = %self.api, resource = %self.resource, %id))]
    async fn update(&self, id: BirthdayId, birthday: &Birthday) -> Result<Birthday> {
        debug!("Updating birthday");
        self.client
            .put(&self.api.item_url(&self.resource, id), birthday)
            .await
    }

    #[instrument(skip(self), fields(api = %self.api, resource = %self.resource, %id))]
    async fn delete(&self, id: BirthdayId) -> Result<Option<Birthday>> {
        debug!("Deleting birthday");
        self.client
            .delete(&self.api.item_url(&self.resource, id))
            .await
    }
}
