//! JSON-over-HTTP client shared by the remote and the identity provider.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use birthday_core::{Error, IdToken};
use birthday_core::error::{ServerError, TransportError};

use crate::endpoints::ErrorBody;

/// HTTP client for JSON requests.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    bearer: Option<IdToken>,
}

impl RestClient {
    /// Create a new client. Without a timeout the HTTP layer's default applies.
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("birthday-http/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("failed to build HTTP client");

        Self {
            client,
            bearer: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_bearer(mut self, token: IdToken) -> Self {
        self.bearer = Some(token);
        self
    }

    /// Returns the bearer token, if any.
    pub fn bearer(&self) -> Option<&IdToken> {
        self.bearer.as_ref()
    }

    /// GET a JSON document.
    #[instrument(skip(self))]
    pub async fn get<R>(&self, url: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        debug!("GET");
        let response = self.send(self.client.get(url)).await?;
        self.handle_response(response).await
    }

    /// POST a JSON body and parse the JSON reply.
    #[instrument(skip(self, body))]
    pub async fn post<B, R>(&self, url: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("POST");
        let response = self.send(self.client.post(url).json(body)).await?;
        self.handle_response(response).await
    }

    /// POST with query parameters. The query is not logged; it may carry keys.
    #[instrument(skip(self, query, body))]
    pub async fn post_with_query<Q, B, R>(&self, url: &str, query: &Q, body: &B) -> Result<R, Error>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("POST");
        let response = self
            .send(self.client.post(url).query(query).json(body))
            .await?;
        self.handle_response(response).await
    }

    /// PUT a JSON body and parse the JSON reply.
    #[instrument(skip(self, body))]
    pub async fn put<B, R>(&self, url: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("PUT");
        let response = self.send(self.client.put(url).json(body)).await?;
        self.handle_response(response).await
    }

    /// DELETE a resource. An empty success body yields `None`.
    #[instrument(skip(self))]
    pub async fn delete<R>(&self, url: &str) -> Result<Option<R>, Error>
    where
        R: DeserializeOwned,
    {
        debug!("DELETE");
        let response = self.send(self.client.delete(url)).await?;

        let status = response.status();
        trace!(status = %status, "HTTP response");
        if !status.is_success() {
            return Err(Self::parse_error_response(response).await.into());
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| decode_error(&e))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, Error> {
        let mut request = request.header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token.as_str()));
        }
        request
            .send()
            .await
            .map_err(transport_error)
    }

    /// Handle a response, parsing the body or the error.
    async fn handle_response<R: DeserializeOwned>(&self, response: Response) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "HTTP response");

        if status.is_success() {
            response.json::<R>().await.map_err(transport_error)
        } else {
            Err(Self::parse_error_response(response).await.into())
        }
    }

    /// Build a [`ServerError`] from a non-success response.
    ///
    /// Falls back to the reason phrase when the body carries no message.
    async fn parse_error_response(response: Response) -> ServerError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        server_error(status, &body)
    }
}

fn server_error(status: StatusCode, body: &str) -> ServerError {
    let reason = status.canonical_reason().map(str::to_string);
    let (error, message) = serde_json::from_str::<ErrorBody>(body)
        .map(ErrorBody::into_parts)
        .unwrap_or_default();
    ServerError::new(status.as_u16(), error, message.or(reason))
}

/// Map a reqwest failure onto the transport taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

fn decode_error(err: &serde_json::Error) -> Error {
    Error::Transport(TransportError::Decode {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_uses_body_message() {
        let err = server_error(StatusCode::NOT_FOUND, r#"{"message":"no birthday 9"}"#);
        assert_eq!(err.status, 404);
        assert_eq!(err.message.as_deref(), Some("no birthday 9"));
    }

    #[test]
    fn server_error_falls_back_to_reason_phrase() {
        let err = server_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn bearer_is_opt_in() {
        let client = RestClient::new(None);
        assert!(client.bearer().is_none());

        let client = client.with_bearer(IdToken::new("id-token"));
        assert_eq!(client.bearer().map(IdToken::as_str), Some("id-token"));
    }

    #[test]
    fn server_error_with_empty_body() {
        let err = server_error(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(err.message.as_deref(), Some("Service Unavailable"));
        assert!(err.error.is_none());
    }
}
