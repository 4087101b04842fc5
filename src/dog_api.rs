//! # dog.ceo backed breed fetcher
//!
//! This module provides `DogApiBreedFetcher`, the [`BreedFetcher`]
//! implementation that queries the dog.ceo API over HTTP. The endpoint and
//! an optional request timeout come from [`ClientConfig`].
//!
//! All failures surface as [`Error::BreedNotFound`]: an unknown breed, a
//! transport error, and a malformed response body are indistinguishable to
//! the caller. The underlying cause is logged at `debug` level.

use crate::client_config::ClientConfig;
use crate::fetcher::{BreedFetcher, Error};
use async_trait::async_trait;
use log::{debug, trace};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// A [`BreedFetcher`] that relies on the dog.ceo API.
///
/// The API answers `GET {endpoint}/breed/{breed}/list` with a JSON envelope
/// of the form `{"message": [...], "status": "success"}`. Only the envelope
/// decides the outcome; the HTTP status code is not consulted.
#[derive(Clone)]
pub struct DogApiBreedFetcher {
    client: reqwest::Client,
    config: ClientConfig,
}

impl DogApiBreedFetcher {
    /// Create a fetcher against the public dog.ceo endpoint.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a fetcher with a custom configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The endpoint and timeout settings to use.
    ///
    /// # Returns
    ///
    /// A fetcher that sends its requests to `config.endpoint`.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl Default for DogApiBreedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BreedFetcher for DogApiBreedFetcher {
    /// Fetch the list of sub breeds for the given breed from the dog.ceo API.
    ///
    /// The breed is trimmed and ASCII lower-cased before it is placed in the
    /// request path. A missing, empty, or all-whitespace breed fails without
    /// issuing a request.
    async fn get_sub_breeds(&self, breed: Option<&str>) -> Result<Vec<String>, Error> {
        let not_found = || Error::BreedNotFound(breed.map(str::to_owned));

        let name = breed.map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(not_found());
        }
        let normalized = name.to_ascii_lowercase();

        let raw_url = format!("{}/breed/{}/list", self.config.endpoint, normalized);
        let url = Url::parse(&raw_url).map_err(|e| {
            debug!("Invalid request url {}: {}", raw_url, e);
            not_found()
        })?;
        trace!("Url {} for breed {}", url, normalized);

        let mut request = self.client.get(url.as_str());
        if let Some(secs) = self.config.timeout_secs {
            request = request.timeout(Duration::from_secs(secs));
        }

        let response = request.send().await.map_err(|e| {
            debug!("Request for breed {} failed: {}", normalized, e);
            not_found()
        })?;
        let body = response.text().await.map_err(|e| {
            debug!("Reading response body for breed {} failed: {}", normalized, e);
            not_found()
        })?;
        trace!("Response body {} for breed {}", body, normalized);

        let envelope: Value = serde_json::from_str(&body).map_err(|e| {
            debug!("Error parsing response for breed {}: {}", normalized, e);
            not_found()
        })?;

        let status = envelope.get("status").and_then(Value::as_str).unwrap_or("");
        if !status.eq_ignore_ascii_case("success") {
            debug!("Unsuccessful status {:?} for breed {}", status, normalized);
            return Err(not_found());
        }

        // A successful envelope without a message list means no sub breeds.
        let mut sub_breeds = Vec::new();
        if let Some(entries) = envelope.get("message").and_then(Value::as_array) {
            sub_breeds.reserve(entries.len());
            for entry in entries {
                match entry.as_str() {
                    Some(sub_breed) => sub_breeds.push(sub_breed.to_string()),
                    None => {
                        debug!("Non-string sub breed entry for breed {}", normalized);
                        return Err(not_found());
                    }
                }
            }
        }

        Ok(sub_breeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn fetcher_for(server: &Server) -> DogApiBreedFetcher {
        DogApiBreedFetcher::with_config(ClientConfig {
            endpoint: server.url(),
            timeout_secs: None,
        })
    }

    #[tokio::test]
    async fn fetches_sub_breeds_for_a_known_breed() {
        crate::tests::setup();
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/breed/hound/list")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":["afghan","basset"],"status":"success"}"#)
            .create_async()
            .await;

        let fetcher = fetcher_for(&server);
        let sub_breeds = fetcher.get_sub_breeds(Some("hound")).await.unwrap();

        assert_eq!(sub_breeds, vec!["afghan", "basset"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn normalizes_the_breed_before_building_the_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/breed/hound/list")
            .with_status(200)
            .with_body(r#"{"message":["afghan","basset"],"status":"success"}"#)
            .create_async()
            .await;

        let fetcher = fetcher_for(&server);
        let sub_breeds = fetcher.get_sub_breeds(Some("  HoUnD  ")).await.unwrap();

        assert_eq!(sub_breeds, vec!["afghan", "basset"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_becomes_breed_not_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/breed/poodle/list")
            .with_status(404)
            .with_body(
                r#"{"status":"error","message":"Breed not found (master breed does not exist)","code":404}"#,
            )
            .create_async()
            .await;

        let fetcher = fetcher_for(&server);
        let error = fetcher.get_sub_breeds(Some("poodle")).await.unwrap_err();

        assert!(matches!(error, Error::BreedNotFound(Some(ref breed)) if breed == "poodle"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn blank_input_is_rejected_without_a_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let fetcher = fetcher_for(&server);

        let error = fetcher.get_sub_breeds(None).await.unwrap_err();
        assert!(matches!(error, Error::BreedNotFound(None)));

        let error = fetcher.get_sub_breeds(Some("")).await.unwrap_err();
        assert!(matches!(error, Error::BreedNotFound(Some(ref raw)) if raw.is_empty()));

        // The error keeps the input exactly as it was passed in.
        let error = fetcher.get_sub_breeds(Some("   ")).await.unwrap_err();
        assert!(matches!(error, Error::BreedNotFound(Some(ref raw)) if raw == "   "));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unparsable_body_becomes_breed_not_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/breed/hound/list")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let fetcher = fetcher_for(&server);
        let error = fetcher.get_sub_breeds(Some("hound")).await.unwrap_err();

        assert!(matches!(error, Error::BreedNotFound(Some(ref breed)) if breed == "hound"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_string_entries_make_the_response_malformed() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/breed/hound/list")
            .with_status(200)
            .with_body(r#"{"message":["afghan",17],"status":"success"}"#)
            .create_async()
            .await;

        let fetcher = fetcher_for(&server);
        let error = fetcher.get_sub_breeds(Some("hound")).await.unwrap_err();

        assert!(matches!(error, Error::BreedNotFound(Some(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn success_without_message_list_is_an_empty_list() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/breed/akita/list")
            .with_status(200)
            .with_body(r#"{"status":"success"}"#)
            .create_async()
            .await;

        let fetcher = fetcher_for(&server);
        let sub_breeds = fetcher.get_sub_breeds(Some("akita")).await.unwrap();

        assert_eq!(sub_breeds, Vec::<String>::new());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn status_is_matched_case_insensitively() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/breed/hound/list")
            .with_status(200)
            .with_body(r#"{"message":["afghan"],"status":"SUCCESS"}"#)
            .create_async()
            .await;

        let fetcher = fetcher_for(&server);
        let sub_breeds = fetcher.get_sub_breeds(Some("hound")).await.unwrap();

        assert_eq!(sub_breeds, vec!["afghan"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn transport_errors_become_breed_not_found() {
        let fetcher = DogApiBreedFetcher::with_config(ClientConfig {
            endpoint: "http://127.0.0.1:0".to_string(),
            timeout_secs: Some(2),
        });

        let error = fetcher.get_sub_breeds(Some("hound")).await.unwrap_err();
        assert!(matches!(error, Error::BreedNotFound(Some(ref breed)) if breed == "hound"));
    }
}
