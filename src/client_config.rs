//! Configuration for the dog.ceo API fetcher.
//!
//! This module provides the `ClientConfig` struct used to configure
//! [`DogApiBreedFetcher`](crate::dog_api::DogApiBreedFetcher). All fields
//! have working defaults, so most callers never touch it; pointing
//! `endpoint` at a local mock server is what makes the fetcher testable
//! without network access.
//!
//! # Configuration Sources
//!
//! - **Direct Configuration**: construct the struct and set fields.
//! - **Environment Variables**: [`ClientConfig::from_env`] reads
//!   `DOG_API_ENDPOINT` and `DOG_API_TIMEOUT_SECS`, falling back to the
//!   defaults for anything unset.
//!
//! # Examples
//!
//! ```rust
//! use dog_api_client::client_config::ClientConfig;
//!
//! let config = ClientConfig {
//!     endpoint: "http://localhost:8080".to_string(),
//!     timeout_secs: Some(5),
//! };
//! ```

/// Default base URL of the public dog.ceo API.
pub const DEFAULT_ENDPOINT: &str = "https://dog.ceo/api";

/// Configuration settings for the dog.ceo API fetcher.
///
/// # Examples
///
/// ```rust
/// use dog_api_client::client_config::{ClientConfig, DEFAULT_ENDPOINT};
///
/// let config = ClientConfig::default();
/// assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL requests are sent to, without a trailing slash.
    ///
    /// Defaults to the public dog.ceo API. Override it to target a
    /// self-hosted mirror or a mock server in tests.
    pub endpoint: String,

    /// Optional per-request timeout, in seconds.
    ///
    /// `None` means no client-side timeout is applied and a request waits
    /// as long as the transport allows.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration from environment variables.
    ///
    /// Reads `DOG_API_ENDPOINT` and `DOG_API_TIMEOUT_SECS`. Unset or
    /// unparsable values fall back to the defaults, so this never fails.
    ///
    /// # Returns
    ///
    /// A new configuration instance.
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("DOG_API_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let timeout_secs = std::env::var("DOG_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());
        Self {
            endpoint,
            timeout_secs,
        }
    }
}
