//! # dog-api-client
//!
//! A small client for the [dog.ceo](https://dog.ceo/dog-api/) catalog that
//! looks up the sub breeds of a dog breed, with a caching layer to avoid
//! redundant network calls.
//!
//! The pieces:
//!
//! - [`BreedFetcher`]: the lookup capability, one async operation.
//! - [`DogApiBreedFetcher`]: the HTTP implementation against dog.ceo.
//! - [`CachingBreedFetcher`]: wraps any fetcher, memoizes successful
//!   lookups, and never caches failures.
//! - [`testing::LocalBreedFetcher`]: a fixed in-memory fetcher for tests.
//!
//! ## Quick start
//!
//! ```
//! use dog_api_client::{BreedFetcher, CachingBreedFetcher};
//! use dog_api_client::testing::LocalBreedFetcher;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let fetcher = CachingBreedFetcher::new(LocalBreedFetcher::new());
//!
//! let sub_breeds = fetcher.get_sub_breeds(Some("hound")).await.unwrap();
//! assert_eq!(sub_breeds, vec!["afghan", "basset"]);
//!
//! // Served from cache, the underlying fetcher is not called again.
//! let again = fetcher.get_sub_breeds(Some("HOUND")).await.unwrap();
//! assert_eq!(again, sub_breeds);
//! assert_eq!(fetcher.get_calls_made(), 1);
//! # }
//! ```
//!
//! Against the real API:
//!
//! ```no_run
//! use dog_api_client::{BreedFetcher, CachingBreedFetcher, DogApiBreedFetcher};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let fetcher = CachingBreedFetcher::new(DogApiBreedFetcher::new());
//! match fetcher.get_sub_breeds(Some("hound")).await {
//!     Ok(sub_breeds) => println!("hound sub breeds: {:?}", sub_breeds),
//!     Err(e) => eprintln!("{}", e),
//! }
//! # }
//! ```

pub mod cache;
pub mod client_config;
pub mod dog_api;
pub mod fetcher;
pub mod testing;

pub use cache::CachingBreedFetcher;
pub use client_config::ClientConfig;
pub use dog_api::DogApiBreedFetcher;
pub use fetcher::{BreedFetcher, Error};
