//! The breed lookup capability.
//!
//! This module defines the `BreedFetcher` trait, the single operation every
//! sub-breed source supports, together with the error type shared by all
//! implementations. The crate ships two implementations: `DogApiBreedFetcher`
//! backed by the dog.ceo API, and `LocalBreedFetcher` for tests. The caching
//! layer in `crate::cache` wraps any of them and implements the trait itself,
//! so fetchers compose.

use async_trait::async_trait;
use std::sync::Arc;

/// Different types of errors that can occur when fetching sub breeds.
///
/// The `BreedFetcher` contract collapses every failure mode into a single
/// "no sub-breed data" outcome, so there is only one variant. Whether a
/// lookup failed because the breed is unknown or because the data source
/// was unreachable is not observable through this interface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No sub-breed data is available for the given input. Carries the
    /// original breed argument as the caller supplied it, unnormalized.
    #[error("Breed not found: {}", .0.as_deref().unwrap_or("<none>"))]
    BreedNotFound(Option<String>),
}

/// A source of sub-breed names.
///
/// Implementations return the ordered list of sub-breed names for a breed,
/// or fail with [`Error::BreedNotFound`]. The breed argument is optional to
/// model callers that have no breed at all; a `None` input always fails on
/// the shipped implementations but is still delegated by the caching layer.
///
/// # Example
///
/// ```
/// use dog_api_client::{BreedFetcher, Error};
/// use async_trait::async_trait;
///
/// struct FlatFetcher;
///
/// #[async_trait]
/// impl BreedFetcher for FlatFetcher {
///     async fn get_sub_breeds(&self, breed: Option<&str>) -> Result<Vec<String>, Error> {
///         match breed {
///             Some(_) => Ok(Vec::new()),
///             None => Err(Error::BreedNotFound(None)),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait BreedFetcher: Send + Sync {
    /// Fetch the list of sub breeds for the given breed.
    ///
    /// # Arguments
    ///
    /// * `breed` - The breed to fetch sub breeds for, if any.
    ///
    /// # Returns
    ///
    /// The ordered sub-breed names for the breed, possibly empty, or
    /// [`Error::BreedNotFound`] when no data is available for the input.
    async fn get_sub_breeds(&self, breed: Option<&str>) -> Result<Vec<String>, Error>;
}

#[async_trait]
impl<F: BreedFetcher + ?Sized> BreedFetcher for Arc<F> {
    async fn get_sub_breeds(&self, breed: Option<&str>) -> Result<Vec<String>, Error> {
        (**self).get_sub_breeds(breed).await
    }
}
