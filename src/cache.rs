//! # Caching layer for breed lookups
//!
//! This module provides `CachingBreedFetcher`, a wrapper around any
//! [`BreedFetcher`] that remembers successful lookups to improve performance
//! and lessen the load on the underlying data source. The number of calls
//! that actually reach the underlying fetcher is recorded and can be read
//! back with `get_calls_made`.
//!
//! Failed lookups are never cached: a breed that produced
//! [`Error::BreedNotFound`] is fetched again on the next call, so a lookup
//! that failed because of a transient network problem recovers as soon as
//! the data source does.
//!
//! The cache maps the normalized name of a breed (trimmed, ASCII
//! lower-cased) to its list of sub-breed names, so `"Hound"`, `"hound"` and
//! `" HOUND "` share a single entry.

use crate::fetcher::{BreedFetcher, Error};
use async_trait::async_trait;
use log::{debug, trace};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// A [`BreedFetcher`] that caches the results of another fetcher.
///
/// The wrapped fetcher is consulted once per distinct normalized breed name;
/// subsequent lookups are served from memory. Entries are kept for the
/// lifetime of the instance. There is no eviction and no persistence.
///
/// The cache can be shared across tasks. No lock is held while the wrapped
/// fetcher runs, which also means there is no single-flight guarantee: two
/// tasks that miss on the same key at the same time will each reach the
/// underlying fetcher, each increment the call counter, and the later
/// result wins the cache slot.
pub struct CachingBreedFetcher<F> {
    fetcher: F,
    cache: RwLock<HashMap<String, Vec<String>>>,
    calls_made: AtomicUsize,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Create a new caching fetcher around the given underlying fetcher.
    ///
    /// # Arguments
    ///
    /// * `fetcher` - The fetcher consulted on cache misses.
    ///
    /// # Returns
    ///
    /// A caching fetcher with an empty cache and a zeroed call counter.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: RwLock::new(HashMap::new()),
            calls_made: AtomicUsize::new(0),
        }
    }

    /// The number of times the underlying fetcher has been invoked, i.e.
    /// the number of cache misses so far. Lookups served from the cache do
    /// not count.
    pub fn get_calls_made(&self) -> usize {
        self.calls_made.load(Ordering::SeqCst)
    }
}

/// Normalization rule for cache keys.
fn cache_key(breed: &str) -> String {
    breed.trim().to_ascii_lowercase()
}

#[async_trait]
impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    /// Fetch the sub breeds for the given breed, serving from the cache
    /// when possible.
    ///
    /// A `None` breed has no cache key: it is always delegated and its
    /// result is never stored. For `Some` breeds, a successful result is
    /// stored under the normalized key before it is returned; a failure is
    /// propagated unchanged and leaves no cache entry.
    async fn get_sub_breeds(&self, breed: Option<&str>) -> Result<Vec<String>, Error> {
        let key = breed.map(cache_key);

        if let Some(key) = key.as_deref() {
            let cache = self.cache.read().await;
            if let Some(sub_breeds) = cache.get(key) {
                debug!("Serving sub breeds for {} from cache", key);
                return Ok(sub_breeds.clone());
            }
        }

        debug!("Cache miss for breed {:?}, calling underlying fetcher", breed);
        self.calls_made.fetch_add(1, Ordering::SeqCst);

        // Delegate with the original argument; normalization is only for keys.
        let sub_breeds = self.fetcher.get_sub_breeds(breed).await?;

        if let Some(key) = key {
            trace!("Caching {} sub breeds under key {}", sub_breeds.len(), key);
            self.cache.write().await.insert(key, sub_breeds.clone());
        }

        Ok(sub_breeds)
    }
}
