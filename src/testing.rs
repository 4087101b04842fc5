//! In-memory breed fetcher for local testing.

use crate::fetcher::{BreedFetcher, Error};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A minimal [`BreedFetcher`] implementation for testing purposes.
///
/// To avoid excessive calls to the real API, tests can exercise the caching
/// layer against this fetcher instead. It recognizes exactly one breed,
/// `"hound"` (compared ASCII-case-insensitively, without trimming), and
/// answers `["afghan", "basset"]`; every other input fails with
/// [`Error::BreedNotFound`]. Each invocation is counted.
#[derive(Debug, Default)]
pub struct LocalBreedFetcher {
    call_count: AtomicUsize,
}

impl LocalBreedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of times `get_sub_breeds` has been invoked on this
    /// fetcher, successes and failures alike.
    pub fn get_call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BreedFetcher for LocalBreedFetcher {
    async fn get_sub_breeds(&self, breed: Option<&str>) -> Result<Vec<String>, Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if breed.is_some_and(|name| name.eq_ignore_ascii_case("hound")) {
            return Ok(vec!["afghan".to_string(), "basset".to_string()]);
        }
        Err(Error::BreedNotFound(breed.map(str::to_owned)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recognizes_hound_in_any_case() {
        let fetcher = LocalBreedFetcher::new();

        let lower = fetcher.get_sub_breeds(Some("hound")).await.unwrap();
        let upper = fetcher.get_sub_breeds(Some("HOUND")).await.unwrap();

        assert_eq!(lower, vec!["afghan", "basset"]);
        assert_eq!(upper, lower);
        assert_eq!(fetcher.get_call_count(), 2);
    }

    #[tokio::test]
    async fn fails_for_unknown_breeds_and_missing_input() {
        let fetcher = LocalBreedFetcher::new();

        let error = fetcher.get_sub_breeds(Some("poodle")).await.unwrap_err();
        assert!(matches!(error, Error::BreedNotFound(Some(ref breed)) if breed == "poodle"));

        let error = fetcher.get_sub_breeds(None).await.unwrap_err();
        assert!(matches!(error, Error::BreedNotFound(None)));

        assert_eq!(fetcher.get_call_count(), 2);
    }
}
