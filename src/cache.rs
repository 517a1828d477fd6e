//! Single-slot TTL cache holding the last validated country snapshot.
//!
//! The whole dataset is one cache key, so the cache is one slot plus a TTL.
//! The slot is replaced wholesale on refresh and never mutated in place.
//! There is deliberately no stale-if-error path: an expired slot with a
//! failing refetch yields the error to the caller, and the old snapshot is
//! left in place untouched.

use crate::error::Result;
use crate::models::Country;
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};

/// Default snapshot time-to-live.
pub const DEFAULT_TTL_SECS: i64 = 600;

/// Seam between the cache and the upstream client, so the cache can be
/// exercised without a network.
pub trait FetchCountries: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<Country>>;
}

impl FetchCountries for crate::api::Client {
    fn fetch_all(&self) -> Result<Vec<Country>> {
        crate::api::Client::fetch_all(self)
    }
}

impl<F: FetchCountries + ?Sized> FetchCountries for Arc<F> {
    fn fetch_all(&self) -> Result<Vec<Country>> {
        (**self).fetch_all()
    }
}

/// The cached dataset plus its fetch timestamp.
#[derive(Debug, Clone)]
struct Snapshot {
    countries: Arc<Vec<Country>>,
    fetched_at: DateTime<Utc>,
}

/// Cache owning the single snapshot slot.
///
/// Constructed once at process start and shared; aggregation code reads
/// through [`SnapshotCache::snapshot`] and never touches the slot directly.
pub struct SnapshotCache<F = crate::api::Client> {
    fetcher: F,
    ttl: Duration,
    slot: Mutex<Option<Snapshot>>,
}

impl<F: FetchCountries> SnapshotCache<F> {
    /// Create a cache over `fetcher` with the default TTL.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            ttl: Duration::seconds(DEFAULT_TTL_SECS),
            slot: Mutex::new(None),
        }
    }

    /// Set the snapshot time-to-live.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    fn is_stale(&self, fetched_at: DateTime<Utc>) -> bool {
        Utc::now() - fetched_at > self.ttl
    }

    /// Return the current snapshot, refetching if the slot is empty or expired.
    ///
    /// The slot mutex is held across the refetch: concurrent callers hitting
    /// a cold or expired cache serialize here, and every caller after the
    /// first observes the snapshot that call stored instead of fetching
    /// again. On fetch failure the slot keeps whatever it held before.
    pub fn snapshot(&self) -> Result<Arc<Vec<Country>>> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(snap) = slot.as_ref() {
            if !self.is_stale(snap.fetched_at) {
                log::debug!("snapshot cache hit ({} countries)", snap.countries.len());
                return Ok(Arc::clone(&snap.countries));
            }
        }
        let countries = Arc::new(self.fetcher.fetch_all()?);
        *slot = Some(Snapshot {
            countries: Arc::clone(&countries),
            fetched_at: Utc::now(),
        });
        log::debug!("snapshot cache refreshed ({} countries)", countries.len());
        Ok(countries)
    }

    /// Fetch timestamp of the currently cached snapshot, if any.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|s| s.fetched_at)
    }
}
