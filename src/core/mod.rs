//! Core business logic - the catalog backend.
//!
//! [`Backend`] owns the persisted store and the artificial latency. The four
//! resource APIs live in their own modules as free functions taking the backend:
//! [`auth`], [`product`], [`inquiry`] and [`image`]. Every collection is read
//! and written back whole on each mutation, under the backend's write gate.

/// Admin login, logout and session restore
pub mod auth;
/// Site image overrides
pub mod image;
/// Contact inquiries
pub mod inquiry;
/// Catalog products
pub mod product;
/// Seed products inserted into an empty catalog
pub mod seed;

use crate::storage::StoragePort;
use rand::Rng;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// The catalog backend: a store plus the simulated network delay.
#[derive(Debug)]
pub struct Backend<S> {
    store: S,
    latency: Duration,
    writes: Mutex<()>,
}

impl<S: StoragePort> Backend<S> {
    /// Creates a backend with no artificial delay.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            latency: Duration::ZERO,
            writes: Mutex::new(()),
        }
    }

    /// Sets the delay applied before every operation.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Configured delay.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    /// Serializes read-modify-write cycles on the stored collections.
    ///
    /// Hold the guard from the read until the write has completed.
    pub(crate) async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }

    pub(crate) async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

/// Generates a 9-character base-36 id not contained in `taken`.
pub(crate) fn fresh_id<'a>(taken: impl Iterator<Item = &'a str> + Clone) -> String {
    let mut rng = rand::rng();
    loop {
        let id: String = (0..ID_LEN)
            .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
            .collect();
        if !taken.clone().any(|t| t == id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_fresh_id_shape() {
        let id = fresh_id(std::iter::empty());
        assert_eq!(id.len(), ID_LEN);
        assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_fresh_id_avoids_taken() {
        let taken = ["seed-1".to_string(), "seed-2".to_string()];
        for _ in 0..100 {
            let id = fresh_id(taken.iter().map(String::as_str));
            assert!(!taken.contains(&id));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let backend = Backend::new(MemoryStore::new()).with_latency(Duration::from_millis(500));
        assert_eq!(backend.latency(), Duration::from_millis(500));

        let start = tokio::time::Instant::now();
        backend.simulate_latency().await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}
