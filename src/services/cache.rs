use crate::services::catalog::Catalog;
use moka::future::{Cache, CacheBuilder};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

const SNAPSHOT_KEY: &str = "catalog";

/// In-memory cache holding the current catalog snapshot
///
/// Requests share one `Arc<Catalog>` until the TTL expires or the
/// snapshot is invalidated. Concurrent misses are coalesced so the
/// loader runs once.
#[derive(Clone)]
pub struct CatalogCache {
    snapshots: Cache<&'static str, Arc<Catalog>>,
}

impl CatalogCache {
    pub fn new(ttl_secs: u64) -> Self {
        let snapshots = CacheBuilder::new(1)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { snapshots }
    }

    /// Return the cached snapshot, running `load` on a miss
    pub async fn get_or_load<F, E>(&self, load: F) -> Result<Arc<Catalog>, Arc<E>>
    where
        F: Future<Output = Result<Catalog, E>>,
        E: Send + Sync + 'static,
    {
        self.snapshots
            .try_get_with(SNAPSHOT_KEY, async {
                let catalog = load.await?;
                tracing::debug!("Catalog snapshot loaded: {} breeds", catalog.len());
                Ok::<_, E>(Arc::new(catalog))
            })
            .await
    }

    /// Replace the cached snapshot
    pub async fn insert(&self, catalog: Catalog) {
        self.snapshots.insert(SNAPSHOT_KEY, Arc::new(catalog)).await;
    }

    /// Drop the cached snapshot so the next read reloads it
    pub async fn invalidate(&self) {
        self.snapshots.invalidate(SNAPSHOT_KEY).await;
        tracing::debug!("Catalog snapshot invalidated");
    }

    pub fn is_cached(&self) -> bool {
        self.snapshots.contains_key(SNAPSHOT_KEY)
    }
}
