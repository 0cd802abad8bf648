//! Per-project emission summary cache using moka
//!
//! Summaries are keyed by project id. The cache holds the shared computation
//! rather than the finished value: concurrent requests for the same missing
//! key get the same task, so a summary is computed once no matter how many
//! callers race for it or give up while it runs.

use crate::analytics::EmissionSummary;
use crate::memo::{share, SharedTask};
use gsc_model::ProjectId;
use moka::future::Cache;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

type SummaryTask = SharedTask<Arc<EmissionSummary>>;

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: u64,
    /// Configured capacity
    pub max_capacity: u64,
}

/// Emission summary cache
#[derive(Clone)]
pub struct SummaryCache {
    inner: Cache<ProjectId, SummaryTask>,
    max_capacity: u64,
}

impl SummaryCache {
    /// Create cache with max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
            max_capacity,
        }
    }

    /// Get a finished summary
    pub async fn get(&self, project_id: &str) -> Option<Arc<EmissionSummary>> {
        let task = self.inner.get(project_id).await?;
        task.peek().cloned()
    }

    /// Get summary or compute it with `init`
    ///
    /// Only the first of several callers for the same key has its `init`
    /// used; the rest await that computation. It keeps running for the
    /// remaining callers when any of them is dropped.
    pub async fn get_with<F>(&self, project_id: ProjectId, init: F) -> Arc<EmissionSummary>
    where
        F: Future<Output = Arc<EmissionSummary>> + Send + 'static,
    {
        let task = self
            .inner
            .get_with(project_id, async move { share(init) })
            .await;
        task.await
    }

    /// Check if a summary has been requested for this project
    #[inline]
    pub async fn contains(&self, project_id: &str) -> bool {
        self.inner.get(project_id).await.is_some()
    }

    /// Flush pending maintenance so counts are exact
    #[inline]
    pub async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }

    /// Get cache statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.inner.entry_count(),
            max_capacity: self.max_capacity,
        }
    }
}

impl Default for SummaryCache {
    /// Create cache with default capacity (64 entries)
    fn default() -> Self {
        Self::new(64)
    }
}

impl fmt::Debug for SummaryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummaryCache")
            .field("entry_count", &self.inner.entry_count())
            .field("max_capacity", &self.max_capacity)
            .finish()
    }
}
