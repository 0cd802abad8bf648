//! Data service over the seed dataset
//!
//! Plain lookups delay for their configured latency and then read the
//! shared [`DataContext`]. Two results are memoized for the lifetime of the
//! service and never invalidated:
//!
//! - The emission ledger fetch. The first caller of
//!   [`get_emissions_for_project`](SupplyChainApi::get_emissions_for_project)
//!   starts it; every caller, whatever project it asks for, then slices the
//!   same ledger.
//! - The analytics reduction. It runs once; concurrent first callers wait
//!   on the same computation and all receive the same `Arc`.
//!
//! Both run as [`Memo`] tasks that own what they need, so a caller dropped
//! mid-delay neither cancels nor restarts the work for the others.

use crate::analytics::{Analytics, EmissionSummary};
use crate::api::SupplyChainApi;
use crate::cache::SummaryCache;
use crate::config::{Operation, ServiceConfig};
use crate::error::ServiceError;
use crate::memo::{Memo, SharedTask};
use async_trait::async_trait;
use gsc_model::{DataContext, EmissionLedger, EmissionPoint, ProductPassport, Project, ProjectId, Supplier};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Instrumentation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceStats {
    /// Requests served, all operations
    pub requests: u64,
    /// Times the emission ledger was fetched
    pub ledger_fetches: u64,
    /// Times the analytics reduction ran
    pub analytics_reductions: u64,
    /// Emission summaries computed
    pub summary_computations: u64,
}

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    ledger_fetches: AtomicU64,
    analytics_reductions: AtomicU64,
    summary_computations: AtomicU64,
}

/// Memoizing data service
#[derive(Debug)]
pub struct DataService {
    ctx: Arc<DataContext>,
    config: ServiceConfig,
    ledger: Memo<Arc<EmissionLedger>>,
    analytics: Memo<Arc<Analytics>>,
    summaries: SummaryCache,
    counters: Arc<Counters>,
}

impl DataService {
    /// Create service over an existing context
    #[must_use]
    pub fn new(ctx: Arc<DataContext>, config: ServiceConfig) -> Self {
        let summaries = SummaryCache::new(config.summary_cache_capacity);
        Self {
            ctx,
            config,
            ledger: Memo::new(),
            analytics: Memo::new(),
            summaries,
            counters: Arc::new(Counters::default()),
        }
    }

    /// Build the seed dataset and a service over it
    ///
    /// # Errors
    /// Returns error if the seed fails validation
    pub fn seeded(config: ServiceConfig) -> Result<Self, ServiceError> {
        let ctx = DataContext::seeded()?;
        tracing::info!(
            suppliers = ctx.suppliers().len(),
            emission_points = ctx.emission_point_count(),
            "data service ready"
        );
        Ok(Self::new(Arc::new(ctx), config))
    }

    /// Underlying dataset
    #[inline]
    #[must_use]
    pub fn context(&self) -> &Arc<DataContext> {
        &self.ctx
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Summary cache handle
    #[inline]
    #[must_use]
    pub fn summaries(&self) -> &SummaryCache {
        &self.summaries
    }

    /// Snapshot of the instrumentation counters
    #[must_use]
    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            requests: self.counters.requests.load(Ordering::Relaxed),
            ledger_fetches: self.counters.ledger_fetches.load(Ordering::SeqCst),
            analytics_reductions: self.counters.analytics_reductions.load(Ordering::SeqCst),
            summary_computations: self.counters.summary_computations.load(Ordering::SeqCst),
        }
    }

    async fn simulate(&self, op: Operation) {
        self.counters.requests.fetch_add(1, Ordering::Relaxed);
        pause(self.config.latency.delay_for(op)).await;
    }

    /// Handle on the ledger fetch, creating it on first use
    fn ledger_task(&self) -> SharedTask<Arc<EmissionLedger>> {
        self.ledger.task(|| {
            let ctx = Arc::clone(&self.ctx);
            let counters = Arc::clone(&self.counters);
            let delay = self.config.latency.delay_for(Operation::Emissions);
            async move {
                pause(delay).await;
                counters.ledger_fetches.fetch_add(1, Ordering::SeqCst);
                let ledger = Arc::new(ctx.emissions().clone());
                tracing::info!(projects = ledger.len(), "emission ledger fetched");
                ledger
            }
        })
    }

    /// The shared emission ledger, fetched on first use
    pub async fn ledger(&self) -> Arc<EmissionLedger> {
        self.ledger_task().await
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

fn slice_of(ledger: &EmissionLedger, project_id: &str) -> Arc<[EmissionPoint]> {
    match ledger.get(project_id) {
        Some(points) => Arc::clone(points),
        None => {
            tracing::debug!(project_id, "no emissions recorded");
            Arc::from(Vec::new())
        }
    }
}

#[async_trait]
impl SupplyChainApi for DataService {
    async fn list_projects(&self) -> Arc<[Project]> {
        tracing::debug!(op = Operation::ListProjects.as_str(), "request");
        self.simulate(Operation::ListProjects).await;
        Arc::clone(self.ctx.projects())
    }

    async fn get_project_by_id(&self, id: &str) -> Option<Project> {
        tracing::debug!(op = Operation::GetProject.as_str(), id, "request");
        self.simulate(Operation::GetProject).await;
        let project = self.ctx.project(id).cloned();
        if project.is_none() {
            tracing::debug!(id, "project not found");
        }
        project
    }

    async fn list_suppliers(&self) -> Arc<[Supplier]> {
        tracing::debug!(op = Operation::ListSuppliers.as_str(), "request");
        self.simulate(Operation::ListSuppliers).await;
        Arc::clone(self.ctx.suppliers())
    }

    async fn get_product_passport(&self, product_id: &str) -> Option<ProductPassport> {
        tracing::debug!(op = Operation::GetPassport.as_str(), product_id, "request");
        self.simulate(Operation::GetPassport).await;
        let passport = self.ctx.passport_for_product(product_id).cloned();
        if passport.is_none() {
            tracing::debug!(product_id, "passport not found");
        }
        passport
    }

    async fn get_emissions_for_project(&self, project_id: &str) -> Arc<[EmissionPoint]> {
        tracing::debug!(op = Operation::Emissions.as_str(), project_id, "request");
        self.counters.requests.fetch_add(1, Ordering::Relaxed);
        let ledger = self.ledger().await;
        slice_of(&ledger, project_id)
    }

    async fn get_analytics(&self) -> Arc<Analytics> {
        tracing::debug!(op = Operation::Analytics.as_str(), "request");
        self.counters.requests.fetch_add(1, Ordering::Relaxed);
        self.analytics
            .get_or_init(|| {
                let ctx = Arc::clone(&self.ctx);
                let counters = Arc::clone(&self.counters);
                let delay = self.config.latency.delay_for(Operation::Analytics);
                async move {
                    pause(delay).await;
                    counters.analytics_reductions.fetch_add(1, Ordering::SeqCst);
                    let analytics = Analytics::reduce(ctx.emissions());
                    tracing::info!(
                        projects = analytics.totals.len(),
                        stages = analytics.by_stage.len(),
                        grand_total_kg = analytics.grand_total(),
                        "analytics reduced"
                    );
                    Arc::new(analytics)
                }
            })
            .await
    }

    async fn emission_summary(&self, project_id: &str) -> Arc<EmissionSummary> {
        tracing::debug!(op = "emission_summary", project_id, "request");
        self.counters.requests.fetch_add(1, Ordering::Relaxed);
        let key = ProjectId::new(project_id);
        let ledger = self.ledger_task();
        let counters = Arc::clone(&self.counters);
        let id = key.clone();
        self.summaries
            .get_with(key, async move {
                let ledger = ledger.await;
                let points = slice_of(&ledger, id.as_str());
                counters.summary_computations.fetch_add(1, Ordering::SeqCst);
                Arc::new(EmissionSummary::from_points(id, &points))
            })
            .await
    }
}
