//! Async data boundary consumed by presentation code

use crate::analytics::{Analytics, EmissionSummary};
use async_trait::async_trait;
use gsc_model::{EmissionPoint, ProductPassport, Project, Supplier};
use std::sync::Arc;

/// Read-only access to the tracker dataset
///
/// Every operation resolves; a miss is `None` or an empty slice, never an
/// error. Implementations may delay to model request latency.
#[async_trait]
pub trait SupplyChainApi: Send + Sync {
    /// Every project, in seed order
    async fn list_projects(&self) -> Arc<[Project]>;

    /// First project with the given id
    async fn get_project_by_id(&self, id: &str) -> Option<Project>;

    /// Every supplier, in seed order
    async fn list_suppliers(&self) -> Arc<[Supplier]>;

    /// Passport whose `product_id` matches (not the passport id)
    async fn get_product_passport(&self, product_id: &str) -> Option<ProductPassport>;

    /// A project's emission points; empty for unknown projects
    async fn get_emissions_for_project(&self, project_id: &str) -> Arc<[EmissionPoint]>;

    /// Per-project and per-stage totals
    async fn get_analytics(&self) -> Arc<Analytics>;

    /// Footprint figures for one project
    async fn emission_summary(&self, project_id: &str) -> Arc<EmissionSummary>;
}
