//! Test doubles

use async_trait::async_trait;
use gsc_model::{EmissionPoint, ProductPassport, Project, Supplier};
use gsc_service::{Analytics, EmissionSummary, SupplyChainApi};
use std::sync::Arc;

mockall::mock! {
    pub Api {}

    #[async_trait]
    impl SupplyChainApi for Api {
        async fn list_projects(&self) -> Arc<[Project]>;
        async fn get_project_by_id(&self, id: &str) -> Option<Project>;
        async fn list_suppliers(&self) -> Arc<[Supplier]>;
        async fn get_product_passport(&self, product_id: &str) -> Option<ProductPassport>;
        async fn get_emissions_for_project(&self, project_id: &str) -> Arc<[EmissionPoint]>;
        async fn get_analytics(&self) -> Arc<Analytics>;
        async fn emission_summary(&self, project_id: &str) -> Arc<EmissionSummary>;
    }
}
