//! Testing utilities for the GSC workspace
//!
//! Shared fixtures for services, contexts and records.

#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use gsc_model::{stage, DataContext, EmissionLedger, EmissionPoint, Project, ProjectId, Supplier};
use gsc_service::{DataService, LatencyProfile, ServiceConfig};
use std::sync::Arc;

pub fn seed_context() -> Arc<DataContext> {
    Arc::new(DataContext::seeded().unwrap())
}

pub fn instant_service() -> DataService {
    DataService::new(seed_context(), ServiceConfig::instant())
}

pub fn shared_instant_service() -> Arc<DataService> {
    Arc::new(instant_service())
}

/// Service with default latencies; pair with `#[tokio::test(start_paused = true)]`
pub fn realistic_service() -> DataService {
    DataService::new(seed_context(), ServiceConfig::new())
}

pub fn service_with_latency(latency: LatencyProfile) -> DataService {
    DataService::new(seed_context(), ServiceConfig::new().with_latency(latency))
}

pub fn timestamp(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, day, 12, 0, 0).single().unwrap()
}

pub fn create_test_supplier(id: &str) -> Supplier {
    Supplier::new(id, format!("Supplier {id}"), "Porto, Portugal")
        .with_coordinates(41.1579, -8.6291)
        .with_rating(70)
        .with_certifications(["GOTS"])
}

/// Small context: one project with a two-point ledger
pub fn create_small_context() -> DataContext {
    let mut ledger = EmissionLedger::new();
    ledger.insert(
        ProjectId::new("t1"),
        Arc::from(vec![
            EmissionPoint::new(stage::RAW_MATERIAL, 10.0, "India", timestamp(1, 1)),
            EmissionPoint::new(stage::RETAIL, 400.0, "India", timestamp(1, 2)),
        ]),
    );
    DataContext::try_from_parts(
        vec![Project::new("t1", "Test", "test project", "Rust")],
        vec![create_test_supplier("s1")],
        vec![],
        ledger,
    )
    .unwrap()
}

pub fn small_instant_service() -> DataService {
    DataService::new(Arc::new(create_small_context()), ServiceConfig::instant())
}
