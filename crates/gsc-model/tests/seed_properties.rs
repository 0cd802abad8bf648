//! Property tests over the seed dataset

use gsc_model::{stage, DataContext, SUPPLIER_TARGET};
use proptest::prelude::*;
use std::sync::OnceLock;

fn ctx() -> &'static DataContext {
    static CTX: OnceLock<DataContext> = OnceLock::new();
    CTX.get_or_init(|| DataContext::seeded().expect("seed must validate"))
}

proptest! {
    #[test]
    fn unknown_project_ids_miss(id in "[a-z]{1,3}[0-9]{2,4}") {
        prop_assume!(!["p1", "p2", "p3", "p4"].contains(&id.as_str()));
        prop_assert!(ctx().project(&id).is_none());
        prop_assert!(ctx().emissions().get(id.as_str()).is_none());
        prop_assert!(ctx().passport_for_product(&id).is_none());
    }

    #[test]
    fn every_supplier_index_has_matching_id(n in 1usize..=SUPPLIER_TARGET) {
        let supplier = &ctx().suppliers()[n - 1];
        prop_assert_eq!(supplier.id.as_str(), format!("s{n}"));
        prop_assert!(supplier.rating.is_some_and(|r| r <= 100));
        prop_assert!(supplier.coordinates().is_some());
    }
}

#[test]
fn emissions_are_non_negative_and_use_chain_stages() {
    for points in ctx().emissions().values() {
        for point in points.iter() {
            assert!(point.emissions_kg >= 0.0);
            assert!(stage::CHAIN.contains(&point.stage.as_str()));
        }
    }
}

#[test]
fn independent_builds_serialize_identically() {
    let first = serde_json::to_vec(&DataContext::seeded().unwrap()).unwrap();
    let second = serde_json::to_vec(&DataContext::seeded().unwrap()).unwrap();
    assert_eq!(first, second);
}
