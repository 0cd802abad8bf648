//! GSC Views - presentation state for the tracker pages
//!
//! Everything a page needs beyond raw service data:
//! - Dashboard figures (project count, average latency, recent projects)
//! - Carbon footprint overview and emission timeline
//! - Page-local supplier book with add/edit/delete/search
//! - Selected-project state shared between pages
//!
//! All loaders take any [`SupplyChainApi`](gsc_service::SupplyChainApi), so
//! pages can run against the seeded service or a test double.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod carbon;
pub mod dashboard;
pub mod error;
pub mod selection;
pub mod supplier_book;

#[cfg(test)]
mod testing;

pub use carbon::{CarbonOverview, TimelineEntry};
pub use dashboard::{DashboardSummary, StackCategory};
pub use error::SupplierFormError;
pub use selection::SelectionState;
pub use supplier_book::{SupplierBook, SupplierDraft};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
