//! GSC Service - memoizing data service for the Green Supply Chain Tracker
//!
//! Serves the seed dataset through the async [`SupplyChainApi`] boundary:
//! - Simulated request latency per operation
//! - Emission ledger fetched once and sliced per project
//! - Analytics reduced once and replayed to every caller
//! - Per-project emission summaries cached with moka
//!
//! # Architecture
//!
//! ```text
//! DataContext (Arc, immutable) → DataService → SupplyChainApi → views / CLI
//!                                   ├── Memo<ledger>
//!                                   ├── Memo<analytics>
//!                                   └── SummaryCache (moka)
//! ```
//!
//! Memoized work runs as a shared future: a caller that stops waiting does
//! not cancel or restart it for anyone else.
//!
//! # Example
//!
//! ```rust,ignore
//! use gsc_service::{DataService, ServiceConfig, SupplyChainApi};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = DataService::seeded(ServiceConfig::new())?;
//! let analytics = service.get_analytics().await;
//! println!("{} projects", analytics.totals.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod analytics;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod memo;
pub mod service;

pub use analytics::{
    is_high_impact, Analytics, EmissionSummary, ProjectTotal, HIGH_IMPACT_THRESHOLD_KG,
    REDUCTION_TARGET_PERCENT,
};
pub use api::SupplyChainApi;
pub use cache::{CacheStats, SummaryCache};
pub use config::{LatencyProfile, Operation, ServiceConfig};
pub use error::{ConfigError, ServiceError};
pub use memo::{Memo, SharedTask};
pub use service::{DataService, ServiceStats};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the data service
    pub use crate::{
        Analytics, DataService, EmissionSummary, LatencyProfile, ServiceConfig, SupplyChainApi,
    };
    pub use gsc_model::prelude::*;
}
