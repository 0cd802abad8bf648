//! GSC Model - Green Supply Chain entities
//!
//! Immutable reference records for the tracker and the seed dataset they
//! are loaded from:
//! - Projects, suppliers, product passports
//! - Per-project emission ledgers
//! - [`DataContext`]: the seed, built once and shared read-only
//!
//! # Example
//!
//! ```rust,ignore
//! use gsc_model::DataContext;
//!
//! let ctx = DataContext::seeded()?;
//! assert_eq!(ctx.suppliers().len(), 250);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod ids;
pub mod seed;
pub mod types;

pub use error::SeedError;
pub use ids::{PassportId, ProjectId, SupplierId};
pub use seed::{
    DataContext, GENERATED_EVENTS_PER_PROJECT, SUPPLIER_TARGET,
};
pub use types::{
    stage, EmissionLedger, EmissionPoint, Origin, ProductPassport, Project, Supplier,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the tracker model
    pub use crate::{
        DataContext, EmissionLedger, EmissionPoint, Origin, PassportId, ProductPassport, Project,
        ProjectId, SeedError, Supplier, SupplierId,
    };
}
