//! Error types for the seed dataset
//!
//! The dataset is static, so these only surface while building or
//! validating a [`DataContext`](crate::DataContext). Lookups against a valid
//! context never fail.

/// Seed construction and validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedError {
    /// Two records of the same kind share an id
    #[error("duplicate {kind} id: {id}")]
    DuplicateId {
        /// Entity kind (`project`, `supplier`, `passport`)
        kind: &'static str,
        /// The repeated id
        id: String,
    },

    /// Supplier rating outside 0..=100
    #[error("supplier {supplier} has rating {rating}, expected 0..=100")]
    RatingOutOfRange {
        /// Offending supplier
        supplier: String,
        /// Rating found
        rating: u8,
    },

    /// Passport score outside 0..=100
    #[error("passport {passport} has sustainability score {score}, expected 0..=100")]
    ScoreOutOfRange {
        /// Offending passport
        passport: String,
        /// Score found
        score: u8,
    },

    /// Negative or non-finite emission value
    #[error("emission point {index} of project {project} has invalid value {kg} kg")]
    InvalidEmission {
        /// Owning project
        project: String,
        /// Position in the project's ledger
        index: usize,
        /// Value found
        kg: f64,
    },

    /// A record points at a project that does not exist
    #[error("{referenced_by} references unknown project {project}")]
    UnknownProject {
        /// What holds the reference
        referenced_by: String,
        /// Missing project id
        project: String,
    },

    /// A seed timestamp is not a valid calendar instant
    #[error("invalid seed timestamp {year:04}-{month:02}-{day:02}T{hour:02}:00:00Z")]
    InvalidTimestamp {
        /// Year
        year: i32,
        /// Month
        month: u32,
        /// Day
        day: u32,
        /// Hour
        hour: u32,
    },
}

impl SeedError {
    /// Check if error concerns a referential link between records
    #[inline]
    #[must_use]
    pub fn is_referential(&self) -> bool {
        matches!(self, Self::UnknownProject { .. } | Self::DuplicateId { .. })
    }
}
