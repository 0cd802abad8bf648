//! Error types for page-local editing

/// Supplier form and book errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SupplierFormError {
    /// Required field left blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Numeric field did not parse
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber {
        /// Form field
        field: &'static str,
        /// Text entered
        value: String,
    },

    /// Rating outside 0..=100
    #[error("rating must be between 0 and 100, got {0}")]
    RatingOutOfRange(f64),

    /// No supplier with this id in the book
    #[error("supplier not found: {0}")]
    NotFound(String),

    /// Every `s<n>` id has been handed out
    #[error("no supplier ids left")]
    IdsExhausted,
}
