//! Service configuration
//!
//! Latency values are simulated request times in milliseconds. They shape
//! how the service behaves under a UI (loading spinners, interleaving of
//! concurrent requests); tests and batch tools use [`LatencyProfile::instant`].

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Service operation, used for latency lookup and log fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List every project
    ListProjects,
    /// Look up one project
    GetProject,
    /// List every supplier
    ListSuppliers,
    /// Look up a passport by product
    GetPassport,
    /// Fetch the shared emission ledger
    Emissions,
    /// Reduce the ledger into analytics
    Analytics,
}

impl Operation {
    /// Stable name for logs
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListProjects => "list_projects",
            Self::GetProject => "get_project_by_id",
            Self::ListSuppliers => "list_suppliers",
            Self::GetPassport => "get_product_passport",
            Self::Emissions => "get_emissions_for_project",
            Self::Analytics => "get_analytics",
        }
    }
}

/// Simulated latency per operation, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    /// `list_projects`
    pub list_projects_ms: u64,
    /// `get_project_by_id`
    pub get_project_ms: u64,
    /// `list_suppliers`
    pub list_suppliers_ms: u64,
    /// `get_product_passport`
    pub get_passport_ms: u64,
    /// First fetch of the emission ledger
    pub emissions_ms: u64,
    /// First analytics reduction
    pub analytics_ms: u64,
}

impl LatencyProfile {
    /// No simulated latency at all
    #[inline]
    #[must_use]
    pub fn instant() -> Self {
        Self {
            list_projects_ms: 0,
            get_project_ms: 0,
            list_suppliers_ms: 0,
            get_passport_ms: 0,
            emissions_ms: 0,
            analytics_ms: 0,
        }
    }

    /// Delay for an operation
    #[inline]
    #[must_use]
    pub fn delay_for(&self, op: Operation) -> Duration {
        let ms = match op {
            Operation::ListProjects => self.list_projects_ms,
            Operation::GetProject => self.get_project_ms,
            Operation::ListSuppliers => self.list_suppliers_ms,
            Operation::GetPassport => self.get_passport_ms,
            Operation::Emissions => self.emissions_ms,
            Operation::Analytics => self.analytics_ms,
        };
        Duration::from_millis(ms)
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list_projects_ms: 400,
            get_project_ms: 250,
            list_suppliers_ms: 300,
            get_passport_ms: 300,
            emissions_ms: 400,
            analytics_ms: 400,
        }
    }
}

/// Data service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Maximum cached per-project emission summaries
    pub summary_cache_capacity: u64,
    /// Simulated latency
    pub latency: LatencyProfile,
}

impl ServiceConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with zero latency
    #[inline]
    #[must_use]
    pub fn instant() -> Self {
        Self::default().with_latency(LatencyProfile::instant())
    }

    /// With latency profile
    #[inline]
    #[must_use]
    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// With summary cache capacity
    #[inline]
    #[must_use]
    pub fn with_summary_capacity(mut self, capacity: u64) -> Self {
        self.summary_cache_capacity = capacity;
        self
    }

    /// Parse configuration from TOML; missing fields keep their defaults
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML for this shape
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded service configuration");
        Ok(config)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            summary_cache_capacity: 64,
            latency: LatencyProfile::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn default_latencies() {
        let latency = LatencyProfile::default();
        assert_eq!(latency.delay_for(Operation::ListProjects), Duration::from_millis(400));
        assert_eq!(latency.delay_for(Operation::GetProject), Duration::from_millis(250));
        assert_eq!(latency.delay_for(Operation::ListSuppliers), Duration::from_millis(300));
        assert_eq!(latency.delay_for(Operation::GetPassport), Duration::from_millis(300));
        assert_eq!(latency.delay_for(Operation::Emissions), Duration::from_millis(400));
        assert_eq!(latency.delay_for(Operation::Analytics), Duration::from_millis(400));
    }

    #[test]
    fn instant_profile_is_zero() {
        let config = ServiceConfig::instant();
        assert!(config.latency.delay_for(Operation::Analytics).is_zero());
        assert_eq!(config.summary_cache_capacity, 64);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ServiceConfig::from_toml_str(
            r#"
            summary_cache_capacity = 8

            [latency]
            list_projects_ms = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.summary_cache_capacity, 8);
        assert_eq!(config.latency.list_projects_ms, 10);
        assert_eq!(config.latency.get_project_ms, 250);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ServiceConfig::from_toml_str("").unwrap(), ServiceConfig::default());
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = ServiceConfig::from_toml_str("latency = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[latency]\nanalytics_ms = 5").unwrap();

        let config = ServiceConfig::load(file.path()).unwrap();
        assert_eq!(config.latency.analytics_ms, 5);
        assert_eq!(config.latency.emissions_ms, 400);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServiceConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = ServiceConfig::instant().with_summary_capacity(3);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(ServiceConfig::from_toml_str(&text).unwrap(), config);
    }
}
