//! Dashboard figures

use gsc_model::Project;
use gsc_service::SupplyChainApi;
use serde::Serialize;

/// Latency assumed for projects that report none
pub const DEFAULT_LATENCY_MS: u32 = 100;

/// Projects shown in the "recent" strip
pub const RECENT_LIMIT: usize = 4;

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Number of projects
    pub projects_count: usize,
    /// Mean latency, rounded; projects without one, or reporting 0, count
    /// as [`DEFAULT_LATENCY_MS`]
    pub avg_latency_ms: u32,
    /// First [`RECENT_LIMIT`] projects
    pub recent: Vec<Project>,
}

impl DashboardSummary {
    /// Compute figures from a project list
    #[must_use]
    pub fn from_projects(projects: &[Project]) -> Self {
        let avg_latency_ms = if projects.is_empty() {
            0
        } else {
            let sum: u64 = projects
                .iter()
                .map(|p| u64::from(p.latency.filter(|&ms| ms != 0).unwrap_or(DEFAULT_LATENCY_MS)))
                .sum();
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let avg = (sum as f64 / projects.len() as f64).round() as u32;
            avg
        };

        Self {
            projects_count: projects.len(),
            avg_latency_ms,
            recent: projects.iter().take(RECENT_LIMIT).cloned().collect(),
        }
    }

    /// Fetch projects and compute figures
    pub async fn load<A>(api: &A) -> Self
    where
        A: SupplyChainApi + ?Sized,
    {
        let projects = api.list_projects().await;
        let summary = Self::from_projects(&projects);
        tracing::debug!(
            projects = summary.projects_count,
            avg_latency_ms = summary.avg_latency_ms,
            "dashboard loaded"
        );
        summary
    }
}

/// Coarse grouping of a project's stack label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StackCategory {
    /// Web front end
    Web,
    /// Python services
    Python,
    /// Go services
    Go,
    /// Anything else
    Other,
}

impl StackCategory {
    /// Classify a stack label; the first matching rule wins
    #[must_use]
    pub fn of(stack: &str) -> Self {
        if stack.contains("Angular") {
            Self::Web
        } else if stack.contains("Python") {
            Self::Python
        } else if stack.contains("Go") {
            Self::Go
        } else {
            Self::Other
        }
    }

    /// Material icon name used by the project cards
    #[inline]
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Python => "code",
            Self::Go => "speed",
            Self::Other => "folder",
        }
    }
}
