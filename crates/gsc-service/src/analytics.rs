//! Derived emission analytics
//!
//! Pure reductions over an [`EmissionLedger`]. The service memoizes the
//! results; nothing here caches.

use gsc_model::{EmissionLedger, EmissionPoint, ProjectId};
use indexmap::IndexMap;
use serde::Serialize;

/// Points above this value count as high impact
pub const HIGH_IMPACT_THRESHOLD_KG: f64 = 300.0;

/// Reduction goal shown next to every footprint
pub const REDUCTION_TARGET_PERCENT: u8 = 25;

/// Summed emissions of one project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectTotal {
    /// Project id
    pub id: ProjectId,
    /// Sum of the project's emission points in kg
    pub total: f64,
}

/// Aggregates over the whole ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    /// One total per project, in ledger order
    pub totals: Vec<ProjectTotal>,
    /// Kg per stage across all projects, in first-seen stage order
    pub by_stage: IndexMap<String, f64>,
}

impl Analytics {
    /// Reduce a ledger into per-project and per-stage totals
    #[must_use]
    pub fn reduce(ledger: &EmissionLedger) -> Self {
        let totals = ledger
            .iter()
            .map(|(id, points)| ProjectTotal {
                id: id.clone(),
                total: points.iter().map(|p| p.emissions_kg).sum(),
            })
            .collect();

        let mut by_stage: IndexMap<String, f64> = IndexMap::new();
        for point in ledger.values().flat_map(|points| points.iter()) {
            *by_stage.entry(point.stage.clone()).or_insert(0.0) += point.emissions_kg;
        }

        Self { totals, by_stage }
    }

    /// Sum of every project total
    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.totals.iter().map(|t| t.total).sum()
    }

    /// Sum of every stage total
    #[must_use]
    pub fn stage_grand_total(&self) -> f64 {
        self.by_stage.values().sum()
    }

    /// Total for one project, if it has a ledger entry
    #[must_use]
    pub fn total_for(&self, project_id: &str) -> Option<f64> {
        self.totals
            .iter()
            .find(|t| t.id == project_id)
            .map(|t| t.total)
    }
}

/// Footprint figures for one project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionSummary {
    /// Project the figures describe
    pub project_id: ProjectId,
    /// Exact sum in kg
    pub total_kg: f64,
    /// Sum rounded to whole kg
    pub rounded_total_kg: f64,
    /// Points above [`HIGH_IMPACT_THRESHOLD_KG`]
    pub high_impact_stages: usize,
    /// Rounded total over point count, rounded; 0 with no points
    pub avg_per_stage_kg: f64,
    /// Reduction goal in percent
    pub reduction_target_percent: u8,
    /// Number of points summarized
    pub point_count: usize,
}

impl EmissionSummary {
    /// Summarize one project's points
    #[must_use]
    pub fn from_points(project_id: ProjectId, points: &[EmissionPoint]) -> Self {
        let total_kg: f64 = points.iter().map(|p| p.emissions_kg).sum();
        let rounded_total_kg = total_kg.round();
        #[allow(clippy::cast_precision_loss)]
        let avg_per_stage_kg = if points.is_empty() {
            0.0
        } else {
            (rounded_total_kg / points.len() as f64).round()
        };

        Self {
            project_id,
            total_kg,
            rounded_total_kg,
            high_impact_stages: points.iter().filter(|p| is_high_impact(p)).count(),
            avg_per_stage_kg,
            reduction_target_percent: REDUCTION_TARGET_PERCENT,
            point_count: points.len(),
        }
    }

    /// Kg to cut to reach the reduction target
    #[must_use]
    pub fn reduction_goal_kg(&self) -> f64 {
        (self.rounded_total_kg * f64::from(self.reduction_target_percent) / 100.0).round()
    }
}

/// Whether a point exceeds the high-impact threshold
#[inline]
#[must_use]
pub fn is_high_impact(point: &EmissionPoint) -> bool {
    point.emissions_kg > HIGH_IMPACT_THRESHOLD_KG
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_model::{stage, DataContext};
    use pretty_assertions::assert_eq;

    fn ctx() -> DataContext {
        DataContext::seeded().unwrap()
    }

    #[test]
    fn totals_follow_ledger_order() {
        let analytics = Analytics::reduce(ctx().emissions());
        let ids: Vec<_> = analytics.totals.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
        assert_eq!(analytics.total_for("p1"), Some(880.0));
        assert_eq!(analytics.total_for("p2"), Some(590.0));
        assert_eq!(analytics.total_for("p9"), None);
    }

    #[test]
    fn stage_order_is_first_seen() {
        let analytics = Analytics::reduce(ctx().emissions());
        let stages: Vec<_> = analytics.by_stage.keys().map(String::as_str).collect();
        assert_eq!(stages, stage::CHAIN.to_vec());
    }

    #[test]
    fn totals_and_stages_agree_with_grand_total() {
        let ctx = ctx();
        let analytics = Analytics::reduce(ctx.emissions());
        assert_eq!(analytics.grand_total(), ctx.grand_total_kg());
        assert_eq!(analytics.stage_grand_total(), ctx.grand_total_kg());
    }

    #[test]
    fn empty_ledger_reduces_to_empty_analytics() {
        let analytics = Analytics::reduce(&EmissionLedger::new());
        assert!(analytics.totals.is_empty());
        assert!(analytics.by_stage.is_empty());
        assert_eq!(analytics.grand_total(), 0.0);
    }

    #[test]
    fn summary_for_p1() {
        let ctx = ctx();
        let summary = EmissionSummary::from_points(ProjectId::new("p1"), &ctx.emissions()["p1"]);
        assert_eq!(summary.total_kg, 880.0);
        assert_eq!(summary.rounded_total_kg, 880.0);
        assert_eq!(summary.high_impact_stages, 1);
        assert_eq!(summary.avg_per_stage_kg, 220.0);
        assert_eq!(summary.reduction_target_percent, 25);
        assert_eq!(summary.reduction_goal_kg(), 220.0);
        assert_eq!(summary.point_count, 4);
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        let summary = EmissionSummary::from_points(ProjectId::new("p9"), &[]);
        assert_eq!(summary.total_kg, 0.0);
        assert_eq!(summary.avg_per_stage_kg, 0.0);
        assert_eq!(summary.high_impact_stages, 0);
    }

    #[test]
    fn threshold_is_exclusive() {
        let ts = chrono_epoch();
        assert!(!is_high_impact(&EmissionPoint::new(stage::RETAIL, 300.0, "x", ts)));
        assert!(is_high_impact(&EmissionPoint::new(stage::RETAIL, 300.5, "x", ts)));
    }

    #[test]
    fn analytics_serializes_camel_case() {
        let analytics = Analytics::reduce(ctx().emissions());
        let json = serde_json::to_value(&analytics).unwrap();
        assert_eq!(json["totals"][0]["id"], "p1");
        assert_eq!(json["totals"][0]["total"], 880.0);
        assert!(json["byStage"]["Manufacturing"].is_number());
    }

    fn chrono_epoch() -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::from_timestamp(0, 0).unwrap()
    }
}
