//! Carbon footprint overview and emission timeline

use gsc_model::{EmissionPoint, ProjectId};
use gsc_service::{is_high_impact, EmissionSummary, SupplyChainApi};
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

/// One row of the emission timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// The measurement
    #[serde(flatten)]
    pub point: EmissionPoint,
    /// Above the high-impact threshold
    pub high_impact: bool,
}

/// Footprint summary plus timeline for one project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonOverview {
    /// Project shown
    pub project_id: ProjectId,
    /// Cached summary figures
    pub summary: Arc<EmissionSummary>,
    /// Points in recorded order
    pub timeline: Vec<TimelineEntry>,
}

impl CarbonOverview {
    /// Build overview from already-fetched parts
    #[must_use]
    pub fn from_parts(
        project_id: ProjectId,
        summary: Arc<EmissionSummary>,
        points: &[EmissionPoint],
    ) -> Self {
        let timeline = points
            .iter()
            .map(|point| TimelineEntry {
                high_impact: is_high_impact(point),
                point: point.clone(),
            })
            .collect();
        Self {
            project_id,
            summary,
            timeline,
        }
    }

    /// Fetch summary and points concurrently
    pub async fn load<A>(api: &A, project_id: &str) -> Self
    where
        A: SupplyChainApi + ?Sized,
    {
        let (summary, points) = tokio::join!(
            api.emission_summary(project_id),
            api.get_emissions_for_project(project_id)
        );
        Self::from_parts(ProjectId::new(project_id), summary, &points)
    }

    /// Timeline rows above the threshold
    pub fn high_impact_entries(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.timeline.iter().filter(|e| e.high_impact)
    }

    /// Kg per stage for this project, in first-seen order
    #[must_use]
    pub fn stage_breakdown(&self) -> IndexMap<String, f64> {
        let mut breakdown: IndexMap<String, f64> = IndexMap::new();
        for entry in &self.timeline {
            *breakdown.entry(entry.point.stage.clone()).or_insert(0.0) += entry.point.emissions_kg;
        }
        breakdown
    }

    /// Whether the project has any recorded emissions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockApi;
    use chrono::{TimeZone, Utc};
    use gsc_model::stage;
    use pretty_assertions::assert_eq;

    fn points() -> Vec<EmissionPoint> {
        let ts = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).single().unwrap();
        vec![
            EmissionPoint::new(stage::RAW_MATERIAL, 120.0, "India", ts),
            EmissionPoint::new(stage::MANUFACTURING, 450.0, "Bangladesh", ts),
            EmissionPoint::new(stage::MANUFACTURING, 310.0, "Bangladesh", ts),
            EmissionPoint::new(stage::RETAIL, 80.0, "India", ts),
        ]
    }

    #[tokio::test]
    async fn load_combines_summary_and_timeline() {
        let mut api = MockApi::new();
        api.expect_emission_summary().times(1).returning(|id| {
            Arc::new(EmissionSummary::from_points(ProjectId::new(id), &points()))
        });
        api.expect_get_emissions_for_project()
            .times(1)
            .returning(|_| Arc::from(points()));

        let overview = CarbonOverview::load(&api, "p7").await;

        assert_eq!(overview.project_id, "p7");
        assert_eq!(overview.timeline.len(), 4);
        assert_eq!(overview.high_impact_entries().count(), 2);
        assert_eq!(overview.summary.high_impact_stages, 2);
        assert_eq!(overview.summary.rounded_total_kg, 960.0);
    }

    #[test]
    fn breakdown_sums_repeated_stages() {
        let summary = Arc::new(EmissionSummary::from_points(ProjectId::new("p7"), &points()));
        let overview = CarbonOverview::from_parts(ProjectId::new("p7"), summary, &points());
        let breakdown = overview.stage_breakdown();
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[stage::MANUFACTURING], 760.0);
        assert_eq!(breakdown.keys().next().map(String::as_str), Some(stage::RAW_MATERIAL));
    }

    #[test]
    fn empty_project_has_empty_overview() {
        let summary = Arc::new(EmissionSummary::from_points(ProjectId::new("p0"), &[]));
        let overview = CarbonOverview::from_parts(ProjectId::new("p0"), summary, &[]);
        assert!(overview.is_empty());
        assert!(overview.stage_breakdown().is_empty());
    }

    #[test]
    fn timeline_entry_flattens_point() {
        let entry = TimelineEntry {
            point: points().remove(1),
            high_impact: true,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["stage"], "Manufacturing");
        assert_eq!(json["highImpact"], true);
    }
}
