//! Plain-text rendering of service results

use gsc_model::{ProductPassport, Project, Supplier};
use gsc_service::{Analytics, EmissionSummary};
use gsc_views::{CarbonOverview, DashboardSummary, StackCategory};
use std::fmt::{self, Write};

pub(crate) fn projects(projects: &[Project]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for p in projects {
        let latency = p
            .latency
            .map_or_else(|| "-".to_string(), |ms| format!("{ms} ms"));
        writeln!(out, "{:<4} {:<16} {:<18} {latency}", p.id, p.name, p.stack)?;
    }
    Ok(out)
}

pub(crate) fn project(project: &Project) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{} ({})", project.name, project.id)?;
    writeln!(out, "  {}", project.description)?;
    writeln!(
        out,
        "  stack: {} {}",
        StackCategory::of(&project.stack).icon(),
        project.stack
    )?;
    if let Some(ms) = project.latency {
        writeln!(out, "  latency: {ms} ms")?;
    }
    Ok(out)
}

pub(crate) fn suppliers<'a, I>(suppliers: I) -> Result<String, fmt::Error>
where
    I: IntoIterator<Item = &'a Supplier>,
{
    let mut out = String::new();
    for s in suppliers {
        let rating = s
            .rating
            .map_or_else(|| "-".to_string(), |r| r.to_string());
        write!(out, "{:<5} {:<24} {:<28} rating {rating:>3}", s.id, s.name, s.location)?;
        if !s.certifications.is_empty() {
            write!(out, "  [{}]", s.certifications.join(", "))?;
        }
        out.push('\n');
    }
    Ok(out)
}

pub(crate) fn passport(passport: &ProductPassport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Passport {} for {}", passport.id, passport.product_id)?;
    writeln!(out, "  serial: {}", passport.serial)?;
    writeln!(
        out,
        "  origin: {}, {}",
        passport.origin.city, passport.origin.country
    )?;
    writeln!(out, "  materials: {}", passport.materials.join(", "))?;
    writeln!(out, "  certifications: {}", passport.certifications.join(", "))?;
    writeln!(
        out,
        "  blockchain verified: {}",
        if passport.blockchain_verified { "yes" } else { "no" }
    )?;
    writeln!(out, "  sustainability score: {}", passport.sustainability_score)?;
    Ok(out)
}

pub(crate) fn timeline(overview: &CarbonOverview) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for entry in &overview.timeline {
        let p = &entry.point;
        writeln!(
            out,
            "{}  {:<14} {:>7.1} kg  {}{}",
            p.timestamp.format("%Y-%m-%d %H:%M"),
            p.stage,
            p.emissions_kg,
            p.location,
            if entry.high_impact { "  (high impact)" } else { "" }
        )?;
    }
    Ok(out)
}

pub(crate) fn summary(summary: &EmissionSummary) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Carbon footprint for {}", summary.project_id)?;
    writeln!(out, "  total: {} kg CO2e", summary.rounded_total_kg)?;
    writeln!(out, "  high-impact stages: {}", summary.high_impact_stages)?;
    writeln!(out, "  average per stage: {} kg", summary.avg_per_stage_kg)?;
    writeln!(
        out,
        "  reduction target: {}% ({:.0} kg)",
        summary.reduction_target_percent,
        summary.reduction_goal_kg()
    )?;
    Ok(out)
}

pub(crate) fn analytics(analytics: &Analytics) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Totals by project")?;
    for t in &analytics.totals {
        writeln!(out, "  {:<4} {:>10.1} kg", t.id, t.total)?;
    }
    writeln!(out, "Totals by stage")?;
    for (stage, kg) in &analytics.by_stage {
        writeln!(out, "  {stage:<14} {kg:>10.1} kg")?;
    }
    writeln!(out, "Grand total: {:.1} kg", analytics.grand_total())?;
    Ok(out)
}

pub(crate) fn dashboard(dashboard: &DashboardSummary) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Projects: {}", dashboard.projects_count)?;
    writeln!(out, "Average latency: {} ms", dashboard.avg_latency_ms)?;
    writeln!(out, "Recent")?;
    for p in &dashboard.recent {
        writeln!(
            out,
            "  {} {} ({})",
            StackCategory::of(&p.stack).icon(),
            p.name,
            p.stack
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_test_utils::create_test_supplier;

    #[test]
    fn supplier_row_lists_certifications() {
        let s = create_test_supplier("s9");
        let text = suppliers([&s]).unwrap();
        assert!(text.starts_with("s9"));
        assert!(text.contains("Porto, Portugal"));
        assert!(text.contains("rating  70"));
        assert!(text.trim_end().ends_with("[GOTS]"));
    }

    #[test]
    fn project_without_latency_shows_dash() {
        let p = Project::new("t1", "Test", "test project", "Rust");
        let text = projects(&[p]).unwrap();
        assert!(text.trim_end().ends_with('-'));
    }
}
