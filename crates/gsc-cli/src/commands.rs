//! Command execution against the data service

use crate::cli::Request;
use crate::render;
use gsc_service::SupplyChainApi;
use gsc_views::{CarbonOverview, DashboardSummary, SupplierBook};
use serde::Serialize;

fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn not_found(json_output: bool, what: &str, id: &str) -> String {
    if json_output {
        "null".to_string()
    } else {
        format!("{what} {id} not found")
    }
}

/// Run one request and produce its output; misses are output, not errors
pub(crate) async fn execute<A>(api: &A, request: &Request, json_output: bool) -> anyhow::Result<String>
where
    A: SupplyChainApi + ?Sized,
{
    tracing::debug!(?request, "executing");
    let out = match request {
        Request::Projects => {
            let projects = api.list_projects().await;
            if json_output {
                json(&*projects)?
            } else {
                render::projects(&projects)?
            }
        }
        Request::Project(id) => match api.get_project_by_id(id).await {
            Some(project) if json_output => json(&project)?,
            Some(project) => render::project(&project)?,
            None => not_found(json_output, "project", id),
        },
        Request::Suppliers { search, limit } => {
            let book = SupplierBook::load(api).await;
            let hits = book.search(search.as_deref().unwrap_or(""));
            let shown: Vec<_> = hits.into_iter().take(limit.unwrap_or(usize::MAX)).collect();
            if json_output {
                json(&shown)?
            } else {
                render::suppliers(shown)?
            }
        }
        Request::Passport(product_id) => match api.get_product_passport(product_id).await {
            Some(passport) if json_output => json(&passport)?,
            Some(passport) => render::passport(&passport)?,
            None => not_found(json_output, "passport for product", product_id),
        },
        Request::Emissions(project_id) => {
            let overview = CarbonOverview::load(api, project_id).await;
            if json_output {
                json(&overview.timeline)?
            } else if overview.is_empty() {
                format!("no emissions recorded for {project_id}")
            } else {
                render::timeline(&overview)?
            }
        }
        Request::Summary(project_id) => {
            let summary = api.emission_summary(project_id).await;
            if json_output {
                json(&*summary)?
            } else {
                render::summary(&summary)?
            }
        }
        Request::Analytics => {
            let analytics = api.get_analytics().await;
            if json_output {
                json(&*analytics)?
            } else {
                render::analytics(&analytics)?
            }
        }
        Request::Dashboard => {
            let dashboard = DashboardSummary::load(api).await;
            if json_output {
                json(&dashboard)?
            } else {
                render::dashboard(&dashboard)?
            }
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_test_utils::{instant_service, small_instant_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn missing_project_is_not_an_error() {
        let service = instant_service();
        let text = execute(&service, &Request::Project("p9".into()), false)
            .await
            .unwrap();
        assert_eq!(text, "project p9 not found");

        let json = execute(&service, &Request::Project("p9".into()), true)
            .await
            .unwrap();
        assert_eq!(json, "null");
    }

    #[tokio::test]
    async fn summary_json_uses_camel_case() {
        let service = small_instant_service();
        let out = execute(&service, &Request::Summary("t1".into()), true)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["projectId"], "t1");
        assert_eq!(value["roundedTotalKg"], 410.0);
        assert_eq!(value["highImpactStages"], 1);
    }

    #[tokio::test]
    async fn supplier_limit_and_search() {
        let service = instant_service();
        let request = Request::Suppliers {
            search: Some("bangladesh".into()),
            limit: Some(3),
        };
        let out = execute(&service, &request, true).await.unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows
            .iter()
            .all(|r| r["location"].as_str().unwrap().contains("Bangladesh")));
    }

    #[tokio::test]
    async fn dashboard_text() {
        let service = instant_service();
        let out = execute(&service, &Request::Dashboard, false).await.unwrap();
        assert!(out.contains("Projects: 4"));
        assert!(out.contains("Average latency: 126 ms"));
    }

    #[tokio::test]
    async fn emissions_for_unknown_project() {
        let service = instant_service();
        let out = execute(&service, &Request::Emissions("p404".into()), false)
            .await
            .unwrap();
        assert_eq!(out, "no emissions recorded for p404");
    }

    #[tokio::test]
    async fn analytics_lists_every_project() {
        let service = instant_service();
        let out = execute(&service, &Request::Analytics, false).await.unwrap();
        for id in ["p1", "p2", "p3", "p4"] {
            assert!(out.contains(id), "missing {id}");
        }
        assert!(out.contains("Grand total"));
    }
}
