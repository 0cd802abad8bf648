//! Selected project shared between pages
//!
//! Subscribers always see the latest selection and are notified on every
//! change. Starts empty.

use gsc_model::Project;
use gsc_service::SupplyChainApi;
use tokio::sync::watch;

/// Currently selected project
#[derive(Debug)]
pub struct SelectionState {
    tx: watch::Sender<Option<Project>>,
}

impl SelectionState {
    /// Create state with nothing selected
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Select a project
    pub fn select(&self, project: Project) {
        tracing::debug!(project_id = %project.id, "project selected");
        self.tx.send_replace(Some(project));
    }

    /// Clear the selection
    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    /// Look up a project by id and select it; returns whether it was found
    pub async fn select_by_id<A>(&self, api: &A, id: &str) -> bool
    where
        A: SupplyChainApi + ?Sized,
    {
        match api.get_project_by_id(id).await {
            Some(project) => {
                self.select(project);
                true
            }
            None => false,
        }
    }

    /// Snapshot of the current selection
    #[must_use]
    pub fn current(&self) -> Option<Project> {
        self.tx.borrow().clone()
    }

    /// Receiver notified on every change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Project>> {
        self.tx.subscribe()
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockApi;

    #[test]
    fn starts_empty() {
        assert!(SelectionState::new().current().is_none());
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let state = SelectionState::new();
        let mut rx = state.subscribe();

        state.select(Project::new("p1", "GreenVision", "", "Angular · Node"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().as_ref().map(|p| p.id.as_str()), Some("p1"));

        state.clear();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }

    #[test]
    fn late_subscriber_gets_latest() {
        let state = SelectionState::new();
        state.select(Project::new("p2", "EcoAnnotate", "", "Angular · Python"));
        let rx = state.subscribe();
        assert_eq!(rx.borrow().as_ref().map(|p| p.name.as_str()), Some("EcoAnnotate"));
    }

    #[tokio::test]
    async fn select_by_id_reports_misses() {
        let mut api = MockApi::new();
        api.expect_get_project_by_id().returning(|id| {
            (id == "p3").then(|| Project::new("p3", "CarbonTracker", "", "Angular · Go"))
        });

        let state = SelectionState::new();
        assert!(!state.select_by_id(&api, "p9").await);
        assert!(state.current().is_none());

        assert!(state.select_by_id(&api, "p3").await);
        assert_eq!(state.current().map(|p| p.name), Some("CarbonTracker".to_string()));
    }
}
