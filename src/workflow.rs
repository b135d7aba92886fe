//! Workflow controller
//!
//! Orchestrates the three views (jobs list, add/edit form, dashboard),
//! the fetch-on-start, and every store mutation. The collection is only
//! ever changed here, by replacing it with a fresh store response after
//! each write; nothing is patched locally ahead of confirmation.

use crate::collection::JobCollection;
use crate::form::FormSession;
use crate::interaction::UserInteraction;
use crate::job::Job;
use crate::stats::{self, JobStats};
use crate::store::JobStore;
use crate::view::{derive_view, TypeFilter};
use std::sync::Arc;
use tracing::{debug, warn};

/// Which screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Jobs,
    Add,
    Dashboard,
}

/// Grid or list rendering of the jobs view. Last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Color theme flag. Last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(format!("unknown view mode: {s} (expected grid or list)")),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(format!("unknown theme: {s} (expected dark or light)")),
        }
    }
}

/// Application state machine over the job board.
pub struct Workflow {
    store: Arc<dyn JobStore>,
    interaction: Arc<dyn UserInteraction>,
    collection: JobCollection,
    search_term: String,
    type_filter: TypeFilter,
    active_view: ActiveView,
    form: FormSession,
    view_mode: ViewMode,
    theme: Theme,
}

impl Workflow {
    /// Create the controller in its initial state: jobs view, empty
    /// collection. Call [`Workflow::refresh`] to trigger the first
    /// fetch.
    pub fn new(store: Arc<dyn JobStore>, interaction: Arc<dyn UserInteraction>) -> Self {
        Self {
            store,
            interaction,
            collection: JobCollection::new(),
            search_term: String::new(),
            type_filter: TypeFilter::All,
            active_view: ActiveView::Jobs,
            form: FormSession::new(),
            view_mode: ViewMode::default(),
            theme: Theme::default(),
        }
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn collection(&self) -> &JobCollection {
        &self.collection
    }

    pub fn form(&self) -> &FormSession {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormSession {
        &mut self.form
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn type_filter(&self) -> &TypeFilter {
        &self.type_filter
    }

    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.type_filter = filter;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    /// The filtered view, recomputed from the collection on every call.
    pub fn visible_jobs(&self) -> Vec<Job> {
        derive_view(&self.collection, &self.search_term, &self.type_filter)
    }

    /// Dashboard statistics, recomputed from the collection.
    pub fn stats(&self) -> JobStats {
        stats::aggregate(&self.collection)
    }

    /// The dashboard's recent-jobs panel.
    pub fn recent_jobs(&self) -> &[Job] {
        stats::recent(&self.collection)
    }

    /// Fetch everything from the store and replace the collection.
    /// On failure the previous collection is kept untouched.
    pub async fn refresh(&mut self) -> bool {
        match self.store.list_all().await {
            Ok(records) => {
                debug!("Fetched {} jobs", records.len());
                self.collection.replace_all(records);
                true
            }
            Err(e) => {
                warn!("Error fetching jobs: {e}");
                self.interaction.notify_failure("Failed to fetch jobs");
                false
            }
        }
    }

    /// Open the form in create mode.
    pub fn add_new(&mut self) {
        self.form.load(None);
        self.active_view = ActiveView::Add;
    }

    /// Open the form in edit mode for an existing record.
    pub fn edit(&mut self, job: &Job) {
        self.form.load(Some(job));
        self.active_view = ActiveView::Add;
    }

    /// Pure view switches; no side effects.
    pub fn show_jobs(&mut self) {
        self.active_view = ActiveView::Jobs;
    }

    pub fn show_dashboard(&mut self) {
        self.active_view = ActiveView::Dashboard;
    }

    /// Discard the draft and return to the jobs view.
    pub fn cancel(&mut self) {
        self.form.load(None);
        self.active_view = ActiveView::Jobs;
    }

    /// Persist the current draft: update when it originated from an
    /// existing record, create otherwise. On success the collection is
    /// refetched and the view returns to jobs; on failure the draft
    /// stays intact in the form view.
    pub async fn submit(&mut self) -> bool {
        if !self.form.is_submittable() {
            warn!("Submit rejected: required fields missing");
            return false;
        }

        let draft = self.form.draft().clone();
        let result = match self.form.source_id() {
            Some(id) => self.store.update(id, &draft).await,
            None => self.store.create(&draft).await,
        };

        match result {
            Ok(saved) => {
                debug!("Saved job {:?}", saved.id);
                let message = if self.form.source_id().is_some() {
                    "Job updated successfully"
                } else {
                    "Job created successfully"
                };
                self.interaction.notify_success(message);
                self.form.load(None);
                self.active_view = ActiveView::Jobs;
                self.refresh().await;
                true
            }
            Err(e) => {
                warn!("Error saving job: {e}");
                let message = if self.form.source_id().is_some() {
                    "Failed to update job"
                } else {
                    "Failed to create job"
                };
                self.interaction.notify_failure(message);
                false
            }
        }
    }

    /// Delete a record by identifier. Never applied locally before the
    /// store confirms; on failure the record stays visible.
    pub async fn delete_job(&mut self, id: i64) -> bool {
        match self.store.delete(id).await {
            Ok(()) => {
                self.interaction.notify_success("Job deleted successfully");
                self.refresh().await;
                true
            }
            Err(e) => {
                warn!("Error deleting job {id}: {e}");
                self.interaction.notify_failure("Failed to delete job");
                false
            }
        }
    }
}
