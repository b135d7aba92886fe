//! Create/edit session for a single job posting draft
//!
//! Holds the in-progress record between field edits and submission,
//! including the title autocomplete. The session never talks to the
//! store; the workflow controller takes the finished draft.

use crate::job::{ExperienceLevel, Job, JobType};

/// Known job titles offered as autocomplete candidates.
pub const JOB_TITLE_SUGGESTIONS: [&str; 49] = [
    "Software Engineer",
    "Senior Software Engineer",
    "Full Stack Developer",
    "Frontend Developer",
    "Backend Developer",
    "DevOps Engineer",
    "Data Scientist",
    "Data Analyst",
    "Product Manager",
    "Project Manager",
    "UX Designer",
    "UI Designer",
    "Business Analyst",
    "Quality Assurance Engineer",
    "Mobile Developer",
    "iOS Developer",
    "Android Developer",
    "Cloud Architect",
    "Database Administrator",
    "System Administrator",
    "Network Engineer",
    "Security Engineer",
    "Machine Learning Engineer",
    "AI Engineer",
    "Technical Lead",
    "Engineering Manager",
    "Scrum Master",
    "Technical Writer",
    "Solutions Architect",
    "Web Developer",
    "React Developer",
    "Node.js Developer",
    "Python Developer",
    "Java Developer",
    "PHP Developer",
    ".NET Developer",
    "Ruby Developer",
    "Go Developer",
    "Rust Developer",
    "Marketing Manager",
    "Sales Manager",
    "HR Manager",
    "Finance Manager",
    "Operations Manager",
    "Customer Success Manager",
    "Content Writer",
    "SEO Specialist",
    "Digital Marketing Specialist",
    "Graphic Designer",
];

/// At most this many candidates are shown at once.
const SUGGESTION_DISPLAY_LIMIT: usize = 8;

/// Whether the session creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i64 },
}

/// Transient state of one record being created or edited.
#[derive(Debug, Clone)]
pub struct FormSession {
    mode: FormMode,
    draft: Job,
    suggestions: Vec<&'static str>,
    suggestions_open: bool,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Start a blank create-mode session.
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            draft: blank_draft(),
            suggestions: Vec::new(),
            suggestions_open: false,
        }
    }

    /// Reset the session from a source record. A saved record switches
    /// to edit mode with the draft pre-populated; `None` (or an unsaved
    /// record) resets to a blank create-mode draft.
    pub fn load(&mut self, source: Option<&Job>) {
        match source.and_then(|job| job.id.map(|id| (id, job))) {
            Some((id, job)) => {
                self.mode = FormMode::Edit { id };
                self.draft = job.clone();
            }
            None => {
                self.mode = FormMode::Create;
                self.draft = blank_draft();
            }
        }
        self.suggestions.clear();
        self.suggestions_open = false;
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// The store identifier the draft originated from, if editing.
    pub fn source_id(&self) -> Option<i64> {
        match self.mode {
            FormMode::Edit { id } => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn draft(&self) -> &Job {
        &self.draft
    }

    /// Update the title and recompute the candidate list. An empty
    /// title always closes the list.
    pub fn set_title(&mut self, value: &str) {
        self.draft.title = value.to_string();
        if value.is_empty() {
            self.close_suggestions();
        } else {
            self.recompute_suggestions();
            self.suggestions_open = true;
        }
    }

    /// Reopen the candidate list when the title field regains focus
    /// with text already in it.
    pub fn on_title_focus(&mut self) {
        if !self.draft.title.is_empty() {
            self.recompute_suggestions();
            self.suggestions_open = true;
        }
    }

    /// Close the candidate list. The host calls this after blur, once
    /// any pending selection has had a chance to land.
    pub fn close_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestions_open = false;
    }

    /// Candidates currently on offer, capped for display.
    pub fn suggestions(&self) -> &[&'static str] {
        if !self.suggestions_open {
            return &[];
        }
        let end = self.suggestions.len().min(SUGGESTION_DISPLAY_LIMIT);
        &self.suggestions[..end]
    }

    /// Replace the title with a chosen candidate verbatim and close
    /// the list.
    pub fn select_suggestion(&mut self, candidate: &str) {
        self.draft.title = candidate.to_string();
        self.close_suggestions();
    }

    pub fn set_company(&mut self, value: &str) {
        self.draft.company = value.to_string();
    }

    pub fn set_location(&mut self, value: &str) {
        self.draft.location = value.to_string();
    }

    pub fn set_description(&mut self, value: &str) {
        self.draft.description = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    pub fn set_salary(&mut self, value: &str) {
        self.draft.salary = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    pub fn set_job_type(&mut self, value: Option<JobType>) {
        self.draft.job_type = value;
    }

    pub fn set_experience(&mut self, value: Option<ExperienceLevel>) {
        self.draft.experience = value;
    }

    /// Required fields are title, company, and location.
    pub fn is_submittable(&self) -> bool {
        !self.draft.title.is_empty()
            && !self.draft.company.is_empty()
            && !self.draft.location.is_empty()
    }

    fn recompute_suggestions(&mut self) {
        let needle = self.draft.title.to_lowercase();
        self.suggestions = JOB_TITLE_SUGGESTIONS
            .iter()
            .filter(|candidate| candidate.to_lowercase().contains(&needle))
            .copied()
            .collect();
    }
}

fn blank_draft() -> Job {
    Job {
        id: None,
        title: String::new(),
        company: String::new(),
        location: String::new(),
        description: None,
        job_type: None,
        experience: None,
        salary: None,
        created_at: None,
        updated_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved_job() -> Job {
        Job {
            id: Some(4),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "NYC".to_string(),
            description: Some("Build things".to_string()),
            job_type: Some(JobType::FullTime),
            experience: None,
            salary: Some("$100k".to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_new_session_is_blank_create() {
        let session = FormSession::new();
        assert_eq!(session.mode(), FormMode::Create);
        assert_eq!(session.source_id(), None);
        assert!(session.draft().title.is_empty());
        assert!(!session.is_submittable());
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_load_saved_record_enters_edit_mode() {
        let mut session = FormSession::new();
        session.load(Some(&saved_job()));
        assert_eq!(session.mode(), FormMode::Edit { id: 4 });
        assert_eq!(session.source_id(), Some(4));
        assert_eq!(session.draft().title, "Engineer");
        assert!(session.is_submittable());
    }

    #[test]
    fn test_load_none_resets_to_blank_create() {
        let mut session = FormSession::new();
        session.load(Some(&saved_job()));
        session.load(None);
        assert_eq!(session.mode(), FormMode::Create);
        assert!(session.draft().title.is_empty());
        assert!(session.draft().salary.is_none());
    }

    #[test]
    fn test_typing_dev_suggests_developer_titles() {
        let mut session = FormSession::new();
        session.set_title("Dev");
        let suggestions = session.suggestions();
        assert!(suggestions.contains(&"Full Stack Developer"));
        assert!(suggestions.contains(&"Frontend Developer"));
        assert!(suggestions.contains(&"Backend Developer"));
        assert!(suggestions.len() <= 8);
        assert!(suggestions
            .iter()
            .all(|s| s.to_lowercase().contains("dev")));
    }

    #[test]
    fn test_suggestions_capped_at_eight() {
        let mut session = FormSession::new();
        // "er" matches far more than eight known titles
        session.set_title("er");
        assert_eq!(session.suggestions().len(), 8);
    }

    #[test]
    fn test_empty_title_closes_suggestions() {
        let mut session = FormSession::new();
        session.set_title("Dev");
        assert!(!session.suggestions().is_empty());
        session.set_title("");
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_focus_reopens_for_non_empty_title() {
        let mut session = FormSession::new();
        session.set_title("Data");
        session.close_suggestions();
        assert!(session.suggestions().is_empty());

        session.on_title_focus();
        assert!(session.suggestions().contains(&"Data Scientist"));

        session.load(None);
        session.on_title_focus();
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_select_suggestion_replaces_title_verbatim() {
        let mut session = FormSession::new();
        session.set_title("rust");
        assert!(session.suggestions().contains(&"Rust Developer"));
        session.select_suggestion("Rust Developer");
        assert_eq!(session.draft().title, "Rust Developer");
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_submittable_requires_all_three_fields() {
        let mut session = FormSession::new();
        session.set_title("QA");
        session.set_company("Acme");
        assert!(!session.is_submittable());
        session.set_location("NYC");
        assert!(session.is_submittable());
    }

    #[test]
    fn test_optional_fields_blank_means_unset() {
        let mut session = FormSession::new();
        session.set_salary("$80,000 - $120,000");
        assert_eq!(session.draft().salary.as_deref(), Some("$80,000 - $120,000"));
        session.set_salary("");
        assert!(session.draft().salary.is_none());
        session.set_description("");
        assert!(session.draft().description.is_none());
    }
}
