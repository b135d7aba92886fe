//! Test fixtures shared by unit and integration tests
//!
//! An in-memory [`JobStore`] with scriptable failures and a call log,
//! so workflow behavior can be asserted without a running job board.

use crate::error::{Error, Result};
use crate::job::{Job, JobType};
use crate::store::JobStore;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::Mutex;

/// In-memory job store for tests.
///
/// Behaves like the real board: ids are assigned on create, writes are
/// echoed back, and `list_all` returns the current records in insertion
/// order. Individual operations can be primed to fail once, and every
/// call is recorded.
#[derive(Default)]
pub struct MockJobStore {
    records: Mutex<Vec<Job>>,
    next_id: Mutex<i64>,
    list_queue: Mutex<VecDeque<Vec<Job>>>,
    fail_list: Mutex<Option<Error>>,
    fail_create: Mutex<Option<Error>>,
    fail_update: Mutex<Option<Error>>,
    fail_delete: Mutex<Option<Error>>,
    calls: Mutex<Vec<String>>,
}

impl MockJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records; `next_id` continues past
    /// the highest seeded identifier.
    pub fn with_records(records: Vec<Job>) -> Self {
        let max_id = records.iter().filter_map(|j| j.id).max().unwrap_or(0);
        let store = Self::new();
        *store.records.lock().unwrap() = records;
        *store.next_id.lock().unwrap() = max_id;
        store
    }

    /// Prime the next `list_all` calls with canned responses, ahead of
    /// the live records.
    pub fn queue_list_response(&self, records: Vec<Job>) {
        self.list_queue.lock().unwrap().push_back(records);
    }

    pub fn fail_next_list(&self, error: Error) {
        *self.fail_list.lock().unwrap() = Some(error);
    }

    pub fn fail_next_create(&self, error: Error) {
        *self.fail_create.lock().unwrap() = Some(error);
    }

    pub fn fail_next_update(&self, error: Error) {
        *self.fail_update.lock().unwrap() = Some(error);
    }

    pub fn fail_next_delete(&self, error: Error) {
        *self.fail_delete.lock().unwrap() = Some(error);
    }

    /// Every operation invoked so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Current records, for direct assertions.
    pub fn records(&self) -> Vec<Job> {
        self.records.lock().unwrap().clone()
    }

    fn record_call(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl JobStore for MockJobStore {
    async fn list_all(&self) -> Result<Vec<Job>> {
        self.record_call("list_all".to_string());
        if let Some(error) = self.fail_list.lock().unwrap().take() {
            return Err(error);
        }
        if let Some(canned) = self.list_queue.lock().unwrap().pop_front() {
            return Ok(canned);
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> Result<Job> {
        self.record_call(format!("get {id}"));
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|j| j.id == Some(id))
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    async fn create(&self, job: &Job) -> Result<Job> {
        self.record_call(format!("create {}", job.title));
        if let Some(error) = self.fail_create.lock().unwrap().take() {
            return Err(error);
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let mut saved = job.clone();
        saved.id = Some(*next_id);
        saved.created_at = Some(Utc::now());
        saved.updated_at = Some(Utc::now());
        self.records.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, id: i64, job: &Job) -> Result<Job> {
        self.record_call(format!("update {id}"));
        if let Some(error) = self.fail_update.lock().unwrap().take() {
            return Err(error);
        }
        let mut records = self.records.lock().unwrap();
        let existing = records
            .iter_mut()
            .find(|j| j.id == Some(id))
            .ok_or(Error::NotFound(id))?;
        let mut saved = job.clone();
        saved.id = Some(id);
        saved.created_at = existing.created_at;
        saved.updated_at = Some(Utc::now());
        *existing = saved.clone();
        Ok(saved)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.record_call(format!("delete {id}"));
        if let Some(error) = self.fail_delete.lock().unwrap().take() {
            return Err(error);
        }
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|j| j.id != Some(id));
        if records.len() == before {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }
}

/// A saved record with the given identity fields, for test setup.
pub fn job_fixture(
    id: i64,
    title: &str,
    company: &str,
    location: &str,
    job_type: Option<JobType>,
) -> Job {
    Job {
        id: Some(id),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        description: None,
        job_type,
        experience: None,
        salary: None,
        created_at: None,
        updated_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_store_crud_round_trip() {
        let store = MockJobStore::with_records(vec![job_fixture(
            1,
            "Engineer",
            "Acme",
            "NYC",
            Some(JobType::FullTime),
        )]);

        let mut draft = job_fixture(0, "QA", "Beta", "LA", None);
        draft.id = None;
        let saved = store.create(&draft).await.unwrap();
        assert_eq!(saved.id, Some(2));
        assert!(saved.created_at.is_some());

        let listed = store.list_all().await.unwrap();
        assert_eq!(listed.len(), 2);

        store.delete(2).await.unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);
        assert!(matches!(store.get(2).await, Err(Error::NotFound(2))));
    }

    #[tokio::test]
    async fn test_primed_failure_fires_once() {
        let store = MockJobStore::new();
        store.fail_next_list(Error::Network("connection refused".to_string()));
        assert!(store.list_all().await.is_err());
        assert!(store.list_all().await.is_ok());
        assert_eq!(store.calls(), vec!["list_all", "list_all"]);
    }
}
