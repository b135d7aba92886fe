//! Authoritative in-memory collection of fetched job postings
//!
//! The collection is only ever changed by swapping in a complete store
//! response; there is no partial mutation API. Every derived view and
//! statistic is recomputed from this single source of truth.

use crate::job::Job;
use std::collections::HashSet;

/// Ordered snapshot of all job postings known from the store.
///
/// Insertion order is the store's response order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobCollection {
    jobs: Vec<Job>,
}

impl JobCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the entire collection with a fresh store
    /// response. Saved records with a duplicated identifier keep their
    /// first occurrence; later ones are dropped.
    pub fn replace_all(&mut self, records: Vec<Job>) {
        let mut seen = HashSet::new();
        self.jobs = records
            .into_iter()
            .filter(|job| match job.id {
                Some(id) => seen.insert(id),
                None => true,
            })
            .collect();
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Look up a record by store identifier.
    pub fn get(&self, id: i64) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i64, title: &str) -> Job {
        Job {
            id: Some(id),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "NYC".to_string(),
            description: None,
            job_type: None,
            experience: None,
            salary: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_replace_all_swaps_everything() {
        let mut collection = JobCollection::new();
        collection.replace_all(vec![job(1, "Engineer"), job(2, "Designer")]);
        assert_eq!(collection.len(), 2);

        collection.replace_all(vec![job(3, "QA")]);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.jobs()[0].title, "QA");
    }

    #[test]
    fn test_replace_all_preserves_store_order() {
        let mut collection = JobCollection::new();
        collection.replace_all(vec![job(5, "Late"), job(2, "Early"), job(9, "Mid")]);
        let ids: Vec<_> = collection.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![Some(5), Some(2), Some(9)]);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut collection = JobCollection::new();
        collection.replace_all(vec![job(1, "First"), job(1, "Second"), job(2, "Other")]);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(1).unwrap().title, "First");
    }

    #[test]
    fn test_replace_with_equal_data_is_noop() {
        let records = vec![job(1, "Engineer"), job(2, "Designer")];
        let mut collection = JobCollection::new();
        collection.replace_all(records.clone());
        let before = collection.clone();

        collection.replace_all(records);
        assert_eq!(collection, before);
    }

    #[test]
    fn test_get_by_id() {
        let mut collection = JobCollection::new();
        collection.replace_all(vec![job(1, "Engineer")]);
        assert_eq!(collection.get(1).unwrap().title, "Engineer");
        assert!(collection.get(42).is_none());
    }
}
