//! Aggregate statistics over the job collection
//!
//! Pure functions of the current collection; there are no independent
//! counters to drift out of sync.

use crate::collection::JobCollection;
use crate::job::Job;
use std::collections::{BTreeMap, HashSet};

/// How many of the newest records the dashboard shows.
const RECENT_LIMIT: usize = 5;

/// Summary counts derived from the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobStats {
    pub total: usize,
    pub companies: usize,
    pub locations: usize,
    /// Type label -> count, with unset types under "Not specified".
    /// Only labels that actually occur appear as keys.
    pub types: BTreeMap<String, usize>,
}

impl JobStats {
    /// Share of the total for one histogram bucket, as a percentage.
    /// Defined as 0.0 for an empty collection.
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (count as f64 / self.total as f64) * 100.0
    }
}

/// Compute summary statistics for the whole collection.
pub fn aggregate(collection: &JobCollection) -> JobStats {
    let companies: HashSet<&str> = collection.iter().map(|j| j.company.as_str()).collect();
    let locations: HashSet<&str> = collection.iter().map(|j| j.location.as_str()).collect();

    let mut types = BTreeMap::new();
    for job in collection.iter() {
        *types.entry(job.type_label()).or_insert(0) += 1;
    }

    JobStats {
        total: collection.len(),
        companies: companies.len(),
        locations: locations.len(),
        types,
    }
}

/// The first few records in the collection's current order, for the
/// dashboard's recent-jobs panel. No recency sort is applied; order is
/// whatever the store returned.
pub fn recent(collection: &JobCollection) -> &[Job] {
    let end = collection.len().min(RECENT_LIMIT);
    &collection.jobs()[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::JobType;

    fn job(id: i64, company: &str, location: &str, job_type: Option<JobType>) -> Job {
        Job {
            id: Some(id),
            title: format!("Job {id}"),
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

    #[test]
    fn test_empty_collection() {
        let stats = aggregate(&JobCollection::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.companies, 0);
        assert_eq!(stats.locations, 0);
        assert!(stats.types.is_empty());
        assert_eq!(stats.percentage(0), 0.0);
    }

    #[test]
    fn test_distinct_counts_and_histogram() {
        let mut collection = JobCollection::new();
        collection.replace_all(vec![
            job(1, "Acme", "NYC", Some(JobType::FullTime)),
            job(2, "Beta", "LA", Some(JobType::Remote)),
            job(3, "Acme", "NYC", Some(JobType::FullTime)),
            job(4, "Acme", "Boston", None),
        ]);
        let stats = aggregate(&collection);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.companies, 2);
        assert_eq!(stats.locations, 3);
        assert_eq!(stats.types.get("Full-time"), Some(&2));
        assert_eq!(stats.types.get("Remote"), Some(&1));
        assert_eq!(stats.types.get("Not specified"), Some(&1));
        assert_eq!(stats.types.len(), 3);
    }

    #[test]
    fn test_percentage_of_bucket() {
        let mut collection = JobCollection::new();
        collection.replace_all(vec![
            job(1, "Acme", "NYC", Some(JobType::FullTime)),
            job(2, "Beta", "LA", Some(JobType::Remote)),
        ]);
        let stats = aggregate(&collection);
        assert_eq!(stats.percentage(1), 50.0);
        assert_eq!(stats.percentage(2), 100.0);
    }

    #[test]
    fn test_recent_caps_at_five_in_store_order() {
        let mut collection = JobCollection::new();
        collection.replace_all((1..=7).map(|i| job(i, "Acme", "NYC", None)).collect());
        let recent = recent(&collection);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].id, Some(1));
        assert_eq!(recent[4].id, Some(5));
    }

    #[test]
    fn test_recent_with_small_collection() {
        let mut collection = JobCollection::new();
        collection.replace_all(vec![job(1, "Acme", "NYC", None)]);
        assert_eq!(recent(&collection).len(), 1);
        assert!(recent(&JobCollection::new()).is_empty());
    }
}
