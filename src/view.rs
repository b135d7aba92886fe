//! Derived view of the collection under the active search and type filter
//!
//! Pure recomputation over the collection: the controller rebuilds the
//! view on every read, so a stale view cannot be observed.

use crate::collection::JobCollection;
use crate::job::{Job, JobType};
use std::fmt;
use std::str::FromStr;

/// Type filter with an explicit all-types sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(JobType),
}

impl TypeFilter {
    fn matches(&self, job: &Job) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => job.job_type == Some(*wanted),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Only(t) => write!(f, "{t}"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(TypeFilter::All)
        } else {
            s.parse::<JobType>().map(TypeFilter::Only)
        }
    }
}

/// Derive the visible subset of the collection.
///
/// A non-empty search term keeps records whose title, company, or
/// location contains it case-insensitively; a non-`All` filter keeps
/// records whose type equals it exactly. Both predicates are conjunctive
/// and the collection's order is preserved.
pub fn derive_view(collection: &JobCollection, search_term: &str, filter: &TypeFilter) -> Vec<Job> {
    let needle = search_term.to_lowercase();
    collection
        .iter()
        .filter(|job| needle.is_empty() || matches_search(job, &needle))
        .filter(|job| filter.matches(job))
        .cloned()
        .collect()
}

fn matches_search(job: &Job, needle: &str) -> bool {
    job.title.to_lowercase().contains(needle)
        || job.company.to_lowercase().contains(needle)
        || job.location.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i64, title: &str, company: &str, location: &str, job_type: Option<JobType>) -> Job {
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

    fn sample() -> JobCollection {
        let mut collection = JobCollection::new();
        collection.replace_all(vec![
            job(1, "Engineer", "Acme", "NYC", Some(JobType::FullTime)),
            job(2, "Designer", "Beta", "LA", Some(JobType::Remote)),
            job(3, "Engineering Manager", "Acme", "Boston", None),
        ]);
        collection
    }

    fn ids(view: &[Job]) -> Vec<i64> {
        view.iter().filter_map(|j| j.id).collect()
    }

    #[test]
    fn test_no_filters_returns_collection_unchanged() {
        let collection = sample();
        let view = derive_view(&collection, "", &TypeFilter::All);
        assert_eq!(view, collection.jobs());
    }

    #[test]
    fn test_search_is_case_insensitive_over_three_fields() {
        let collection = sample();
        assert_eq!(ids(&derive_view(&collection, "eng", &TypeFilter::All)), vec![1, 3]);
        assert_eq!(ids(&derive_view(&collection, "BETA", &TypeFilter::All)), vec![2]);
        assert_eq!(ids(&derive_view(&collection, "nyc", &TypeFilter::All)), vec![1]);
    }

    #[test]
    fn test_type_filter_is_exact() {
        let collection = sample();
        let view = derive_view(&collection, "", &TypeFilter::Only(JobType::Remote));
        assert_eq!(ids(&view), vec![2]);
        // Unset type matches nothing but All
        let view = derive_view(&collection, "", &TypeFilter::Only(JobType::Contract));
        assert!(view.is_empty());
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let collection = sample();
        let view = derive_view(&collection, "acme", &TypeFilter::Only(JobType::FullTime));
        assert_eq!(ids(&view), vec![1]);
    }

    #[test]
    fn test_order_preserved_and_subsequence() {
        let collection = sample();
        let view = derive_view(&collection, "a", &TypeFilter::All);
        let all_ids = ids(&derive_view(&collection, "", &TypeFilter::All));
        let view_ids = ids(&view);
        // Subsequence check against the full collection order
        let mut cursor = all_ids.iter();
        for id in &view_ids {
            assert!(cursor.any(|c| c == id));
        }
    }

    #[test]
    fn test_empty_collection_yields_empty_view() {
        let collection = JobCollection::new();
        assert!(derive_view(&collection, "anything", &TypeFilter::All).is_empty());
    }

    #[test]
    fn test_filter_parses_sentinel_and_labels() {
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!(
            "Full-time".parse::<TypeFilter>().unwrap(),
            TypeFilter::Only(JobType::FullTime)
        );
        assert!("gig".parse::<TypeFilter>().is_err());
    }
}
