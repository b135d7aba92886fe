//! Record store abstraction
//!
//! Trait-based seam over the remote job store so the workflow layer and
//! tests can run against an in-memory implementation.

pub mod http;

pub use http::HttpJobStore;

use crate::error::Result;
use crate::job::Job;
use async_trait::async_trait;

/// CRUD operations against the system of record for job postings.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Fetch every job posting, in the store's order.
    async fn list_all(&self) -> Result<Vec<Job>>;

    /// Fetch a single posting by identifier.
    async fn get(&self, id: i64) -> Result<Job>;

    /// Persist a new posting; the store assigns the identifier and
    /// timestamps and echoes the saved record.
    async fn create(&self, job: &Job) -> Result<Job>;

    /// Overwrite an existing posting and echo the saved record.
    async fn update(&self, id: i64, job: &Job) -> Result<Job>;

    /// Remove a posting from the store.
    async fn delete(&self, id: i64) -> Result<()>;
}
