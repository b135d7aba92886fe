//! # jobdeck
//!
//! A terminal front-end for a job board's record store: list, search,
//! filter, create, edit, and delete job postings, plus a small
//! statistics dashboard.
//!
//! ## Usage
//!
//! ```bash
//! jobdeck list [--search "term"] [--type "Full-time"] [--mode list]
//! jobdeck add
//! jobdeck delete 3
//! jobdeck stats
//! ```
//!
//! ## Modules
//!
//! - `job` - The job posting record and its enumerated labels
//! - `collection` - Authoritative in-memory collection, replaced wholesale after every store round trip
//! - `view` - Pure derivation of the filtered/search view
//! - `stats` - Pure aggregate statistics for the dashboard
//! - `form` - Create/edit draft session with title autocomplete
//! - `workflow` - Controller over the jobs/add/dashboard views and all store mutations
//! - `store` - Trait-based abstraction over the remote record store, plus the HTTP implementation
//! - `interaction` - User notification/prompt side-channel with a mock for tests
//! - `config` - Configuration file and environment overrides
//! - `testing` - Reusable in-memory store fixture for tests
pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod form;
pub mod interaction;
pub mod job;
pub mod stats;
pub mod store;
pub mod view;
pub mod workflow;

pub mod testing;
