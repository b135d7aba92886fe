//! The job posting record and its enumerated labels
//!
//! Mirrors the record store's wire format: camelCase JSON fields, with
//! `type` and `experience` carried as their on-screen labels. The store
//! echoes blank selections as empty strings, which deserialize to `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single job posting.
///
/// A record without an `id` is unsaved; `id`, `created_at`, and
/// `updated_at` are assigned by the store and read-only on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub job_type: Option<JobType>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub experience: Option<ExperienceLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Job {
    /// True once the store has assigned an identifier.
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// The type label shown on dashboards, with unset grouped as
    /// "Not specified".
    pub fn type_label(&self) -> String {
        self.job_type
            .map(|t| t.to_string())
            .unwrap_or_else(|| "Not specified".to_string())
    }
}

/// Employment type labels offered by the job board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
    Hybrid,
}

impl JobType {
    pub const ALL: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Remote,
        JobType::Hybrid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Remote => "Remote",
            JobType::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .iter()
            .find(|t| t.label().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown job type: {s}"))
    }
}

/// Experience level labels offered by the job board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry Level")]
    EntryLevel,
    #[serde(rename = "1-3 years")]
    OneToThree,
    #[serde(rename = "3-5 years")]
    ThreeToFive,
    #[serde(rename = "5+ years")]
    FivePlus,
    #[serde(rename = "10+ years")]
    TenPlus,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 5] = [
        ExperienceLevel::EntryLevel,
        ExperienceLevel::OneToThree,
        ExperienceLevel::ThreeToFive,
        ExperienceLevel::FivePlus,
        ExperienceLevel::TenPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::EntryLevel => "Entry Level",
            ExperienceLevel::OneToThree => "1-3 years",
            ExperienceLevel::ThreeToFive => "3-5 years",
            ExperienceLevel::FivePlus => "5+ years",
            ExperienceLevel::TenPlus => "10+ years",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperienceLevel::ALL
            .iter()
            .find(|e| e.label().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown experience level: {s}"))
    }
}

/// Deserialize an optional label field, treating an empty or missing
/// string as unset rather than a parse error.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}
