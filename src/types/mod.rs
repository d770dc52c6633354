// src/types/mod.rs
//! DTOs mirrored from the job-matching API

pub mod candidate;
pub mod job;
pub mod request;
pub mod response;

pub use candidate::{Candidate, RankedCandidates};
pub use job::{Job, JobRecommendation, ListedJob};
pub use request::{CandidateSearch, Credentials, NewJob, ProfileUpdate, ResumeUpload};
pub use response::{ApiErrorBody, LoginResponse, SignupResponse, UserInfo};

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Split a comma separated list, trimming entries and dropping empty ones.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
