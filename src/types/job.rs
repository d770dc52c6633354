// src/types/job.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::null_as_default;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub experience_required: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_skills: Vec<String>,
    pub company_name: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub recruiter_id: Option<String>,
    #[serde(default)]
    pub job_summary: Option<String>,
}

/// Match score of one job for the signed-in candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobRecommendation {
    pub job_id: Uuid,
    pub score: f64,
}

/// A job as shown on a card: recommended jobs are highlighted and scored.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedJob {
    pub job: Job,
    pub highlighted: bool,
    pub score: Option<f64>,
}

impl ListedJob {
    pub fn plain(job: Job) -> Self {
        Self {
            job,
            highlighted: false,
            score: None,
        }
    }

    pub fn recommended(job: Job, score: f64) -> Self {
        Self {
            job,
            highlighted: true,
            score: Some(score),
        }
    }
}

impl From<Job> for ListedJob {
    fn from(job: Job) -> Self {
        Self::plain(job)
    }
}
