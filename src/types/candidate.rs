// src/types/candidate.rs
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Candidate as returned by the search and ranking endpoints. The API leaves
/// most profile fields empty until the candidate completes their profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Match score in `0..=1`, only present on ranked results.
    #[serde(default)]
    pub score: Option<f64>,
}

impl Candidate {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Unnamed candidate")
    }

    /// Score as a whole percentage, e.g. `0.876` becomes `88`.
    pub fn match_percent(&self) -> Option<u32> {
        self.score.map(score_percent)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RankedCandidates {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidates: Vec<Candidate>,
}

pub fn score_percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}
