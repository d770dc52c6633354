// src/types/request.rs
//! Request bodies sent to the job-matching API

use serde::{Deserialize, Serialize};

use super::split_skills;

const PDF_MIME: &str = "application/pdf";
const DOC_MIME: &str = "application/msword";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub key_skills: Vec<String>,
    pub experience_required: u32,
    pub location: String,
    pub company_name: String,
}

/// Body of `PUT /users/me`. A `None` experience is sent as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub phone_number: String,
    pub location: String,
    pub years_of_experience: Option<u32>,
    pub key_skills: Vec<String>,
}

impl ProfileUpdate {
    /// Build an update from raw form input. Blank experience means zero,
    /// anything non-numeric is left for the API to decide.
    pub fn from_raw(
        full_name: &str,
        phone_number: &str,
        location: &str,
        years_of_experience: &str,
        key_skills: &str,
    ) -> Self {
        let years = years_of_experience.trim();
        let years_of_experience = if years.is_empty() {
            Some(0)
        } else {
            years.parse().ok()
        };

        Self {
            full_name: full_name.trim().to_string(),
            phone_number: phone_number.trim().to_string(),
            location: location.trim().to_string(),
            years_of_experience,
            key_skills: split_skills(key_skills),
        }
    }
}

/// Filters for `GET /candidates/`. Empty filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSearch {
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub min_experience: Option<u32>,
}

impl CandidateSearch {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = self
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| ("skills", s.to_string()))
            .collect();

        if let Some(location) = self.location.as_deref().map(str::trim) {
            if !location.is_empty() {
                pairs.push(("location", location.to_string()));
            }
        }

        if let Some(min) = self.min_experience {
            pairs.push(("min_experience", min.to_string()));
        }

        pairs
    }
}

/// Resume file ready to be forwarded as multipart.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    pub fn new(file_name: String, content_type: String, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            content_type,
            bytes,
        }
    }
}

/// Mime type of an accepted resume file, by extension.
pub fn resume_mime(file_name: &str) -> Option<&'static str> {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".pdf") {
        Some(PDF_MIME)
    } else if lower_name.ends_with(".docx") {
        Some(DOCX_MIME)
    } else if lower_name.ends_with(".doc") {
        Some(DOC_MIME)
    } else {
        None
    }
}

/// Canonical form of an accepted resume mime type.
pub fn accepted_resume_mime(mime: &str) -> Option<&'static str> {
    [PDF_MIME, DOCX_MIME, DOC_MIME]
        .into_iter()
        .find(|accepted| mime.eq_ignore_ascii_case(accepted))
}

/// File extension for an accepted resume mime type.
pub fn resume_extension(mime: &str) -> Option<&'static str> {
    match mime {
        PDF_MIME => Some("pdf"),
        DOCX_MIME => Some("docx"),
        DOC_MIME => Some("doc"),
        _ => None,
    }
}
