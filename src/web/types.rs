// src/web/types.rs
//! Form payloads, managed state and responders shared by the page handlers

use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};
use rocket::Responder;

use crate::types::{CandidateSearch, Credentials, ProfileUpdate};
use crate::views::components::FilterValues;
use crate::views::pages::JobFormValues;

/// Settings the handlers need beyond the API client.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub cookie_max_age_secs: i64,
    pub max_upload_bytes: u64,
}

/// Every page handler answers with one of these.
#[derive(Debug, Responder)]
pub enum PageResponse {
    Html(RawHtml<String>),
    #[response(status = 403)]
    Forbidden(RawHtml<String>),
    #[response(status = 404)]
    NotFound(RawHtml<String>),
    Redirect(Redirect),
    Flash(Flash<Redirect>),
}

impl PageResponse {
    pub fn html(body: String) -> Self {
        PageResponse::Html(RawHtml(body))
    }

    pub fn forbidden(body: String) -> Self {
        PageResponse::Forbidden(RawHtml(body))
    }

    pub fn not_found(body: String) -> Self {
        PageResponse::NotFound(RawHtml(body))
    }

    pub fn redirect(to: &'static str) -> Self {
        PageResponse::Redirect(Redirect::to(to))
    }
}

#[derive(Debug, FromForm)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
}

impl CredentialsForm {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// New job form as submitted. Experience stays raw so a bad value can be
/// shown back to the recruiter.
#[derive(Debug, FromForm)]
pub struct NewJobForm {
    pub title: String,
    pub description: String,
    pub key_skills: String,
    pub experience_required: String,
    pub location: String,
    pub company_name: String,
}

impl NewJobForm {
    pub fn values(&self) -> JobFormValues<'_> {
        JobFormValues {
            title: &self.title,
            description: &self.description,
            key_skills: &self.key_skills,
            experience_required: &self.experience_required,
            location: &self.location,
            company_name: &self.company_name,
        }
    }
}

#[derive(Debug, Default, FromForm)]
pub struct ProfileForm {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub years_of_experience: Option<String>,
    pub key_skills: Option<String>,
}

impl ProfileForm {
    pub fn update(&self) -> ProfileUpdate {
        ProfileUpdate::from_raw(
            self.full_name.as_deref().unwrap_or(""),
            self.phone_number.as_deref().unwrap_or(""),
            self.location.as_deref().unwrap_or(""),
            self.years_of_experience.as_deref().unwrap_or(""),
            self.key_skills.as_deref().unwrap_or(""),
        )
    }
}

#[derive(FromForm)]
pub struct ResumeForm<'f> {
    pub file: TempFile<'f>,
}

/// Query of the recruiter home page. The search only runs when the
/// `search` button was pressed.
#[derive(Debug, Default, FromForm)]
pub struct CandidateFilterQuery {
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub min_experience: Option<String>,
    pub search: Option<String>,
}

impl CandidateFilterQuery {
    pub fn is_search(&self) -> bool {
        self.search.is_some()
    }

    /// Filters sent to the API. A non-numeric minimum experience is dropped.
    pub fn to_search(&self) -> CandidateSearch {
        CandidateSearch {
            skills: self
                .skills
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            location: self
                .location
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            min_experience: self
                .min_experience
                .as_deref()
                .and_then(|m| m.trim().parse().ok()),
        }
    }

    pub fn values(&self) -> FilterValues {
        FilterValues {
            skills: self.skills.clone(),
            location: self.location.clone().unwrap_or_default(),
            min_experience: self.min_experience.clone().unwrap_or_default(),
        }
    }
}
