// src/views/components.rs
//! Page building blocks. Every function returns an HTML fragment.

use super::escape;
use crate::types::candidate::score_percent;
use crate::types::{Candidate, Job, ListedJob};

pub fn heading(text: &str, subheading: Option<&str>) -> String {
    match subheading {
        Some(sub) => format!("<h2>{}</h2><p>{}</p>", escape(text), escape(sub)),
        None => format!("<h2>{}</h2>", escape(text)),
    }
}

/// Inline feedback line, `kind` is `success` or `error`.
pub fn notice(kind: &str, message: &str) -> String {
    let class = if kind == "success" { "success" } else { "error" };
    format!(r#"<p class="{}">{}</p>"#, class, escape(message))
}

pub fn banner(
    heading: &str,
    description: &str,
    button_text: &str,
    button_link: &str,
) -> String {
    format!(
        r#"<section class="banner"><h2>{}</h2><p>{}</p><a href="{}"><button>{}</button></a></section>"#,
        escape(heading),
        escape(description),
        escape(button_link),
        escape(button_text)
    )
}

pub fn complete_profile_banner() -> String {
    banner(
        "Please complete your profile",
        "Upload your resume and let our AI match you with jobs that actually fit. \
         Want even better results? Tweak or overwrite fields like skills or experience, \
         it's like giving your resume a quick glow-up before it goes job hunting!",
        "Complete Profile",
        "/profile",
    )
}

fn skills(key_skills: &[String]) -> String {
    let tags: String = key_skills
        .iter()
        .map(|s| format!(r#"<span class="skill">{}</span>"#, escape(s)))
        .collect();
    format!(r#"<div class="skills">{}</div>"#, tags)
}

pub fn job_card(listed: &ListedJob) -> String {
    let job = &listed.job;
    let class = if listed.highlighted {
        "card highlighted"
    } else {
        "card"
    };
    let score = listed
        .score
        .map(|s| format!(r#"<p class="match">{}% Match</p>"#, score_percent(s)))
        .unwrap_or_default();

    format!(
        r#"<article class="{class}"><h3>{title}</h3><p>{company}</p>{score}<p><strong>Location:</strong> {location}</p><p><strong>Experience:</strong> {experience} years</p>{skills}<a href="/jobs/{id}">View Details</a></article>"#,
        class = class,
        title = escape(&job.title),
        company = escape(&job.company_name),
        score = score,
        location = escape(&job.location),
        experience = job.experience_required,
        skills = skills(&job.key_skills),
        id = job.id,
    )
}

pub fn card_holder(jobs: &[ListedJob]) -> String {
    let cards: String = jobs.iter().map(job_card).collect();
    format!(r#"<section class="cards">{}</section>"#, cards)
}

/// State of the apply control on a job page.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyState {
    /// Viewer is not a candidate.
    Hidden,
    Ready,
    Applied,
    Failed(String),
}

pub fn apply_button(job_id: &str, state: &ApplyState) -> String {
    let form = format!(
        r#"<form method="post" action="/jobs/{}/apply"><button type="submit">Apply to this Job</button></form>"#,
        escape(job_id)
    );

    match state {
        ApplyState::Hidden => String::new(),
        ApplyState::Ready => form,
        ApplyState::Applied => notice("success", "Applied successfully!"),
        ApplyState::Failed(message) => format!("{}{}", form, notice("error", message)),
    }
}

pub fn job_detail_card(job: &Job, apply: &ApplyState) -> String {
    format!(
        r#"<section class="card"><h2>{title}</h2><p>Company: {company}</p><p>{description}</p><p><strong>Location:</strong> {location}</p><p><strong>Experience:</strong> {experience} years</p>{skills}{apply}</section>"#,
        title = escape(&job.title),
        company = escape(&job.company_name),
        description = escape(&job.description),
        location = escape(&job.location),
        experience = job.experience_required,
        skills = skills(&job.key_skills),
        apply = apply_button(&job.id.to_string(), apply),
    )
}

pub fn candidate_card(candidate: &Candidate) -> String {
    let name = candidate.display_name();
    let score = candidate
        .match_percent()
        .map(|p| format!(r#" <span class="match">{}% Match</span>"#, p))
        .unwrap_or_default();
    let experience = candidate
        .years_of_experience
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string());
    let phone = candidate
        .phone_number
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p><strong>Phone:</strong> {}</p>", escape(p)))
        .unwrap_or_default();
    let resume = candidate
        .resume_url
        .as_deref()
        .filter(|u| !u.is_empty())
        .map(|u| {
            format!(
                r#"<p><strong>Resume:</strong> <a href="{}" target="_blank" rel="noopener noreferrer">View Resume</a></p>"#,
                escape(u)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="card"><img class="avatar" src="https://api.dicebear.com/7.x/initials/svg?seed={seed}" alt="{alt}"><h3>{name}{score}</h3><p><strong>Email:</strong> {email}</p><p><strong>Location:</strong> {location}</p><p><strong>Experience:</strong> {experience} years</p>{phone}{resume}{skills}</article>"#,
        seed = urlencoding::encode(name),
        alt = escape(&format!("{}'s photo", name)),
        name = escape(name),
        score = score,
        email = escape(candidate.email.as_deref().unwrap_or("")),
        location = escape(candidate.location.as_deref().unwrap_or("")),
        experience = experience,
        phone = phone,
        resume = resume,
        skills = skills(&candidate.key_skills),
    )
}

pub fn candidate_list(candidates: &[Candidate]) -> String {
    let cards: String = candidates.iter().map(candidate_card).collect();
    format!(r#"<section class="cards">{}</section>"#, cards)
}

/// Values currently shown in the candidate filter form.
#[derive(Debug, Clone, Default)]
pub struct FilterValues {
    pub skills: Vec<String>,
    pub location: String,
    pub min_experience: String,
}

/// Search form for candidates, submitted back to the recruiter home. One
/// empty skill field is always offered in addition to the filled ones.
pub fn candidate_filter(values: &FilterValues, results: Option<&[Candidate]>) -> String {
    let skill_inputs: String = values
        .skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.as_str())
        .chain(std::iter::once(""))
        .map(|s| {
            format!(
                r#"<input type="text" name="skills" placeholder="Skill" value="{}">"#,
                escape(s)
            )
        })
        .collect();

    let results = match results {
        Some(found) if !found.is_empty() => {
            format!("<h4>Results:</h4>{}", candidate_list(found))
        }
        _ => String::new(),
    };

    format!(
        r#"<section class="card"><h3>Filter Candidates</h3><form class="inline" method="get" action="/recruiterhome">{skills}<input type="text" name="location" placeholder="Location" value="{location}"><input type="number" name="min_experience" placeholder="Min Exp" min="0" value="{min}"><button type="submit" name="search" value="1">Search</button></form>{results}</section>"#,
        skills = skill_inputs,
        location = escape(&values.location),
        min = escape(&values.min_experience),
        results = results,
    )
}

pub fn unauthorized() -> String {
    r#"<section class="card"><h1>Unauthorized Access</h1><p>You do not have permission to view this page.</p><a href="/"><button>Go to Homepage</button></a></section>"#
        .to_string()
}
