// src/views/pages.rs
//! Full pages, one function per route

use super::components::{
    candidate_filter, candidate_list, card_holder, complete_profile_banner, heading,
    job_detail_card, notice, unauthorized, ApplyState, FilterValues,
};
use super::{
    escape, layout, nav_for_role, NavLink, APP_NAME, CANDIDATE_HOME, LOGOUT, NEW_JOB, PROFILE,
    RECRUITER_HOME, SIGN_IN, SIGN_UP,
};
use crate::auth::Role;
use crate::types::{Candidate, Job, ListedJob};

/// Feedback shown once after a redirect.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub kind: String,
    pub message: String,
}

impl Feedback {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    fn render(&self) -> String {
        notice(&self.kind, &self.message)
    }
}

fn error_line(error: Option<&str>) -> String {
    error.map(|e| notice("error", e)).unwrap_or_default()
}

pub fn home_page(role: Option<Role>) -> String {
    let continue_link = role
        .map(|r| format!(r#"<p><a href="{}">Continue to your dashboard</a></p>"#, r.home_path()))
        .unwrap_or_default();

    let body = format!(
        r#"<section class="card"><h1>{app}</h1><p>Welcome to Hire-archy: where AI helps you find work, not steal it. We make job matching so smooth, even your imposter syndrome will be impressed</p><p><a href="/signup">SignUp</a> <a href="/signin">SignIn</a></p>{continue_link}</section>"#,
        app = APP_NAME,
        continue_link = continue_link,
    );

    layout("Home", &[], &body)
}

fn credentials_form(action: &str, button: &str, email: &str, error: Option<&str>) -> String {
    format!(
        r#"<form method="post" action="{action}"><input type="email" name="email" placeholder="Email" required value="{email}"><input type="password" name="password" placeholder="Password" required>{error}<button type="submit">{button}</button></form>"#,
        action = action,
        email = escape(email),
        error = error_line(error),
        button = button,
    )
}

pub fn signin_page(email: &str, error: Option<&str>) -> String {
    let body = format!(
        "{}{}",
        heading("Login to Your Account", None),
        credentials_form("/signin", "Sign In", email, error)
    );
    layout("Sign In", &[SIGN_UP], &body)
}

pub fn signup_page(email: &str, error: Option<&str>) -> String {
    let body = format!(
        "{}{}",
        heading("Create Your Account", None),
        credentials_form("/signup", "Sign Up", email, error)
    );
    layout("Sign Up", &[SIGN_IN], &body)
}

pub fn user_home_page(all_jobs: &[ListedJob], recommended: &[ListedJob]) -> String {
    let body = format!(
        "{banner}{all_heading}{all}{rec_heading}{rec}",
        banner = complete_profile_banner(),
        all_heading = heading("All Jobs", None),
        all = card_holder(all_jobs),
        rec_heading = heading(
            "AI Recommended Jobs",
            Some("Jobs ranked against your resume and profile"),
        ),
        rec = card_holder(recommended),
    );
    layout("Jobs", &[PROFILE, LOGOUT], &body)
}

pub fn recruiter_home_page(
    filter: &FilterValues,
    results: Option<&[Candidate]>,
    jobs: &[ListedJob],
) -> String {
    let body = format!(
        "{}{}{}",
        heading("Active Jobs", None),
        candidate_filter(filter, results),
        card_holder(jobs)
    );
    layout("Recruiter Home", &[NEW_JOB, LOGOUT], &body)
}

/// Navigation on the job page: recruiters get their dashboard links,
/// everyone else the candidate ones.
fn job_page_nav(role: Option<Role>) -> Vec<NavLink> {
    match role {
        Some(Role::Recruiter) => vec![RECRUITER_HOME, NEW_JOB, LOGOUT],
        _ => vec![CANDIDATE_HOME, LOGOUT],
    }
}

pub fn job_page(
    role: Option<Role>,
    job: &Job,
    apply: &ApplyState,
    ranked: Option<&[Candidate]>,
) -> String {
    let applicants = ranked
        .map(|candidates| {
            format!(
                "<div>{}{}</div>",
                heading("Candidates applied to this job", None),
                candidate_list(candidates)
            )
        })
        .unwrap_or_default();

    let body = format!("{}{}", job_detail_card(job, apply), applicants);
    layout(&job.title, &job_page_nav(role), &body)
}

pub fn job_not_found_page(role: Option<Role>) -> String {
    layout(
        "Job not found",
        &job_page_nav(role),
        "<p>Job not found or error fetching data.</p>",
    )
}

/// Raw values of the new job form, kept for re-rendering after an error.
#[derive(Debug, Clone, Default)]
pub struct JobFormValues<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub key_skills: &'a str,
    pub experience_required: &'a str,
    pub location: &'a str,
    pub company_name: &'a str,
}

pub fn new_job_page(values: &JobFormValues<'_>, error: Option<&str>) -> String {
    let form = format!(
        r#"<form method="post" action="/newjob"><input type="text" name="title" placeholder="Job Title" required value="{title}"><textarea name="description" placeholder="Job Description" required>{description}</textarea><input type="text" name="key_skills" placeholder="Key Skills (comma separated)" required value="{skills}"><input type="number" name="experience_required" placeholder="Experience Required (years)" required min="0" value="{experience}"><input type="text" name="location" placeholder="Location" required value="{location}"><input type="text" name="company_name" placeholder="Company Name" required value="{company}">{error}<button type="submit">Create Job</button></form>"#,
        title = escape(values.title),
        description = escape(values.description),
        skills = escape(values.key_skills),
        experience = escape(values.experience_required),
        location = escape(values.location),
        company = escape(values.company_name),
        error = error_line(error),
    );

    let body = format!("{}{}", heading("Post a New Job", None), form);
    layout("New Job", &[RECRUITER_HOME, LOGOUT], &body)
}

pub fn profile_page(email: Option<&str>, feedback: Option<&Feedback>) -> String {
    let signed_in = email
        .map(|e| format!("<p>Signed in as <strong>{}</strong></p>", escape(e)))
        .unwrap_or_default();

    let body = format!(
        r#"{signed_in}{feedback}<section class="card">{upload_heading}<form method="post" action="/profile/resume" enctype="multipart/form-data"><input type="file" name="file" accept=".pdf,.doc,.docx" required><button type="submit">Upload Resume</button></form></section><section class="card">{details_heading}<form method="post" action="/profile"><input name="full_name" type="text" placeholder="Full Name"><input name="phone_number" type="tel" placeholder="Phone Number"><input name="location" type="text" placeholder="Location"><input name="years_of_experience" type="number" placeholder="Years of Experience" min="0"><input name="key_skills" type="text" placeholder="Key Skills (comma separated)"><button type="submit">Save Profile</button></form></section>"#,
        signed_in = signed_in,
        feedback = feedback.map(Feedback::render).unwrap_or_default(),
        upload_heading = heading("Upload Resume", None),
        details_heading = heading("Profile Details", None),
    );

    layout("Profile", &[CANDIDATE_HOME, LOGOUT], &body)
}

pub fn unauthorized_page(role: Option<Role>) -> String {
    layout("Unauthorized", &nav_for_role(role), &unauthorized())
}

pub fn error_page(code: u16, message: &str) -> String {
    let body = format!(
        r#"<section class="card"><h1>{}</h1><p>{}</p><a href="/">Go to Homepage</a></section>"#,
        code,
        escape(message)
    );
    layout("Error", &[], &body)
}
