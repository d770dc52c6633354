// src/web/handlers/job_handlers.rs
use crate::auth::{OptionalSession, Role};
use crate::core::{ApiClient, FailSoft};
use crate::types::{split_skills, NewJob};
use crate::views::components::ApplyState;
use crate::views::pages::{
    job_not_found_page, job_page, new_job_page, unauthorized_page, JobFormValues,
};
use crate::web::types::{NewJobForm, PageResponse};

use rocket::form::Form;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::State;
use tracing::{error, info, warn};
use uuid::Uuid;

const APPLY_FAILED: &str = "Failed to apply.";

fn apply_state(role: Option<Role>, flash: Option<FlashMessage<'_>>) -> ApplyState {
    if role != Some(Role::Candidate) {
        return ApplyState::Hidden;
    }
    match flash {
        Some(flash) if flash.kind() == "success" => ApplyState::Applied,
        Some(flash) => ApplyState::Failed(flash.message().to_string()),
        None => ApplyState::Ready,
    }
}

pub async fn job_detail_handler(
    id: &str,
    session: OptionalSession,
    flash: Option<FlashMessage<'_>>,
    api: &State<ApiClient>,
) -> PageResponse {
    let role = session.role();

    let Ok(job_id) = Uuid::parse_str(id) else {
        warn!("Malformed job id: {}", id);
        return PageResponse::not_found(job_not_found_page(role));
    };

    let token = session.session.as_ref().map(|s| s.token());
    let Some(job) = api.job(job_id, token).await.or_none("job detail") else {
        return PageResponse::not_found(job_not_found_page(role));
    };

    let ranked = match (role, token) {
        (Some(Role::Recruiter), Some(token)) => Some(
            api.ranked_candidates(token, job_id)
                .await
                .or_empty("ranked candidates")
                .candidates,
        ),
        _ => None,
    };

    let apply = apply_state(role, flash);
    PageResponse::html(job_page(role, &job, &apply, ranked.as_deref()))
}

pub async fn apply_handler(
    id: &str,
    session: OptionalSession,
    api: &State<ApiClient>,
) -> PageResponse {
    let back = Redirect::to(format!("/jobs/{}", id));

    let Some(session) = session.session else {
        warn!("Apply to {} without a session", id);
        return PageResponse::Flash(Flash::error(back, APPLY_FAILED));
    };
    let Ok(job_id) = Uuid::parse_str(id) else {
        return PageResponse::Flash(Flash::error(back, APPLY_FAILED));
    };

    match api.apply_to_job(session.token(), job_id).await {
        Ok(()) => {
            info!("Applied to job {}", job_id);
            PageResponse::Flash(Flash::success(back, "Applied successfully!"))
        }
        Err(e) => {
            error!("Apply to job {} failed: {}", job_id, e);
            PageResponse::Flash(Flash::error(back, e.message_or(APPLY_FAILED)))
        }
    }
}

pub async fn new_job_form_handler(session: OptionalSession) -> PageResponse {
    match session.role() {
        Some(Role::Recruiter) => {
            PageResponse::html(new_job_page(&JobFormValues::default(), None))
        }
        role => PageResponse::forbidden(unauthorized_page(role)),
    }
}

pub async fn create_job_handler(
    form: Form<NewJobForm>,
    session: OptionalSession,
    api: &State<ApiClient>,
) -> PageResponse {
    let values = form.values();
    let failed = |message: &str| PageResponse::html(new_job_page(&values, Some(message)));

    let Some(session) = session.session else {
        return failed("Not authenticated");
    };
    if !session.is_recruiter() {
        return PageResponse::forbidden(unauthorized_page(session.role()));
    }

    let Ok(experience_required) = form.experience_required.trim().parse::<u32>() else {
        return failed("Experience Required must be a whole number of years");
    };

    let new_job = NewJob {
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
        key_skills: split_skills(&form.key_skills),
        experience_required,
        location: form.location.trim().to_string(),
        company_name: form.company_name.trim().to_string(),
    };

    match api.create_job(session.token(), &new_job).await {
        Ok(job) => {
            info!("Created job {} ({})", job.title, job.id);
            PageResponse::redirect("/recruiterhome")
        }
        Err(e) => {
            error!("Job creation failed: {}", e);
            failed(e.message_or("Job creation failed").as_str())
        }
    }
}
