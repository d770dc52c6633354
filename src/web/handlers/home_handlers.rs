// src/web/handlers/home_handlers.rs
use crate::auth::OptionalSession;
use crate::core::{ApiClient, FailSoft};
use crate::types::ListedJob;
use crate::views::pages::{home_page, recruiter_home_page, user_home_page};
use crate::web::types::{CandidateFilterQuery, PageResponse};

use rocket::State;
use tracing::{debug, info};

pub async fn home_handler(session: OptionalSession) -> PageResponse {
    PageResponse::html(home_page(session.role()))
}

/// Candidate dashboard: all jobs next to the AI recommendations. Either list
/// renders empty when its fetch fails.
pub async fn user_home_handler(session: OptionalSession, api: &State<ApiClient>) -> PageResponse {
    let Some(session) = session.session else {
        return PageResponse::redirect("/signin");
    };

    let user_id = session.user_id();
    let (all_jobs, recommended) = tokio::join!(
        api.list_jobs(),
        api.recommended_jobs(session.token(), &user_id)
    );

    let all_jobs: Vec<ListedJob> = all_jobs
        .or_empty("jobs")
        .into_iter()
        .map(ListedJob::from)
        .collect();
    let recommended = recommended.or_empty("recommended jobs");

    debug!(
        "User home: {} jobs, {} recommended",
        all_jobs.len(),
        recommended.len()
    );
    PageResponse::html(user_home_page(&all_jobs, &recommended))
}

pub async fn recruiter_home_handler(
    filter: CandidateFilterQuery,
    session: OptionalSession,
    api: &State<ApiClient>,
) -> PageResponse {
    let Some(session) = session.session else {
        return PageResponse::redirect("/signin");
    };
    let token = session.token();

    let (jobs, results) = if filter.is_search() {
        let search = filter.to_search();
        info!("Searching candidates with {:?}", search);
        let (jobs, found) = tokio::join!(
            api.recruiter_jobs(token),
            api.search_candidates(&search, Some(token))
        );
        (jobs, Some(found.or_empty("candidates")))
    } else {
        (api.recruiter_jobs(token).await, None)
    };

    let jobs: Vec<ListedJob> = jobs
        .or_empty("recruiter jobs")
        .into_iter()
        .map(ListedJob::from)
        .collect();

    PageResponse::html(recruiter_home_page(
        &filter.values(),
        results.as_deref(),
        &jobs,
    ))
}

pub async fn health_handler(session: OptionalSession) -> &'static str {
    match session.role() {
        Some(role) => info!("Health check by signed-in {}", role),
        None if session.session.is_some() => info!("Health check by session without role"),
        None => info!("Health check by anonymous user"),
    }
    "OK"
}
