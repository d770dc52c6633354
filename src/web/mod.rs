// src/web/mod.rs
//! Rocket routes. Every route delegates to a handler in `handlers`.

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;

pub use types::*;

use crate::auth::OptionalSession;
use crate::core::ApiClient;
use crate::environment::EnvironmentConfig;
use crate::views::pages::error_page;
use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::form::Form;
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::{catch, catchers, get, post, routes, Build, Request, Rocket, State};
use tracing::{error, info, warn};

#[get("/")]
pub async fn home(session: OptionalSession) -> PageResponse {
    handlers::home_handler(session).await
}

#[get("/signin")]
pub async fn signin_form() -> PageResponse {
    handlers::signin_form_handler().await
}

#[post("/signin", data = "<form>")]
pub async fn signin(
    form: Form<CredentialsForm>,
    api: &State<ApiClient>,
    config: &State<ServerConfig>,
    cookies: &rocket::http::CookieJar<'_>,
) -> PageResponse {
    handlers::signin_handler(form, api, config, cookies).await
}

#[get("/signup")]
pub async fn signup_form() -> PageResponse {
    handlers::signup_form_handler().await
}

#[post("/signup", data = "<form>")]
pub async fn signup(
    form: Form<CredentialsForm>,
    api: &State<ApiClient>,
    config: &State<ServerConfig>,
    cookies: &rocket::http::CookieJar<'_>,
) -> PageResponse {
    handlers::signup_handler(form, api, config, cookies).await
}

#[get("/logout")]
pub async fn logout(cookies: &rocket::http::CookieJar<'_>) -> PageResponse {
    handlers::logout_handler(cookies).await
}

#[get("/userhome")]
pub async fn user_home(session: OptionalSession, api: &State<ApiClient>) -> PageResponse {
    handlers::user_home_handler(session, api).await
}

#[get("/recruiterhome?<filter..>")]
pub async fn recruiter_home(
    filter: CandidateFilterQuery,
    session: OptionalSession,
    api: &State<ApiClient>,
) -> PageResponse {
    handlers::recruiter_home_handler(filter, session, api).await
}

#[get("/jobs/<id>")]
pub async fn job_detail(
    id: &str,
    session: OptionalSession,
    flash: Option<FlashMessage<'_>>,
    api: &State<ApiClient>,
) -> PageResponse {
    handlers::job_detail_handler(id, session, flash, api).await
}

#[post("/jobs/<id>/apply")]
pub async fn apply(id: &str, session: OptionalSession, api: &State<ApiClient>) -> PageResponse {
    handlers::apply_handler(id, session, api).await
}

#[get("/newjob")]
pub async fn new_job_form(session: OptionalSession) -> PageResponse {
    handlers::new_job_form_handler(session).await
}

#[post("/newjob", data = "<form>")]
pub async fn create_job(
    form: Form<NewJobForm>,
    session: OptionalSession,
    api: &State<ApiClient>,
) -> PageResponse {
    handlers::create_job_handler(form, session, api).await
}

#[get("/profile")]
pub async fn profile(
    session: OptionalSession,
    flash: Option<FlashMessage<'_>>,
    api: &State<ApiClient>,
) -> PageResponse {
    handlers::profile_handler(session, flash, api).await
}

#[post("/profile", data = "<form>")]
pub async fn update_profile(
    form: Form<ProfileForm>,
    session: OptionalSession,
    api: &State<ApiClient>,
) -> PageResponse {
    handlers::update_profile_handler(form, session, api).await
}

#[post("/profile/resume", data = "<form>")]
pub async fn upload_resume(
    form: Form<ResumeForm<'_>>,
    session: OptionalSession,
    api: &State<ApiClient>,
    config: &State<ServerConfig>,
) -> PageResponse {
    handlers::upload_resume_handler(form, session, api, config).await
}

#[get("/health")]
pub async fn health(session: OptionalSession) -> &'static str {
    handlers::health_handler(session).await
}

// Error catchers
#[catch(404)]
pub fn not_found(req: &Request<'_>) -> RawHtml<String> {
    info!("No route for {}", req.uri());
    RawHtml(error_page(404, "Page not found."))
}

#[catch(413)]
pub fn payload_too_large(req: &Request<'_>) -> RawHtml<String> {
    warn!("Request body too large for {}", req.uri());
    RawHtml(error_page(413, "File size exceeds the upload limit"))
}

#[catch(422)]
pub fn unprocessable() -> RawHtml<String> {
    RawHtml(error_page(422, "The submitted form is incomplete or invalid."))
}

#[catch(500)]
pub fn internal_error() -> RawHtml<String> {
    error!("Internal server error");
    RawHtml(error_page(500, "Something went wrong. Try again in a few moments."))
}

/// Assemble the application without launching it.
pub fn build_rocket(config: EnvironmentConfig) -> Result<Rocket<Build>> {
    let api = ApiClient::new(config.api_base_url.clone(), config.request_timeout_secs)?;

    let server_config = ServerConfig {
        cookie_max_age_secs: config.cookie_max_age_secs,
        max_upload_bytes: config.max_upload_mib.mebibytes().as_u64(),
    };

    // Rocket's limits sit one MiB above the upload limit so a slightly
    // oversized resume still reaches the handler and gets a flash message.
    let limits = Limits::default()
        .limit("file", (config.max_upload_mib + 1).mebibytes())
        .limit("data-form", (config.max_upload_mib + 2).mebibytes());

    let figment = rocket::Config::figment()
        .merge(("address", config.address.clone()))
        .merge(("port", config.port))
        .merge(("limits", limits));

    Ok(rocket::custom(figment)
        .manage(api)
        .manage(server_config)
        .register("/", catchers![not_found, payload_too_large, unprocessable, internal_error])
        .mount(
            "/",
            routes![
                home,
                signin_form,
                signin,
                signup_form,
                signup,
                logout,
                user_home,
                recruiter_home,
                job_detail,
                apply,
                new_job_form,
                create_job,
                profile,
                update_profile,
                upload_resume,
                health,
            ],
        ))
}

pub async fn start_web_server(config: EnvironmentConfig) -> Result<()> {
    info!("Starting Hire-Archy web server");
    info!("API: {}", config.api_base_url);
    info!("Server: http://{}:{}", config.address, config.port);

    let rocket = build_rocket(config)?;
    if let Err(e) = rocket.launch().await {
        error!("Server stopped with error: {}", e);
        return Err(anyhow::anyhow!("Rocket failed: {}", e));
    }

    Ok(())
}
