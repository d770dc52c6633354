// src/web/handlers/auth_handlers.rs
use crate::auth::{decode_role, Role, SessionToken, TOKEN_COOKIE};
use crate::core::{ApiClient, ApiError};
use crate::views::pages::{signin_page, signup_page};
use crate::web::types::{CredentialsForm, PageResponse, ServerConfig};

use rocket::form::Form;
use rocket::http::{Cookie, CookieJar, SameSite};
use rocket::time::Duration;
use rocket::State;
use tracing::{error, info, warn};

fn set_session_cookie(cookies: &CookieJar<'_>, token: &SessionToken, config: &ServerConfig) {
    let cookie = Cookie::build((TOKEN_COOKIE, token.as_str().to_string()))
        .path("/")
        .max_age(Duration::seconds(config.cookie_max_age_secs))
        .same_site(SameSite::Lax)
        .http_only(true);
    cookies.add(cookie);
}

pub async fn signin_form_handler() -> PageResponse {
    PageResponse::html(signin_page("", None))
}

pub async fn signup_form_handler() -> PageResponse {
    PageResponse::html(signup_page("", None))
}

pub async fn signin_handler(
    form: Form<CredentialsForm>,
    api: &State<ApiClient>,
    config: &State<ServerConfig>,
    cookies: &CookieJar<'_>,
) -> PageResponse {
    let credentials = form.credentials();

    let token = match api.login(&credentials).await {
        Ok(token) => token,
        Err(e) => {
            error!("Login failed for {}: {}", credentials.email, e);
            let message = e.message_or("Login failed");
            return PageResponse::html(signin_page(&credentials.email, Some(&message)));
        }
    };

    match decode_role(token.as_str()) {
        Some(role) => {
            set_session_cookie(cookies, &token, config);
            info!("{} signed in as {}", credentials.email, role);
            PageResponse::redirect(role.home_path())
        }
        None => {
            warn!("Token for {} carries no known role", credentials.email);
            PageResponse::html(signin_page(
                &credentials.email,
                Some("Unknown role in token"),
            ))
        }
    }
}

/// Sign up as a candidate, then sign in with the same credentials.
pub async fn signup_handler(
    form: Form<CredentialsForm>,
    api: &State<ApiClient>,
    config: &State<ServerConfig>,
    cookies: &CookieJar<'_>,
) -> PageResponse {
    let credentials = form.credentials();
    let failed =
        |message: &str| PageResponse::html(signup_page(&credentials.email, Some(message)));

    match api.signup_candidate(&credentials).await {
        Ok(created) => info!("Signed up {} ({})", created.email, created.uid),
        Err(e) => {
            error!("Signup failed for {}: {}", credentials.email, e);
            return failed(e.message_or("Signup failed").as_str());
        }
    }

    let token = match api.login(&credentials).await {
        Ok(token) => token,
        Err(ApiError::MissingToken) => {
            error!("No token received after signup for {}", credentials.email);
            return failed("No token received after signup");
        }
        Err(e) => {
            error!("Login after signup failed for {}: {}", credentials.email, e);
            return failed(e.message_or("Login after signup failed").as_str());
        }
    };

    match decode_role(token.as_str()) {
        Some(Role::Candidate) => {
            set_session_cookie(cookies, &token, config);
            PageResponse::redirect(Role::Candidate.home_path())
        }
        other => {
            warn!(
                "Unexpected role {:?} after signup for {}",
                other, credentials.email
            );
            failed("Unexpected role")
        }
    }
}

pub async fn logout_handler(cookies: &CookieJar<'_>) -> PageResponse {
    cookies.remove(Cookie::from(TOKEN_COOKIE));
    info!("Session cookie removed");
    PageResponse::redirect("/")
}
