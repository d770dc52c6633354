// src/auth.rs
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Cookie holding the bearer token issued by the API.
pub const TOKEN_COOKIE: &str = "token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Recruiter,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "candidate" => Some(Role::Candidate),
            "recruiter" => Some(Role::Recruiter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Recruiter => "recruiter",
        }
    }

    /// Landing page after sign-in.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Candidate => "/userhome",
            Role::Recruiter => "/recruiterhome",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims read from the token payload. Firebase ID tokens carry the uid in
/// both `user_id` and `sub`; `role` is a custom claim set by the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Read the claims without checking signature, expiry or audience. The API
/// verifies every token it receives; here the claims only drive rendering.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    match decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            debug!("Could not decode session token: {}", e);
            None
        }
    }
}

pub fn decode_role(token: &str) -> Option<Role> {
    decode_claims(token)?.role.as_deref().and_then(Role::parse)
}

pub fn decode_user_id(token: &str) -> Option<String> {
    let claims = decode_claims(token)?;
    claims.user_id.or(claims.sub)
}

/// Opaque bearer token as stored in the cookie.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Token present on the current request, with its decoded role.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: SessionToken,
    pub role: Option<Role>,
}

impl Session {
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = SessionToken::new(token);
        let role = decode_role(token.as_str());
        Self { token, role }
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_recruiter(&self) -> bool {
        self.role == Some(Role::Recruiter)
    }

    /// Path segment for the recommendations endpoint. The API resolves the
    /// user from the bearer token, so any placeholder works when no uid claim exists.
    pub fn user_id(&self) -> String {
        decode_user_id(self.token.as_str()).unwrap_or_else(|| "me".to_string())
    }
}

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    EmptyToken,
}

impl AuthError {
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "Sign in to continue",
            AuthError::EmptyToken => "Session cookie is empty",
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = AuthError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match req.cookies().get(TOKEN_COOKIE) {
            Some(cookie) if !cookie.value().trim().is_empty() => {
                let session = Session::from_token(cookie.value());
                if session.role.is_none() {
                    warn!("Session token has no recognised role claim");
                }
                Outcome::Success(session)
            }
            Some(_) => Outcome::Error((Status::Unauthorized, AuthError::EmptyToken)),
            None => Outcome::Error((Status::Unauthorized, AuthError::MissingToken)),
        }
    }
}

/// Guard that never fails, for pages that render for everyone.
pub struct OptionalSession {
    pub session: Option<Session>,
}

impl OptionalSession {
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().and_then(|s| s.role)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for OptionalSession {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match Session::from_request(req).await {
            Outcome::Success(session) => Outcome::Success(OptionalSession {
                session: Some(session),
            }),
            Outcome::Error((_, e)) => {
                debug!("No session on request: {}", e.message());
                Outcome::Success(OptionalSession { session: None })
            }
            Outcome::Forward(_) => Outcome::Success(OptionalSession { session: None }),
        }
    }
}
