// src/core/api_client.rs
//! HTTP client for the job-matching API - one method per endpoint

use anyhow::Context;
use futures::future::try_join_all;
use reqwest::multipart::{Form, Part};
use reqwest::{header, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, trace};
use uuid::Uuid;

use crate::auth::SessionToken;
use crate::core::error::{ApiError, ApiResult};
use crate::types::{
    ApiErrorBody, Candidate, CandidateSearch, Credentials, Job, JobRecommendation, ListedJob,
    LoginResponse, NewJob, ProfileUpdate, RankedCandidates, ResumeUpload, SignupResponse,
    UserInfo,
};

const SIGNUP_CANDIDATE_ENDPOINT: &str = "/auth/signup/candidate";
const LOGIN_ENDPOINT: &str = "/auth/login";
const JOBS_ENDPOINT: &str = "/jobs";
const RECRUITER_JOBS_ENDPOINT: &str = "/jobs/recruiter";
const CANDIDATES_ENDPOINT: &str = "/candidates/";
const RANKED_CANDIDATES_ENDPOINT: &str = "/ranked-candidates";
const RECOMMENDATIONS_ENDPOINT: &str = "/match-scores/recommendations";
const CURRENT_USER_ENDPOINT: &str = "/users/me";
const RESUME_ENDPOINT: &str = "/resume";

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn get(&self, endpoint: &str, token: Option<&SessionToken>) -> RequestBuilder {
        Self::authorize(self.client.get(self.url(endpoint)), token)
    }

    fn post(&self, endpoint: &str, token: Option<&SessionToken>) -> RequestBuilder {
        Self::authorize(self.client.post(self.url(endpoint)), token)
    }

    fn authorize(request: RequestBuilder, token: Option<&SessionToken>) -> RequestBuilder {
        let request = request.header(header::ACCEPT, "application/json");
        match token {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }

    // ===== Authentication =====

    pub async fn signup_candidate(&self, credentials: &Credentials) -> ApiResult<SignupResponse> {
        info!("Signing up candidate {}", credentials.email);
        let request = self.post(SIGNUP_CANDIDATE_ENDPOINT, None).json(credentials);
        Self::send_json(request, "candidate signup").await
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<SessionToken> {
        info!("Logging in {}", credentials.email);
        let request = self.post(LOGIN_ENDPOINT, None).json(credentials);
        let response: LoginResponse = Self::send_json(request, "login").await?;

        response
            .token
            .filter(|t| !t.is_empty())
            .map(SessionToken::new)
            .ok_or(ApiError::MissingToken)
    }

    pub async fn current_user(&self, token: &SessionToken) -> ApiResult<UserInfo> {
        Self::send_json(self.get(CURRENT_USER_ENDPOINT, Some(token)), "current user").await
    }

    // ===== Jobs =====

    pub async fn list_jobs(&self) -> ApiResult<Vec<Job>> {
        Self::send_json(self.get(JOBS_ENDPOINT, None), "jobs").await
    }

    pub async fn recruiter_jobs(&self, token: &SessionToken) -> ApiResult<Vec<Job>> {
        Self::send_json(self.get(RECRUITER_JOBS_ENDPOINT, Some(token)), "recruiter jobs").await
    }

    pub async fn job(&self, job_id: Uuid, token: Option<&SessionToken>) -> ApiResult<Job> {
        let endpoint = format!("{}/{}", JOBS_ENDPOINT, job_id);
        Self::send_json(self.get(&endpoint, token), "job detail").await
    }

    pub async fn create_job(&self, token: &SessionToken, new_job: &NewJob) -> ApiResult<Job> {
        info!("Creating job '{}' at {}", new_job.title, new_job.company_name);
        let request = self.post(JOBS_ENDPOINT, Some(token)).json(new_job);
        let job: Job = Self::send_json(request, "job creation").await?;
        info!("Job created: {}", job.id);
        Ok(job)
    }

    pub async fn apply_to_job(&self, token: &SessionToken, job_id: Uuid) -> ApiResult<()> {
        let endpoint = format!("{}/{}/apply", JOBS_ENDPOINT, job_id);
        let response = self.post(&endpoint, Some(token)).send().await?;
        let response = Self::check_status(response, "job application").await?;

        let body = response.text().await.unwrap_or_default();
        info!("Application response for job {}: {}", job_id, body);
        Ok(())
    }

    // ===== Candidates =====

    pub async fn search_candidates(
        &self,
        search: &CandidateSearch,
        token: Option<&SessionToken>,
    ) -> ApiResult<Vec<Candidate>> {
        let request = self.get(CANDIDATES_ENDPOINT, token).query(&search.query_pairs());
        Self::send_json(request, "candidates").await
    }

    pub async fn ranked_candidates(
        &self,
        token: &SessionToken,
        job_id: Uuid,
    ) -> ApiResult<RankedCandidates> {
        let request = self
            .get(RANKED_CANDIDATES_ENDPOINT, Some(token))
            .query(&[("job_id", job_id.to_string())]);
        Self::send_json(request, "ranked candidates").await
    }

    // ===== Recommendations =====

    pub async fn recommendations(
        &self,
        token: &SessionToken,
        user_id: &str,
    ) -> ApiResult<Vec<JobRecommendation>> {
        let endpoint = format!("{}/{}", RECOMMENDATIONS_ENDPOINT, user_id);
        Self::send_json(self.get(&endpoint, Some(token)), "recommendations").await
    }

    /// Recommendations resolved to full jobs. Details are fetched concurrently
    /// and the whole call fails if any single job fails.
    pub async fn recommended_jobs(
        &self,
        token: &SessionToken,
        user_id: &str,
    ) -> ApiResult<Vec<ListedJob>> {
        let recommendations = self.recommendations(token, user_id).await?;
        debug!("Resolving {} recommended jobs", recommendations.len());

        let details = recommendations.iter().map(|rec| async move {
            let job = self.job(rec.job_id, Some(token)).await?;
            Ok::<_, ApiError>(ListedJob::recommended(job, rec.score))
        });

        try_join_all(details).await
    }

    // ===== Profile =====

    pub async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> ApiResult<serde_json::Value> {
        let request = Self::authorize(
            self.client.put(self.url(CURRENT_USER_ENDPOINT)),
            Some(token),
        )
        .json(update);
        Self::send_json(request, "profile update").await
    }

    pub async fn upload_resume(
        &self,
        token: &SessionToken,
        upload: ResumeUpload,
    ) -> ApiResult<serde_json::Value> {
        info!(
            "Uploading resume {} ({} bytes)",
            upload.file_name,
            upload.bytes.len()
        );

        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)?;
        let form = Form::new().part("file", part);

        let request = self.post(RESUME_ENDPOINT, Some(token)).multipart(form);
        Self::send_json(request, "resume upload").await
    }

    // ===== Plumbing =====

    async fn send_json<R>(request: RequestBuilder, what: &str) -> ApiResult<R>
    where
        R: DeserializeOwned,
    {
        let response = request.send().await?;
        let response = Self::check_status(response, what).await?;

        let body = response.text().await?;
        trace!("{} response: {}", what, body);
        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse {} response: {}", what, e);
            ApiError::Decode(e.to_string())
        })
    }

    /// Turn any non-2xx response into `ApiError::Status`, keeping `detail`.
    async fn check_status(response: Response, what: &str) -> ApiResult<Response> {
        let status = response.status();
        trace!("{} response status: {}", what, status);

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_default();
        error!("{} failed with status {}: {}", what, status, error_text);

        let detail = serde_json::from_str::<ApiErrorBody>(&error_text)
            .ok()
            .and_then(|body| body.detail_text());

        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }
}
