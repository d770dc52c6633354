// src/web/tests.rs
use super::build_rocket;
use crate::auth::tests::token_for;
use crate::environment::EnvironmentConfig;

use mockito::{Matcher, Server};
use rocket::http::{ContentType, Cookie, Status};
use rocket::local::asynchronous::{Client, LocalResponse};
use serde_json::json;

const JOB_ID: &str = "6f1c2b7e-4c8a-4c71-9d0e-3a8b2f9d1e55";

fn job_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": "Build things",
        "key_skills": ["Rust"],
        "experience_required": 2,
        "location": "Remote",
        "company_name": "Acme",
        "is_active": true,
        "recruiter_id": "recruiter-uid",
        "job_summary": null
    })
}

async fn client_for(server: &Server) -> Client {
    client_with(EnvironmentConfig {
        api_base_url: server.url(),
        ..EnvironmentConfig::default()
    })
    .await
}

async fn client_with(config: EnvironmentConfig) -> Client {
    Client::tracked(build_rocket(config).unwrap()).await.unwrap()
}

fn session_cookie(role: &str) -> Cookie<'static> {
    Cookie::new("token", token_for(role))
}

fn location(response: &LocalResponse<'_>) -> Option<String> {
    response.headers().get_one("Location").map(str::to_string)
}

fn token_set_cookie(response: &LocalResponse<'_>) -> Option<String> {
    response
        .headers()
        .get("Set-Cookie")
        .find(|c| c.starts_with("token="))
        .map(str::to_string)
}

const SIGNIN_FORM: &str = "email=jane%40example.com&password=hunter22";

#[rocket::async_test]
async fn test_signin_redirects_recruiter_and_sets_cookie() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({
            "email": "jane@example.com",
            "password": "hunter22"
        })))
        .with_status(200)
        .with_body(json!({ "token": token_for("recruiter") }).to_string())
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .post("/signin")
        .header(ContentType::Form)
        .body(SIGNIN_FORM)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(location(&response).as_deref(), Some("/recruiterhome"));
    let cookie = token_set_cookie(&response).unwrap();
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
}

#[rocket::async_test]
async fn test_signin_redirects_candidate_home() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(json!({ "token": token_for("candidate") }).to_string())
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .post("/signin")
        .header(ContentType::Form)
        .body(SIGNIN_FORM)
        .dispatch()
        .await;

    assert_eq!(location(&response).as_deref(), Some("/userhome"));
    assert!(token_set_cookie(&response).is_some());
}

#[rocket::async_test]
async fn test_signin_failure_shows_detail_inline() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_body(r#"{"detail": "Invalid email or password"}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .post("/signin")
        .header(ContentType::Form)
        .body(SIGNIN_FORM)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert!(token_set_cookie(&response).is_none());
    let body = response.into_string().await.unwrap();
    assert!(body.contains("Invalid email or password"));
    assert!(body.contains(r#"value="jane@example.com""#));
}

#[rocket::async_test]
async fn test_signin_with_unknown_role_sets_no_cookie() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(json!({ "token": token_for("admin") }).to_string())
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .post("/signin")
        .header(ContentType::Form)
        .body(SIGNIN_FORM)
        .dispatch()
        .await;

    assert!(token_set_cookie(&response).is_none());
    let body = response.into_string().await.unwrap();
    assert!(body.contains("Unknown role in token"));
}

#[rocket::async_test]
async fn test_signup_then_login_as_candidate() {
    let mut server = Server::new_async().await;
    let signup = server
        .mock("POST", "/auth/signup/candidate")
        .with_status(201)
        .with_body(
            json!({
                "uid": "candidate-uid",
                "email": "jane@example.com",
                "role": "candidate",
                "message": "Candidate created"
            })
            .to_string(),
        )
        .create_async()
        .await;
    let _login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(json!({ "token": token_for("candidate") }).to_string())
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .post("/signup")
        .header(ContentType::Form)
        .body(SIGNIN_FORM)
        .dispatch()
        .await;

    assert_eq!(location(&response).as_deref(), Some("/userhome"));
    assert!(token_set_cookie(&response).is_some());
    signup.assert_async().await;
}

#[rocket::async_test]
async fn test_signup_rejects_unexpected_role() {
    let mut server = Server::new_async().await;
    let _signup = server
        .mock("POST", "/auth/signup/candidate")
        .with_status(201)
        .with_body(r#"{"uid": "u", "email": "jane@example.com", "role": "candidate", "message": "ok"}"#)
        .create_async()
        .await;
    let _login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(json!({ "token": token_for("recruiter") }).to_string())
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .post("/signup")
        .header(ContentType::Form)
        .body(SIGNIN_FORM)
        .dispatch()
        .await;

    assert!(token_set_cookie(&response).is_none());
    assert!(response.into_string().await.unwrap().contains("Unexpected role"));
}

#[rocket::async_test]
async fn test_signup_failure_uses_fallback_message() {
    let mut server = Server::new_async().await;
    let _signup = server
        .mock("POST", "/auth/signup/candidate")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .post("/signup")
        .header(ContentType::Form)
        .body(SIGNIN_FORM)
        .dispatch()
        .await;

    assert!(response.into_string().await.unwrap().contains("Signup failed"));
}

#[rocket::async_test]
async fn test_logout_removes_cookie() {
    let server = Server::new_async().await;
    let client = client_for(&server).await;

    let response = client
        .get("/logout")
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await;

    assert_eq!(location(&response).as_deref(), Some("/"));
    let removal = token_set_cookie(&response).unwrap();
    assert!(removal.contains("Max-Age=0"));
}

#[rocket::async_test]
async fn test_dashboards_require_a_session() {
    let server = Server::new_async().await;
    let client = client_for(&server).await;

    for path in ["/userhome", "/recruiterhome", "/profile"] {
        let response = client.get(path).dispatch().await;
        assert_eq!(response.status(), Status::SeeOther, "{}", path);
        assert_eq!(location(&response).as_deref(), Some("/signin"));
    }
}

#[rocket::async_test]
async fn test_user_home_renders_empty_lists_when_api_fails() {
    let mut server = Server::new_async().await;
    let _jobs = server
        .mock("GET", "/jobs")
        .with_status(500)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .get("/userhome")
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().await.unwrap();
    assert!(body.contains("All Jobs"));
    assert!(body.contains("AI Recommended Jobs"));
    assert!(body.contains("Please complete your profile"));
    assert!(!body.contains("View Details"));
}

#[rocket::async_test]
async fn test_user_home_lists_jobs_and_recommendations() {
    let mut server = Server::new_async().await;
    let _jobs = server
        .mock("GET", "/jobs")
        .with_status(200)
        .with_body(json!([job_json(JOB_ID, "Backend Engineer")]).to_string())
        .create_async()
        .await;
    let _recs = server
        .mock("GET", "/match-scores/recommendations/candidate-uid")
        .with_status(200)
        .with_body(json!([{ "job_id": JOB_ID, "score": 0.82 }]).to_string())
        .create_async()
        .await;
    let _job = server
        .mock("GET", format!("/jobs/{}", JOB_ID).as_str())
        .with_status(200)
        .with_body(job_json(JOB_ID, "Backend Engineer").to_string())
        .create_async()
        .await;

    let client = client_for(&server).await;
    let body = client
        .get("/userhome")
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();

    assert_eq!(body.matches("View Details").count(), 2);
    assert!(body.contains("card highlighted"));
    assert!(body.contains("82% Match"));
    assert!(body.contains(r#"href="/profile""#));
}

#[rocket::async_test]
async fn test_recruiter_home_searches_only_on_request() {
    let mut server = Server::new_async().await;
    let _jobs = server
        .mock("GET", "/jobs/recruiter")
        .with_status(200)
        .with_body(json!([job_json(JOB_ID, "Data Engineer")]).to_string())
        .create_async()
        .await;
    let search = server
        .mock("GET", "/candidates/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("skills".into(), "Rust".into()),
            Matcher::UrlEncoded("min_experience".into(), "3".into()),
        ]))
        .with_status(200)
        .with_body(json!([{ "full_name": "Ada Lovelace", "email": "ada@example.com" }]).to_string())
        .create_async()
        .await;

    let client = client_for(&server).await;

    let body = client
        .get("/recruiterhome")
        .cookie(session_cookie("recruiter"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Active Jobs"));
    assert!(body.contains("Data Engineer"));
    assert!(!body.contains("Results:"));

    let body = client
        .get("/recruiterhome?skills=Rust&skills=&location=&min_experience=3&search=1")
        .cookie(session_cookie("recruiter"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Results:"));
    assert!(body.contains("Ada Lovelace"));
    search.assert_async().await;
}

#[rocket::async_test]
async fn test_job_page_for_recruiter_lists_ranked_candidates() {
    let mut server = Server::new_async().await;
    let _job = server
        .mock("GET", format!("/jobs/{}", JOB_ID).as_str())
        .with_status(200)
        .with_body(job_json(JOB_ID, "Data Engineer").to_string())
        .create_async()
        .await;
    let _ranked = server
        .mock("GET", "/ranked-candidates")
        .match_query(Matcher::UrlEncoded("job_id".into(), JOB_ID.into()))
        .with_status(200)
        .with_body(
            json!({ "candidates": [{ "full_name": "Grace Hopper", "score": 0.77 }] }).to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server).await;
    let body = client
        .get(format!("/jobs/{}", JOB_ID))
        .cookie(session_cookie("recruiter"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();

    assert!(body.contains("Candidates applied to this job"));
    assert!(body.contains("Grace Hopper"));
    assert!(body.contains("77% Match"));
    assert!(body.contains(r#"href="/newjob""#));
    assert!(!body.contains("Apply to this Job"));
}

#[rocket::async_test]
async fn test_job_page_not_found() {
    let mut server = Server::new_async().await;
    let _job = server
        .mock("GET", format!("/jobs/{}", JOB_ID).as_str())
        .with_status(404)
        .with_body(r#"{"detail": "Job not found"}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;

    let response = client.get(format!("/jobs/{}", JOB_ID)).dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    assert!(response
        .into_string()
        .await
        .unwrap()
        .contains("Job not found or error fetching data."));

    let response = client.get("/jobs/not-a-uuid").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_apply_flashes_outcome_on_job_page() {
    let mut server = Server::new_async().await;
    let _job = server
        .mock("GET", format!("/jobs/{}", JOB_ID).as_str())
        .with_status(200)
        .with_body(job_json(JOB_ID, "Data Engineer").to_string())
        .create_async()
        .await;
    let apply = server
        .mock("POST", format!("/jobs/{}/apply", JOB_ID).as_str())
        .match_header("authorization", Matcher::Regex("^Bearer .+".into()))
        .with_status(200)
        .with_body(r#"{"message": "Applied"}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .post(format!("/jobs/{}/apply", JOB_ID))
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await;
    assert_eq!(
        location(&response),
        Some(format!("/jobs/{}", JOB_ID))
    );

    let body = client
        .get(format!("/jobs/{}", JOB_ID))
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Applied successfully!"));
    assert!(!body.contains("Apply to this Job"));
    apply.assert_async().await;
}

#[rocket::async_test]
async fn test_apply_failure_keeps_button() {
    let mut server = Server::new_async().await;
    let _job = server
        .mock("GET", format!("/jobs/{}", JOB_ID).as_str())
        .with_status(200)
        .with_body(job_json(JOB_ID, "Data Engineer").to_string())
        .create_async()
        .await;
    let _apply = server
        .mock("POST", format!("/jobs/{}/apply", JOB_ID).as_str())
        .with_status(500)
        .create_async()
        .await;

    let client = client_for(&server).await;
    client
        .post(format!("/jobs/{}/apply", JOB_ID))
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await;

    let body = client
        .get(format!("/jobs/{}", JOB_ID))
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Apply to this Job"));
    assert!(body.contains("Failed to apply."));
}

#[rocket::async_test]
async fn test_apply_without_session_flashes_failure() {
    let mut server = Server::new_async().await;
    let _job = server
        .mock("GET", format!("/jobs/{}", JOB_ID).as_str())
        .with_status(200)
        .with_body(job_json(JOB_ID, "Data Engineer").to_string())
        .create_async()
        .await;
    let apply = server
        .mock("POST", format!("/jobs/{}/apply", JOB_ID).as_str())
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .post(format!("/jobs/{}/apply", JOB_ID))
        .dispatch()
        .await;
    assert_eq!(
        location(&response),
        Some(format!("/jobs/{}", JOB_ID))
    );

    let body = client
        .get(format!("/jobs/{}", JOB_ID))
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Failed to apply."));
    assert!(body.contains("Apply to this Job"));
    apply.assert_async().await;
}

#[rocket::async_test]
async fn test_new_job_is_recruiter_only() {
    let server = Server::new_async().await;
    let client = client_for(&server).await;

    let response = client
        .get("/newjob")
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Forbidden);
    assert!(response
        .into_string()
        .await
        .unwrap()
        .contains("Unauthorized Access"));

    let response = client.get("/newjob").dispatch().await;
    assert_eq!(response.status(), Status::Forbidden);

    let response = client
        .get("/newjob")
        .cookie(session_cookie("recruiter"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    assert!(response.into_string().await.unwrap().contains("Post a New Job"));
}

const NEW_JOB_FORM: &str = "title=Data+Engineer&description=Pipelines&key_skills=Rust%2C+SQL%2C&experience_required=3&location=Pune&company_name=Acme";

#[rocket::async_test]
async fn test_create_job_sends_parsed_fields() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/jobs")
        .match_body(Matcher::Json(json!({
            "title": "Data Engineer",
            "description": "Pipelines",
            "key_skills": ["Rust", "SQL"],
            "experience_required": 3,
            "location": "Pune",
            "company_name": "Acme"
        })))
        .with_status(201)
        .with_body(job_json(JOB_ID, "Data Engineer").to_string())
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .post("/newjob")
        .header(ContentType::Form)
        .cookie(session_cookie("recruiter"))
        .body(NEW_JOB_FORM)
        .dispatch()
        .await;

    assert_eq!(location(&response).as_deref(), Some("/recruiterhome"));
    create.assert_async().await;
}

#[rocket::async_test]
async fn test_create_job_failures_render_inline() {
    let mut server = Server::new_async().await;
    let _create = server
        .mock("POST", "/jobs")
        .with_status(400)
        .with_body(r#"{"detail": "Title already used"}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;

    let body = client
        .post("/newjob")
        .header(ContentType::Form)
        .cookie(session_cookie("recruiter"))
        .body(NEW_JOB_FORM)
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Title already used"));
    assert!(body.contains(r#"value="Data Engineer""#));

    let body = client
        .post("/newjob")
        .header(ContentType::Form)
        .cookie(session_cookie("recruiter"))
        .body(NEW_JOB_FORM.replace("experience_required=3", "experience_required=three"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Experience Required must be a whole number of years"));

    let body = client
        .post("/newjob")
        .header(ContentType::Form)
        .body(NEW_JOB_FORM)
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Not authenticated"));
}

#[rocket::async_test]
async fn test_profile_update_flashes_result() {
    let mut server = Server::new_async().await;
    let update = server
        .mock("PUT", "/users/me")
        .match_body(Matcher::Json(json!({
            "full_name": "Jane Doe",
            "phone_number": "",
            "location": "Pune",
            "years_of_experience": 0,
            "key_skills": ["Rust", "SQL"]
        })))
        .with_status(200)
        .with_body(r#"{"full_name": "Jane Doe"}"#)
        .create_async()
        .await;
    let _me = server
        .mock("GET", "/users/me")
        .with_status(200)
        .with_body(r#"{"uid": "candidate-uid", "email": "jane@example.com"}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .post("/profile")
        .header(ContentType::Form)
        .cookie(session_cookie("candidate"))
        .body("full_name=+Jane+Doe+&phone_number=&location=Pune&years_of_experience=&key_skills=Rust%2C+SQL")
        .dispatch()
        .await;
    assert_eq!(location(&response).as_deref(), Some("/profile"));

    let body = client
        .get("/profile")
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Profile updated successfully!"));
    assert!(body.contains("jane@example.com"));
    update.assert_async().await;
}

#[rocket::async_test]
async fn test_profile_update_failure_flashes_detail_or_fallback() {
    let mut server = Server::new_async().await;
    let rejected = server
        .mock("PUT", "/users/me")
        .with_status(400)
        .with_body(r#"{"detail": "Invalid phone number"}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let form = "full_name=Jane&phone_number=abc&location=Pune&years_of_experience=2&key_skills=Rust";
    let response = client
        .post("/profile")
        .header(ContentType::Form)
        .cookie(session_cookie("candidate"))
        .body(form)
        .dispatch()
        .await;
    assert_eq!(location(&response).as_deref(), Some("/profile"));

    let body = client
        .get("/profile")
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Invalid phone number"));
    assert!(!body.contains("Profile updated successfully!"));
    rejected.assert_async().await;
    rejected.remove_async().await;

    let _broken = server
        .mock("PUT", "/users/me")
        .with_status(500)
        .create_async()
        .await;
    client
        .post("/profile")
        .header(ContentType::Form)
        .cookie(session_cookie("candidate"))
        .body(form)
        .dispatch()
        .await;

    let body = client
        .get("/profile")
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Failed to update profile"));
}

#[rocket::async_test]
async fn test_resume_upload_is_forwarded() {
    let mut server = Server::new_async().await;
    let upload = server
        .mock("POST", "/resume")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".into()),
        )
        .match_body(Matcher::Regex("application/pdf".into()))
        .with_status(200)
        .with_body(r#"{"message": "Resume processed"}"#)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let body = concat!(
        "--X-BOUNDARY\r\n",
        "Content-Disposition: form-data; name=\"file\"; filename=\"cv.pdf\"\r\n",
        "Content-Type: application/octet-stream\r\n",
        "\r\n",
        "%PDF-1.4 resume\r\n",
        "--X-BOUNDARY--\r\n",
    );
    let response = client
        .post("/profile/resume")
        .header(ContentType::new("multipart", "form-data").with_params(("boundary", "X-BOUNDARY")))
        .cookie(session_cookie("candidate"))
        .body(body)
        .dispatch()
        .await;

    assert_eq!(location(&response).as_deref(), Some("/userhome"));
    upload.assert_async().await;
}

fn multipart_file(file_name: &str, content_type: &str, content: &str) -> String {
    format!(
        "--X-BOUNDARY\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n{}\r\n--X-BOUNDARY--\r\n",
        file_name, content_type, content
    )
}

fn multipart_header() -> ContentType {
    ContentType::new("multipart", "form-data").with_params(("boundary", "X-BOUNDARY"))
}

#[rocket::async_test]
async fn test_resume_upload_rejects_unsupported_type() {
    let mut server = Server::new_async().await;
    let upload = server
        .mock("POST", "/resume")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server).await;
    let response = client
        .post("/profile/resume")
        .header(multipart_header())
        .cookie(session_cookie("candidate"))
        .body(multipart_file("notes.txt", "text/plain", "just notes"))
        .dispatch()
        .await;
    assert_eq!(location(&response).as_deref(), Some("/profile"));

    let body = client
        .get("/profile")
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("Only PDF and Word documents (.pdf, .doc, .docx) are supported"));
    upload.assert_async().await;
}

#[rocket::async_test]
async fn test_resume_upload_over_limit_flashes_on_profile() {
    let mut server = Server::new_async().await;
    let upload = server
        .mock("POST", "/resume")
        .expect(0)
        .create_async()
        .await;

    let client = client_with(EnvironmentConfig {
        api_base_url: server.url(),
        max_upload_mib: 1,
        ..EnvironmentConfig::default()
    })
    .await;
    let content = "a".repeat(1024 * 1024 + 10);
    let response = client
        .post("/profile/resume")
        .header(multipart_header())
        .cookie(session_cookie("candidate"))
        .body(multipart_file("cv.pdf", "application/pdf", &content))
        .dispatch()
        .await;
    assert_eq!(location(&response).as_deref(), Some("/profile"));

    let body = client
        .get("/profile")
        .cookie(session_cookie("candidate"))
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();
    assert!(body.contains("File size exceeds the upload limit"));
    upload.assert_async().await;
}

#[rocket::async_test]
async fn test_resume_upload_far_over_limit_renders_error_page() {
    let server = Server::new_async().await;
    let client = client_with(EnvironmentConfig {
        api_base_url: server.url(),
        max_upload_mib: 1,
        ..EnvironmentConfig::default()
    })
    .await;

    let content = "a".repeat(3 * 1024 * 1024);
    let response = client
        .post("/profile/resume")
        .header(multipart_header())
        .cookie(session_cookie("candidate"))
        .body(multipart_file("cv.pdf", "application/pdf", &content))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::PayloadTooLarge);
    assert!(response
        .into_string()
        .await
        .unwrap()
        .contains("File size exceeds the upload limit"));
}

#[rocket::async_test]
async fn test_health_and_missing_page() {
    let server = Server::new_async().await;
    let client = client_for(&server).await;

    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.as_deref(), Some("OK"));

    let response = client.get("/nowhere").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    assert!(response.into_string().await.unwrap().contains("Page not found."));
}
