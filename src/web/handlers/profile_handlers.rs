// src/web/handlers/profile_handlers.rs
use crate::auth::OptionalSession;
use crate::core::{ApiClient, FailSoft};
use crate::types::request::{accepted_resume_mime, resume_extension, resume_mime};
use crate::types::ResumeUpload;
use crate::views::pages::{profile_page, Feedback};
use crate::web::types::{PageResponse, ProfileForm, ResumeForm, ServerConfig};

use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::State;
use tokio::io::AsyncReadExt;
use tracing::{error, info, warn};

const UPLOAD_FAILED: &str = "Failed to upload resume";

pub async fn profile_handler(
    session: OptionalSession,
    flash: Option<FlashMessage<'_>>,
    api: &State<ApiClient>,
) -> PageResponse {
    let Some(session) = session.session else {
        return PageResponse::redirect("/signin");
    };

    let email = api
        .current_user(session.token())
        .await
        .or_none("current user")
        .and_then(|user| user.email);
    let feedback = flash.map(|f| Feedback::new(f.kind(), f.message()));

    PageResponse::html(profile_page(email.as_deref(), feedback.as_ref()))
}

pub async fn update_profile_handler(
    form: Form<ProfileForm>,
    session: OptionalSession,
    api: &State<ApiClient>,
) -> PageResponse {
    let Some(session) = session.session else {
        return PageResponse::redirect("/signin");
    };

    let update = form.update();
    let back = Redirect::to("/profile");

    match api.update_profile(session.token(), &update).await {
        Ok(_) => {
            info!("Profile updated");
            PageResponse::Flash(Flash::success(back, "Profile updated successfully!"))
        }
        Err(e) => {
            error!("Profile update failed: {}", e);
            PageResponse::Flash(Flash::error(back, e.message_or("Failed to update profile")))
        }
    }
}

/// Mime type of an uploaded resume: the browser's when it is an accepted
/// type, otherwise derived from the file name.
fn upload_mime(file: &TempFile<'_>, raw_name: Option<&str>) -> Option<&'static str> {
    file.content_type()
        .and_then(|ct| accepted_resume_mime(&format!("{}/{}", ct.top(), ct.sub())))
        .or_else(|| raw_name.and_then(resume_mime))
}

async fn read_upload(file: &TempFile<'_>) -> std::io::Result<Vec<u8>> {
    let reader = file.open().await?;
    tokio::pin!(reader);
    let mut bytes = Vec::with_capacity(file.len() as usize);
    reader.read_to_end(&mut bytes).await?;
    Ok(bytes)
}

pub async fn upload_resume_handler(
    form: Form<ResumeForm<'_>>,
    session: OptionalSession,
    api: &State<ApiClient>,
    config: &State<ServerConfig>,
) -> PageResponse {
    let Some(session) = session.session else {
        return PageResponse::redirect("/signin");
    };
    let back = || Redirect::to("/profile");
    let file = &form.file;

    // The raw name is only used for its extension; the sanitized one is sent on.
    let raw_name = file
        .raw_name()
        .map(|n| n.dangerous_unsafe_unsanitized_raw().as_str());
    let Some(mime) = upload_mime(file, raw_name) else {
        warn!("Rejected resume upload {:?}", file.name());
        return PageResponse::Flash(Flash::error(
            back(),
            "Only PDF and Word documents (.pdf, .doc, .docx) are supported",
        ));
    };

    if file.len() > config.max_upload_bytes {
        return PageResponse::Flash(Flash::error(back(), "File size exceeds the upload limit"));
    }

    let bytes = match read_upload(file).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read uploaded resume: {}", e);
            return PageResponse::Flash(Flash::error(back(), UPLOAD_FAILED));
        }
    };

    let file_name = format!(
        "{}.{}",
        file.name().unwrap_or("resume"),
        resume_extension(mime).unwrap_or("pdf")
    );
    let upload = ResumeUpload::new(file_name, mime.to_string(), bytes);

    match api.upload_resume(session.token(), upload).await {
        Ok(_) => {
            info!("Resume uploaded");
            PageResponse::redirect("/userhome")
        }
        Err(e) => {
            error!("Resume upload failed: {}", e);
            PageResponse::Flash(Flash::error(back(), e.message_or(UPLOAD_FAILED)))
        }
    }
}
