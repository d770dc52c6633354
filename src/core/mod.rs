// src/core/mod.rs
//! Services shared by the page handlers

pub mod api_client;
pub mod error;
pub mod fail_soft;

pub use api_client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use fail_soft::FailSoft;
