//! Server-rendered web front end for the Hire-Archy job-matching platform.
//! Pages are rendered on the server and every piece of data comes from the
//! remote job-matching API.

pub mod auth;
pub mod core;
pub mod environment;
pub mod types;
pub mod views;
pub mod web;

pub use environment::EnvironmentConfig;
pub use web::{build_rocket, start_web_server};
