pub mod auth_handlers;
pub mod home_handlers;
pub mod job_handlers;
pub mod profile_handlers;

pub use auth_handlers::*;
pub use home_handlers::*;
pub use job_handlers::*;
pub use profile_handlers::*;
