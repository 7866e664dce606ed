//! HTTP layer for the email triage service
//!
//! One form page, one classification endpoint behind it, a download route
//! for stored uploads, and a health probe.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
