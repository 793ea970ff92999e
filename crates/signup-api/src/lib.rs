//! # Signup API
//!
//! HTTP interface for the activity signup service.
//!
//! ## Routes
//!
//! ```text
//! GET    /                                    - Redirect to the bundled UI
//! GET    /static/{*path}                      - Embedded UI assets
//! GET    /activities                          - List all activities
//! POST   /activities/{activity}/signup        - Sign up (?email=)
//! DELETE /activities/{activity}/participants  - Unregister (?email=)
//! GET    /health                              - Health check
//! GET    /livez                               - Liveness probe
//! ```
//!
//! Handlers are a thin layer over [`signup_core::ActivityRegistry`]; registry
//! errors map to status codes in [`ApiError`].

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::handlers::{MessageResponse, ParticipantQuery};
pub use http::routes::create_router;
pub use server::{shutdown_signal, ApiServer};
pub use state::AppState;
