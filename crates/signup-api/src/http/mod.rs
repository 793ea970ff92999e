//! HTTP interface module.
//!
//! Provides REST endpoints for listing activities and managing
//! participants, plus the bundled UI and health checks.

pub mod handlers;
pub mod routes;

// Internal modules (not publicly exported)
pub(crate) mod assets;
pub(crate) mod monitoring;
