//! # Signup Core
//!
//! In-memory activity registry for the signup service.
//!
//! ## Components
//!
//! - [`Activity`] - A single activity record (description, schedule, capacity, participants)
//! - [`ActivityCatalog`] - Ordered snapshot of every activity, serialized as a JSON object
//! - [`ActivityRegistry`] - The registry enforcing participant uniqueness per activity
//!
//! The registry is constructed explicitly and shared by reference; there is no
//! process-wide activity table.

pub mod activity;
pub mod error;
pub mod registry;
pub mod seed;

pub use activity::{Activity, ActivityCatalog};
pub use error::{ErrorKind, RegistryError};
pub use registry::ActivityRegistry;
pub use seed::default_activities;
