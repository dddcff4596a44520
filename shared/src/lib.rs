//! Shared types for the Frontdesk workspace
//!
//! Wire-level entity models and request payloads exchanged with the
//! hotel management API, used by both the client crate and the console.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
