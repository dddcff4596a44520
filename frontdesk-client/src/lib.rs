//! Frontdesk Client - HTTP client for the hotel management API
//!
//! Provides typed REST calls for guests, rooms, bookings and daily
//! room prices.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
