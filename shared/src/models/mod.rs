//! Data models
//!
//! Transport-layer shapes exchanged with the hotel management API. The
//! client keeps no authoritative copy: lists are discarded and
//! re-fetched after every mutation. All IDs are `i64`.

pub mod booking;
pub mod guest;
pub mod price;
pub mod room;

// Re-exports
pub use booking::*;
pub use guest::*;
pub use price::*;
pub use room::*;
