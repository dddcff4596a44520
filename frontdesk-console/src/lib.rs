//! Frontdesk Console - terminal admin console for the hotel API
//!
//! Four sections (guests, rooms, bookings, prices) over a typed HTTP
//! client. Every list is re-fetched after the mutation that touches
//! it; nothing is cached across section switches.

pub mod app;
pub mod config;
pub mod draw;
pub mod forms;
pub mod notify;
pub mod tasks;
pub mod view;
