//! Room Model

use serde::{Deserialize, Serialize};

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub category: String,
    pub capacity: i32,
    pub has_child_bed: bool,
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomCreate {
    pub room_number: String,
    pub category: String,
    pub capacity: i32,
    pub has_child_bed: bool,
}
