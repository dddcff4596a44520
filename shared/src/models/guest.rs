//! Guest Model

use serde::{Deserialize, Serialize};

/// Guest entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    /// Natural lookup key for guest search
    pub phone: String,
    pub email: Option<String>,
    /// Passport series/number are co-present or both absent
    pub passport_series: Option<String>,
    pub passport_number: Option<String>,
}

/// Create guest payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestCreate {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub passport_series: Option<String>,
    pub passport_number: Option<String>,
}
