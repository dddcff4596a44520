//! Price Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of week, serialized as the English day name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in week order, for form choice cycling
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| format!("unknown day of week: {s}"))
    }
}

/// Price entity: one entry per (room, day of week) pair, enforced
/// server-side
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    pub id: i64,
    pub room_id: i64,
    pub room_number: String,
    pub day_of_week: DayOfWeek,
    pub price: Decimal,
}

/// Create/set price payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceCreate {
    pub room_id: i64,
    pub day_of_week: DayOfWeek,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_of_week_wire_name_round_trips() {
        let json = serde_json::to_string(&DayOfWeek::Wednesday).unwrap();
        assert_eq!(json, "\"Wednesday\"");

        let parsed: DayOfWeek = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DayOfWeek::Wednesday);
    }

    #[test]
    fn day_of_week_from_str_rejects_unknown() {
        assert_eq!("Friday".parse::<DayOfWeek>(), Ok(DayOfWeek::Friday));
        assert!("friday".parse::<DayOfWeek>().is_err());
    }
}
