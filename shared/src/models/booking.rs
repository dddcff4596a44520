//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking status values this client writes. The API treats status as
/// an open string set; only the confirm/cancel pair is exposed here,
/// and the transition is one-directional (cancel only).
pub const STATUS_CONFIRMED: &str = "Confirmed";
pub const STATUS_CANCELLED: &str = "Cancelled";

/// Booking entity as returned by the API (denormalized room and
/// main-guest view)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub id: i64,
    pub room_id: i64,
    pub room_number: String,
    pub category: String,
    pub main_guest_id: i64,
    pub main_guest_name: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
    /// Discount percent
    pub discount: i32,
    /// Main guest is always included
    pub guest_ids: Vec<i64>,
}

impl Booking {
    pub fn is_cancelled(&self) -> bool {
        self.status == STATUS_CANCELLED
    }
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingCreate {
    pub room_id: i64,
    pub main_guest_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
    pub discount: i32,
    pub guest_ids: Vec<i64>,
}

/// Status update payload for `PATCH /bookings/{id}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_use_iso_wire_format() {
        let payload = BookingCreate {
            room_id: 3,
            main_guest_id: 1,
            check_in_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            status: STATUS_CONFIRMED.to_string(),
            discount: 0,
            guest_ids: vec![1],
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["check_in_date"], "2024-06-01");
        assert_eq!(json["check_out_date"], "2024-06-05");
        assert_eq!(json["status"], "Confirmed");
    }

    #[test]
    fn cancelled_status_drives_styling() {
        let mut booking = Booking {
            id: 42,
            room_id: 3,
            room_number: "101".to_string(),
            category: "Standard".to_string(),
            main_guest_id: 1,
            main_guest_name: "Ada".to_string(),
            check_in_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            status: STATUS_CONFIRMED.to_string(),
            discount: 0,
            guest_ids: vec![1],
        };
        assert!(!booking.is_cancelled());

        booking.status = STATUS_CANCELLED.to_string();
        assert!(booking.is_cancelled());
    }
}
