//! Form fields and payload coercion
//!
//! Text fields wrap `tui_input::Input`. Submission coerces the raw
//! values into the typed request payloads; the first local validation
//! failure is reported as a banner instead of issuing a network call.
//! On a failed submission the field contents stay intact for
//! correction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{
    BookingCreate, DayOfWeek, GuestCreate, PriceCreate, RoomCreate, STATUS_CONFIRMED,
};
use tui_input::Input;

/// A labelled text field
#[derive(Debug, Default)]
pub struct TextField {
    pub label: &'static str,
    pub input: Input,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            input: Input::default(),
        }
    }

    /// Trimmed raw value
    pub fn value(&self) -> &str {
        self.input.value().trim()
    }

    pub fn is_blank(&self) -> bool {
        self.value().is_empty()
    }

    /// Empty optional fields normalize to an explicit `None`, never an
    /// empty string
    pub fn optional(&self) -> Option<String> {
        if self.is_blank() {
            None
        } else {
            Some(self.value().to_string())
        }
    }

    pub fn required(&self) -> Result<String, String> {
        if self.is_blank() {
            Err(format!("{} is required", self.label))
        } else {
            Ok(self.value().to_string())
        }
    }

    pub fn reset(&mut self) {
        self.input.reset();
    }
}

fn parse_i32(field: &TextField) -> Result<i32, String> {
    field
        .value()
        .parse()
        .map_err(|_| format!("{} must be a whole number", field.label))
}

fn parse_date(field: &TextField) -> Result<NaiveDate, String> {
    if field.is_blank() {
        return Err(format!("{} is required", field.label));
    }
    NaiveDate::parse_from_str(field.value(), "%Y-%m-%d")
        .map_err(|_| format!("{} must be a YYYY-MM-DD date", field.label))
}

fn parse_decimal(field: &TextField) -> Result<Decimal, String> {
    field
        .value()
        .parse()
        .map_err(|_| format!("{} must be a number", field.label))
}

pub(crate) fn cycle(idx: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (idx as isize + delta).rem_euclid(len as isize) as usize
}

// ========== Guests ==========

#[derive(Debug)]
pub struct GuestForm {
    pub search_phone: TextField,
    pub name: TextField,
    pub phone: TextField,
    pub email: TextField,
    pub passport_series: TextField,
    pub passport_number: TextField,
}

impl GuestForm {
    pub fn new() -> Self {
        Self {
            search_phone: TextField::new("Search phone"),
            name: TextField::new("Name"),
            phone: TextField::new("Phone"),
            email: TextField::new("Email"),
            passport_series: TextField::new("Passport series"),
            passport_number: TextField::new("Passport number"),
        }
    }

    pub fn payload(&self) -> Result<GuestCreate, String> {
        let passport_series = self.passport_series.optional();
        let passport_number = self.passport_number.optional();
        if passport_series.is_some() != passport_number.is_some() {
            return Err("Passport series and number go together".into());
        }

        Ok(GuestCreate {
            name: self.name.required()?,
            phone: self.phone.required()?,
            email: self.email.optional(),
            passport_series,
            passport_number,
        })
    }

    /// Clear the create fields; the search field keeps its value
    pub fn reset(&mut self) {
        self.name.reset();
        self.phone.reset();
        self.email.reset();
        self.passport_series.reset();
        self.passport_number.reset();
    }
}

impl Default for GuestForm {
    fn default() -> Self {
        Self::new()
    }
}

// ========== Rooms ==========

#[derive(Debug)]
pub struct RoomForm {
    pub room_number: TextField,
    pub category: TextField,
    pub capacity: TextField,
    pub has_child_bed: bool,
}

impl RoomForm {
    pub fn new() -> Self {
        Self {
            room_number: TextField::new("Room number"),
            category: TextField::new("Category"),
            capacity: TextField::new("Capacity"),
            has_child_bed: false,
        }
    }

    pub fn payload(&self) -> Result<RoomCreate, String> {
        let room_number = self.room_number.required()?;
        let category = self.category.required()?;
        let capacity = parse_i32(&self.capacity)?;
        if capacity < 1 {
            return Err("Capacity must be at least 1".into());
        }

        Ok(RoomCreate {
            room_number,
            category,
            capacity,
            has_child_bed: self.has_child_bed,
        })
    }

    pub fn reset(&mut self) {
        self.room_number.reset();
        self.category.reset();
        self.capacity.reset();
        self.has_child_bed = false;
    }
}

impl Default for RoomForm {
    fn default() -> Self {
        Self::new()
    }
}

// ========== Bookings ==========

/// Pending selections made before a booking can be submitted. Cleared
/// on successful creation, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    /// (id, room_number) picked from the availability check
    pub room: Option<(i64, String)>,
    /// (id, name) picked from the guest search
    pub main_guest: Option<(i64, String)>,
}

/// Per-row lookup outcome for additional-guest phones
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowStatus {
    Unchecked,
    Pending,
    Found { id: i64, name: String },
    NotFound,
}

#[derive(Debug)]
pub struct GuestRow {
    pub phone: TextField,
    pub status: RowStatus,
}

impl GuestRow {
    pub fn new() -> Self {
        Self {
            phone: TextField::new("Additional guest phone"),
            status: RowStatus::Unchecked,
        }
    }
}

impl Default for GuestRow {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct BookingForm {
    pub search_phone: TextField,
    /// One date pair feeds both the availability check and the payload
    pub check_in: TextField,
    pub check_out: TextField,
    pub guest_rows: Vec<GuestRow>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            search_phone: TextField::new("Guest phone"),
            check_in: TextField::new("Check-in"),
            check_out: TextField::new("Check-out"),
            guest_rows: Vec::new(),
        }
    }

    pub fn dates(&self) -> Result<(NaiveDate, NaiveDate), String> {
        Ok((parse_date(&self.check_in)?, parse_date(&self.check_out)?))
    }

    /// Coerce the form and draft into the create payload. The main
    /// guest always leads `guest_ids`; resolved additional guests
    /// follow, deduplicated. Rows that never resolved are skipped.
    pub fn payload(&self, draft: &BookingDraft) -> Result<BookingCreate, String> {
        let (check_in_date, check_out_date) = self.dates()?;
        let (room_id, _) = draft
            .room
            .clone()
            .ok_or("Pick a room via the availability check first")?;
        let (main_guest_id, _) = draft.main_guest.clone().ok_or("Set a main guest first")?;

        let mut guest_ids = vec![main_guest_id];
        for row in &self.guest_rows {
            if let RowStatus::Found { id, .. } = row.status {
                if !guest_ids.contains(&id) {
                    guest_ids.push(id);
                }
            }
        }

        Ok(BookingCreate {
            room_id,
            main_guest_id,
            check_in_date,
            check_out_date,
            status: STATUS_CONFIRMED.to_string(),
            discount: 0,
            guest_ids,
        })
    }

    pub fn reset(&mut self) {
        self.search_phone.reset();
        self.check_in.reset();
        self.check_out.reset();
        self.guest_rows.clear();
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

// ========== Prices ==========

#[derive(Debug, Default)]
pub struct PriceForm {
    /// Index into the room choice list
    pub room_idx: usize,
    /// Index into `DayOfWeek::ALL`
    pub day_idx: usize,
    pub amount: TextField,
}

impl PriceForm {
    pub fn new() -> Self {
        Self {
            room_idx: 0,
            day_idx: 0,
            amount: TextField::new("Price"),
        }
    }

    pub fn day(&self) -> DayOfWeek {
        DayOfWeek::ALL[self.day_idx % DayOfWeek::ALL.len()]
    }

    pub fn cycle_room(&mut self, delta: isize, choices: usize) {
        self.room_idx = cycle(self.room_idx, delta, choices);
    }

    pub fn cycle_day(&mut self, delta: isize) {
        self.day_idx = cycle(self.day_idx, delta, DayOfWeek::ALL.len());
    }

    pub fn payload(&self, room_choices: &[(i64, String)]) -> Result<PriceCreate, String> {
        let (room_id, _) = room_choices
            .get(self.room_idx)
            .cloned()
            .ok_or("No rooms loaded for the price form")?;

        Ok(PriceCreate {
            room_id,
            day_of_week: self.day(),
            price: parse_decimal(&self.amount)?,
        })
    }

    pub fn reset(&mut self) {
        self.amount.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(label: &'static str, value: &str) -> TextField {
        TextField {
            label,
            input: Input::new(value.to_string()),
        }
    }

    #[test]
    fn guest_payload_normalizes_empty_optionals() {
        let mut form = GuestForm::new();
        form.name = field("Name", "Ada Lovelace");
        form.phone = field("Phone", "+1-555-0100");
        form.email = field("Email", "   ");

        let payload = form.payload().unwrap();
        assert_eq!(payload.email, None);
        assert_eq!(payload.passport_series, None);
        assert_eq!(payload.passport_number, None);
    }

    #[test]
    fn guest_payload_rejects_half_a_passport() {
        let mut form = GuestForm::new();
        form.name = field("Name", "Ada");
        form.phone = field("Phone", "+1");
        form.passport_series = field("Passport series", "4012");

        let err = form.payload().unwrap_err();
        assert!(err.contains("Passport"));
    }

    #[test]
    fn guest_payload_requires_name_and_phone() {
        let form = GuestForm::new();
        assert_eq!(form.payload().unwrap_err(), "Name is required");
    }

    #[test]
    fn room_payload_coerces_capacity() {
        let mut form = RoomForm::new();
        form.room_number = field("Room number", "202");
        form.category = field("Category", "Suite");
        form.capacity = field("Capacity", "3");
        form.has_child_bed = true;

        let payload = form.payload().unwrap();
        assert_eq!(payload.capacity, 3);
        assert!(payload.has_child_bed);
    }

    #[test]
    fn room_payload_rejects_zero_capacity() {
        let mut form = RoomForm::new();
        form.room_number = field("Room number", "202");
        form.category = field("Category", "Suite");
        form.capacity = field("Capacity", "0");

        assert!(form.payload().unwrap_err().contains("at least 1"));
    }

    #[test]
    fn booking_dates_must_parse() {
        let mut form = BookingForm::new();
        form.check_in = field("Check-in", "2024-06-01");
        form.check_out = field("Check-out", "05/06/2024");

        assert!(form.dates().unwrap_err().contains("Check-out"));
    }

    #[test]
    fn booking_payload_merges_resolved_rows() {
        let mut form = BookingForm::new();
        form.check_in = field("Check-in", "2024-06-01");
        form.check_out = field("Check-out", "2024-06-05");
        form.guest_rows = vec![
            GuestRow {
                phone: field("Additional guest phone", "+1"),
                status: RowStatus::Found {
                    id: 7,
                    name: "Grace".into(),
                },
            },
            GuestRow {
                phone: field("Additional guest phone", "+2"),
                status: RowStatus::NotFound,
            },
            // Duplicate of the main guest
            GuestRow {
                phone: field("Additional guest phone", "+3"),
                status: RowStatus::Found {
                    id: 1,
                    name: "Ada".into(),
                },
            },
        ];

        let draft = BookingDraft {
            room: Some((3, "101".into())),
            main_guest: Some((1, "Ada".into())),
        };

        let payload = form.payload(&draft).unwrap();
        assert_eq!(payload.guest_ids, vec![1, 7]);
        assert_eq!(payload.status, STATUS_CONFIRMED);
        assert_eq!(payload.discount, 0);
    }

    #[test]
    fn booking_payload_requires_selections() {
        let mut form = BookingForm::new();
        form.check_in = field("Check-in", "2024-06-01");
        form.check_out = field("Check-out", "2024-06-05");

        let err = form.payload(&BookingDraft::default()).unwrap_err();
        assert!(err.contains("availability"));
    }

    #[test]
    fn price_payload_needs_a_loaded_room_list() {
        let mut form = PriceForm::new();
        form.amount = field("Price", "120.50");

        assert!(form.payload(&[]).is_err());

        let choices = vec![(3, "Room 101 (Standard)".to_string())];
        let payload = form.payload(&choices).unwrap();
        assert_eq!(payload.room_id, 3);
        assert_eq!(payload.price, "120.50".parse().unwrap());
    }

    #[test]
    fn day_cycling_wraps_both_ways() {
        let mut form = PriceForm::new();
        form.cycle_day(-1);
        assert_eq!(form.day(), DayOfWeek::Sunday);
        form.cycle_day(1);
        assert_eq!(form.day(), DayOfWeek::Monday);
    }
}
