//! Pure list projections
//!
//! Fetch results turn into view models here with no terminal in sight,
//! so the rendering rules stay testable headless: a loaded list shows
//! one card per item, an empty list shows its designated message, and
//! a failed load shows the per-entity error line.

use crate::app::{Availability, ListState};
use shared::models::{Booking, Guest, Price, Room};

pub const LOADING: &str = "Loading...";
pub const NO_GUESTS: &str = "No guests on file.";
pub const NO_ROOMS: &str = "No rooms on file.";
pub const NO_BOOKINGS: &str = "No bookings.";
pub const NO_PRICES: &str = "No prices set.";
pub const NO_FREE_ROOMS: &str = "No rooms free for the chosen dates.";
pub const AVAILABILITY_HINT: &str = "Run an availability check to pick a room.";

/// One rendered card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub lines: Vec<String>,
    /// Cancelled bookings render dimmed
    pub cancelled: bool,
}

/// What a list pane shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Placeholder(String),
    Cards(Vec<Card>),
}

impl ListView {
    pub fn card_count(&self) -> usize {
        match self {
            ListView::Cards(cards) => cards.len(),
            ListView::Placeholder(_) => 0,
        }
    }
}

fn project<T>(state: &ListState<T>, empty: &str, card: impl Fn(&T) -> Card) -> ListView {
    match state {
        ListState::Loading => ListView::Placeholder(LOADING.into()),
        ListState::Failed(msg) => ListView::Placeholder((*msg).into()),
        ListState::Loaded(items) if items.is_empty() => ListView::Placeholder(empty.into()),
        ListState::Loaded(items) => ListView::Cards(items.iter().map(card).collect()),
    }
}

pub fn guests_view(state: &ListState<Guest>) -> ListView {
    project(state, NO_GUESTS, guest_card)
}

fn guest_card(guest: &Guest) -> Card {
    let mut lines = vec![format!("Phone: {}", guest.phone)];
    if let Some(email) = &guest.email {
        lines.push(format!("Email: {email}"));
    }
    if let (Some(series), Some(number)) = (&guest.passport_series, &guest.passport_number) {
        lines.push(format!("Passport: {series} No. {number}"));
    }
    Card {
        title: guest.name.clone(),
        lines,
        cancelled: false,
    }
}

pub fn rooms_view(state: &ListState<Room>) -> ListView {
    project(state, NO_ROOMS, room_card)
}

pub fn room_card(room: &Room) -> Card {
    Card {
        title: format!("Room {}", room.room_number),
        lines: vec![
            format!("Category: {}", room.category),
            format!("Capacity: {}", room.capacity),
            format!("Child bed: {}", if room.has_child_bed { "yes" } else { "no" }),
        ],
        cancelled: false,
    }
}

pub fn bookings_view(state: &ListState<Booking>) -> ListView {
    project(state, NO_BOOKINGS, booking_card)
}

fn booking_card(booking: &Booking) -> Card {
    Card {
        title: format!("Booking #{}", booking.id),
        lines: vec![
            format!("Room: {} ({})", booking.room_number, booking.category),
            format!("Guest: {}", booking.main_guest_name),
            format!("Stay: {} to {}", booking.check_in_date, booking.check_out_date),
            format!("Status: {}", booking.status),
            format!("Discount: {}%", booking.discount),
        ],
        cancelled: booking.is_cancelled(),
    }
}

pub fn prices_view(state: &ListState<Price>) -> ListView {
    project(state, NO_PRICES, price_card)
}

fn price_card(price: &Price) -> Card {
    Card {
        title: format!("Room {}", price.room_number),
        lines: vec![format!("{}: {}", price.day_of_week, price.price)],
        cancelled: false,
    }
}

/// The availability panel inside the booking form
pub fn availability_view(state: &Availability) -> ListView {
    match state {
        Availability::Idle => ListView::Placeholder(AVAILABILITY_HINT.into()),
        Availability::Loading => ListView::Placeholder(LOADING.into()),
        Availability::Failed(msg) => ListView::Placeholder((*msg).into()),
        Availability::Loaded(rooms) if rooms.is_empty() => {
            ListView::Placeholder(NO_FREE_ROOMS.into())
        }
        Availability::Loaded(rooms) => ListView::Cards(rooms.iter().map(room_card).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::BOOKINGS_LOAD_ERROR;
    use chrono::NaiveDate;
    use shared::models::{STATUS_CANCELLED, STATUS_CONFIRMED};

    fn guest(id: i64, name: &str) -> Guest {
        Guest {
            id,
            name: name.to_string(),
            phone: format!("+1-555-010{id}"),
            email: None,
            passport_series: None,
            passport_number: None,
        }
    }

    fn booking(id: i64, status: &str) -> Booking {
        Booking {
            id,
            room_id: 3,
            room_number: "101".into(),
            category: "Standard".into(),
            main_guest_id: 1,
            main_guest_name: "Ada".into(),
            check_in_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            status: status.to_string(),
            discount: 0,
            guest_ids: vec![1],
        }
    }

    #[test]
    fn card_count_matches_response_length() {
        let state = ListState::Loaded(vec![guest(1, "Ada"), guest(2, "Grace")]);
        assert_eq!(guests_view(&state).card_count(), 2);
    }

    #[test]
    fn empty_list_shows_designated_message_not_empty_container() {
        let state: ListState<Guest> = ListState::Loaded(Vec::new());
        assert_eq!(
            guests_view(&state),
            ListView::Placeholder(NO_GUESTS.into())
        );
    }

    #[test]
    fn failed_load_replaces_loading_placeholder() {
        let state: ListState<Booking> = ListState::Failed(BOOKINGS_LOAD_ERROR);
        assert_eq!(
            bookings_view(&state),
            ListView::Placeholder(BOOKINGS_LOAD_ERROR.into())
        );
    }

    #[test]
    fn cancelled_booking_card_is_flagged() {
        let state = ListState::Loaded(vec![
            booking(41, STATUS_CONFIRMED),
            booking(42, STATUS_CANCELLED),
        ]);
        let ListView::Cards(cards) = bookings_view(&state) else {
            panic!("expected cards");
        };
        assert!(!cards[0].cancelled);
        assert!(cards[1].cancelled);
        assert!(cards[1].lines.iter().any(|l| l.contains("Cancelled")));
    }

    #[test]
    fn optional_guest_fields_only_render_when_present() {
        let mut with_extras = guest(1, "Ada");
        with_extras.email = Some("ada@example.com".into());
        with_extras.passport_series = Some("4012".into());
        with_extras.passport_number = Some("123456".into());

        let bare = guest_card(&guest(2, "Grace"));
        let full = guest_card(&with_extras);
        assert_eq!(bare.lines.len(), 1);
        assert_eq!(full.lines.len(), 3);
    }
}
