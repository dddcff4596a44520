//! Application state and update loop
//!
//! Unidirectional flow: key events and task completions funnel through
//! `handle_key` / `apply_update`, which mutate the state and return
//! the effects to run. Rendering reads the state through the pure
//! projections in `view`. Every load carries a generation token;
//! completions whose token is stale by the time they arrive are
//! discarded, so rapid section switching renders only the freshest
//! response.

use crate::forms::{
    BookingDraft, BookingForm, GuestForm, GuestRow, PriceForm, RoomForm, RowStatus, cycle,
};
use crate::notify::Notices;
use chrono::NaiveDate;
use crossterm::event::{Event, KeyCode, KeyEvent};
use frontdesk_client::ClientError;
use shared::models::{
    Booking, BookingCreate, Guest, GuestCreate, Price, PriceCreate, Room, RoomCreate,
};
use std::time::Instant;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

/// Fixed per-entity load failure lines
pub const GUESTS_LOAD_ERROR: &str = "Failed to load guests";
pub const ROOMS_LOAD_ERROR: &str = "Failed to load rooms";
pub const BOOKINGS_LOAD_ERROR: &str = "Failed to load bookings";
pub const PRICES_LOAD_ERROR: &str = "Failed to load prices";
pub const AVAILABILITY_ERROR: &str = "Availability check failed";

/// Top-level admin sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Guests,
    Rooms,
    Bookings,
    Prices,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Guests,
        Section::Rooms,
        Section::Bookings,
        Section::Prices,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Guests => "Guests",
            Section::Rooms => "Rooms",
            Section::Bookings => "Bookings",
            Section::Prices => "Prices",
        }
    }

    fn index(&self) -> usize {
        match self {
            Section::Guests => 0,
            Section::Rooms => 1,
            Section::Bookings => 2,
            Section::Prices => 3,
        }
    }

    fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }
}

/// Lifecycle of one section's list pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(&'static str),
}

impl<T> ListState<T> {
    pub fn len(&self) -> usize {
        match self {
            ListState::Loaded(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The availability panel inside the booking form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Idle,
    Loading,
    Loaded(Vec<Room>),
    Failed(&'static str),
}

/// Rows for one section, as fetched
#[derive(Debug, Clone)]
pub enum SectionRows {
    Guests(Vec<Guest>),
    Rooms(Vec<Room>),
    Bookings(Vec<Booking>),
    Prices(Vec<Price>),
}

/// The two guest-search slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    GuestsPanel,
    BookingPanel,
}

impl SearchTarget {
    fn index(&self) -> usize {
        match self {
            SearchTarget::GuestsPanel => 0,
            SearchTarget::BookingPanel => 1,
        }
    }
}

/// Inline search result. A miss is an expected outcome of search and
/// stays inline; it never raises a banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Pending,
    Found(Guest),
    NotFound,
}

/// Pending confirmation for a destructive action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteGuest(i64),
    CancelBooking(i64),
}

impl ConfirmAction {
    pub fn prompt(&self) -> String {
        match self {
            ConfirmAction::DeleteGuest(id) => {
                format!("Delete guest #{id}? This cannot be undone. [y/n]")
            }
            ConfirmAction::CancelBooking(id) => format!("Cancel booking #{id}? [y/n]"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Form,
}

/// One focusable slot in the active section's form pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    GuestSearch,
    GuestName,
    GuestPhone,
    GuestEmail,
    GuestPassportSeries,
    GuestPassportNumber,
    GuestSubmit,
    RoomNumber,
    RoomCategory,
    RoomCapacity,
    RoomChildBed,
    RoomSubmit,
    BookingSearch,
    BookingSetMainGuest,
    BookingCheckIn,
    BookingCheckOut,
    BookingAvailability,
    BookingRoomPick,
    BookingAddRow,
    BookingRow(usize),
    BookingSubmit,
    PriceRoom,
    PriceDay,
    PriceAmount,
    PriceSubmit,
}

/// Work the update loop asks the runtime to do
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Load { section: Section, generation: u64 },
    LoadRoomChoices,
    CheckAvailability {
        generation: u64,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    SearchGuest {
        target: SearchTarget,
        generation: u64,
        phone: String,
    },
    LookupGuestRow { row: usize, phone: String },
    SubmitGuest(GuestCreate),
    SubmitRoom(RoomCreate),
    SubmitBooking(BookingCreate),
    SubmitPrice(PriceCreate),
    DeleteGuest(i64),
    CancelBooking(i64),
    Quit,
}

/// Mutations, for picking the right banner and reload target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    GuestCreated,
    RoomCreated,
    BookingCreated,
    PriceSet,
    GuestDeleted,
    BookingCancelled,
}

impl MutationKind {
    fn section(&self) -> Section {
        match self {
            MutationKind::GuestCreated | MutationKind::GuestDeleted => Section::Guests,
            MutationKind::RoomCreated => Section::Rooms,
            MutationKind::BookingCreated | MutationKind::BookingCancelled => Section::Bookings,
            MutationKind::PriceSet => Section::Prices,
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            MutationKind::GuestCreated => "Guest added",
            MutationKind::RoomCreated => "Room added",
            MutationKind::BookingCreated => "Booking created",
            MutationKind::PriceSet => "Price set",
            MutationKind::GuestDeleted => "Guest deleted",
            MutationKind::BookingCancelled => "Booking cancelled",
        }
    }
}

/// Task completions delivered back over the channel
#[derive(Debug)]
pub enum Update {
    Loaded {
        section: Section,
        generation: u64,
        result: Result<SectionRows, ClientError>,
    },
    RoomChoices(Result<Vec<Room>, ClientError>),
    Availability {
        generation: u64,
        result: Result<Vec<Room>, ClientError>,
    },
    SearchResult {
        target: SearchTarget,
        generation: u64,
        result: Result<Guest, ClientError>,
    },
    RowLookup {
        row: usize,
        phone: String,
        result: Result<Guest, ClientError>,
    },
    Mutated {
        kind: MutationKind,
        result: Result<(), ClientError>,
    },
}

pub struct App {
    pub section: Section,
    pub mode: Mode,
    pub confirm: Option<ConfirmAction>,

    pub guests: ListState<Guest>,
    pub rooms: ListState<Room>,
    pub bookings: ListState<Booking>,
    pub prices: ListState<Price>,

    /// Cursor into the visible list (for delete/cancel)
    pub cursor: usize,
    /// Focused form slot in `Mode::Form`
    pub focus: usize,

    pub guest_form: GuestForm,
    pub room_form: RoomForm,
    pub booking_form: BookingForm,
    pub price_form: PriceForm,

    pub draft: BookingDraft,
    pub availability: Availability,
    pub availability_cursor: usize,
    pub searches: [SearchState; 2],

    /// (id, label) choices feeding the price form picker
    pub room_choices: Vec<(i64, String)>,

    pub notices: Notices,
    pub logger_state: TuiWidgetState,

    load_generations: [u64; 4],
    availability_generation: u64,
    search_generations: [u64; 2],
}

impl App {
    /// Fresh app plus its startup effects: an initial guests load and
    /// the room prefetch for the price picker
    pub fn new() -> (Self, Vec<Effect>) {
        let mut app = Self {
            section: Section::Guests,
            mode: Mode::Normal,
            confirm: None,
            guests: ListState::Loading,
            rooms: ListState::Loading,
            bookings: ListState::Loading,
            prices: ListState::Loading,
            cursor: 0,
            focus: 0,
            guest_form: GuestForm::new(),
            room_form: RoomForm::new(),
            booking_form: BookingForm::new(),
            price_form: PriceForm::new(),
            draft: BookingDraft::default(),
            availability: Availability::Idle,
            availability_cursor: 0,
            searches: [SearchState::Idle, SearchState::Idle],
            room_choices: Vec::new(),
            notices: Notices::default(),
            logger_state: TuiWidgetState::new(),
            load_generations: [0; 4],
            availability_generation: 0,
            search_generations: [0; 2],
        };

        let effects = vec![app.reload(Section::Guests), Effect::LoadRoomChoices];
        (app, effects)
    }

    /// Switch the visible section and load it fresh. The hidden
    /// sections keep nothing; they re-fetch on their next activation.
    pub fn activate(&mut self, section: Section) -> Vec<Effect> {
        self.section = section;
        self.mode = Mode::Normal;
        self.focus = 0;

        let mut effects = vec![self.reload(section)];
        if section == Section::Prices {
            effects.push(Effect::LoadRoomChoices);
        }
        effects
    }

    fn reload(&mut self, section: Section) -> Effect {
        let slot = &mut self.load_generations[section.index()];
        *slot += 1;
        let generation = *slot;

        match section {
            Section::Guests => self.guests = ListState::Loading,
            Section::Rooms => self.rooms = ListState::Loading,
            Section::Bookings => self.bookings = ListState::Loading,
            Section::Prices => self.prices = ListState::Loading,
        }
        self.cursor = 0;

        Effect::Load {
            section,
            generation,
        }
    }

    pub fn visible_len(&self) -> usize {
        match self.section {
            Section::Guests => self.guests.len(),
            Section::Rooms => self.rooms.len(),
            Section::Bookings => self.bookings.len(),
            Section::Prices => self.prices.len(),
        }
    }

    /// Expire old banners. Called on every UI tick.
    pub fn tick(&mut self, now: Instant) {
        self.notices.sweep(now);
    }

    // ========== Key handling ==========

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if let Some(action) = self.confirm {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.confirm = None;
                    vec![match action {
                        ConfirmAction::DeleteGuest(id) => Effect::DeleteGuest(id),
                        ConfirmAction::CancelBooking(id) => Effect::CancelBooking(id),
                    }]
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.confirm = None;
                    Vec::new()
                }
                _ => Vec::new(),
            };
        }

        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Form => self.handle_form_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
            KeyCode::Char('1') => self.activate(Section::Guests),
            KeyCode::Char('2') => self.activate(Section::Rooms),
            KeyCode::Char('3') => self.activate(Section::Bookings),
            KeyCode::Char('4') => self.activate(Section::Prices),
            KeyCode::Tab => self.activate(self.section.next()),
            KeyCode::Char('r') => vec![self.reload(self.section)],
            KeyCode::Char('e') => {
                self.mode = Mode::Form;
                self.focus = 0;
                Vec::new()
            }
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Down => {
                let len = self.visible_len();
                if len > 0 && self.cursor < len - 1 {
                    self.cursor += 1;
                }
                Vec::new()
            }
            KeyCode::Char('d') => self.request_destructive(),
            KeyCode::PageUp => {
                self.logger_state.transition(TuiWidgetEvent::PrevPageKey);
                Vec::new()
            }
            KeyCode::PageDown => {
                self.logger_state.transition(TuiWidgetEvent::NextPageKey);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Destructive actions go through a confirmation gate first;
    /// declining it issues zero network calls
    fn request_destructive(&mut self) -> Vec<Effect> {
        match self.section {
            Section::Guests => {
                if let ListState::Loaded(guests) = &self.guests {
                    if let Some(guest) = guests.get(self.cursor) {
                        self.confirm = Some(ConfirmAction::DeleteGuest(guest.id));
                    }
                }
            }
            Section::Bookings => {
                if let ListState::Loaded(bookings) = &self.bookings {
                    if let Some(booking) = bookings.get(self.cursor) {
                        self.confirm = Some(ConfirmAction::CancelBooking(booking.id));
                    }
                }
            }
            _ => {}
        }
        Vec::new()
    }

    // ========== Form handling ==========

    pub fn form_slots(&self) -> Vec<FormSlot> {
        match self.section {
            Section::Guests => vec![
                FormSlot::GuestSearch,
                FormSlot::GuestName,
                FormSlot::GuestPhone,
                FormSlot::GuestEmail,
                FormSlot::GuestPassportSeries,
                FormSlot::GuestPassportNumber,
                FormSlot::GuestSubmit,
            ],
            Section::Rooms => vec![
                FormSlot::RoomNumber,
                FormSlot::RoomCategory,
                FormSlot::RoomCapacity,
                FormSlot::RoomChildBed,
                FormSlot::RoomSubmit,
            ],
            Section::Bookings => {
                let mut slots = vec![
                    FormSlot::BookingSearch,
                    FormSlot::BookingSetMainGuest,
                    FormSlot::BookingCheckIn,
                    FormSlot::BookingCheckOut,
                    FormSlot::BookingAvailability,
                    FormSlot::BookingRoomPick,
                    FormSlot::BookingAddRow,
                ];
                for i in 0..self.booking_form.guest_rows.len() {
                    slots.push(FormSlot::BookingRow(i));
                }
                slots.push(FormSlot::BookingSubmit);
                slots
            }
            Section::Prices => vec![
                FormSlot::PriceRoom,
                FormSlot::PriceDay,
                FormSlot::PriceAmount,
                FormSlot::PriceSubmit,
            ],
        }
    }

    pub fn focused_slot(&self) -> FormSlot {
        let slots = self.form_slots();
        slots[self.focus.min(slots.len() - 1)]
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        let slot = self.focused_slot();
        let slot_count = self.form_slots().len();

        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                Vec::new()
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % slot_count;
                Vec::new()
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = cycle(self.focus, -1, slot_count);
                Vec::new()
            }
            KeyCode::Enter => self.trigger(slot),
            KeyCode::Delete => {
                match slot {
                    FormSlot::BookingRow(i) => {
                        self.booking_form.guest_rows.remove(i);
                        self.focus = self.focus.min(self.form_slots().len() - 1);
                    }
                    FormSlot::BookingAddRow => {
                        self.booking_form.guest_rows.pop();
                        self.focus = self.focus.min(self.form_slots().len() - 1);
                    }
                    _ => {}
                }
                Vec::new()
            }
            KeyCode::Left | KeyCode::Right => {
                let delta = if key.code == KeyCode::Left { -1 } else { 1 };
                match slot {
                    FormSlot::PriceRoom => {
                        self.price_form.cycle_room(delta, self.room_choices.len());
                    }
                    FormSlot::PriceDay => {
                        self.price_form.cycle_day(delta);
                    }
                    FormSlot::BookingRoomPick => {
                        if let Availability::Loaded(rooms) = &self.availability {
                            self.availability_cursor =
                                cycle(self.availability_cursor, delta, rooms.len());
                        }
                    }
                    _ => self.feed_input(slot, key),
                }
                Vec::new()
            }
            KeyCode::Char(' ') if slot == FormSlot::RoomChildBed => {
                self.room_form.has_child_bed = !self.room_form.has_child_bed;
                Vec::new()
            }
            _ => {
                self.feed_input(slot, key);
                Vec::new()
            }
        }
    }

    fn feed_input(&mut self, slot: FormSlot, key: KeyEvent) {
        if let FormSlot::BookingRow(i) = slot {
            if let Some(row) = self.booking_form.guest_rows.get_mut(i) {
                // Retyping invalidates the previous lookup outcome
                if row.phone.input.handle_event(&Event::Key(key)).is_some() {
                    row.status = RowStatus::Unchecked;
                }
            }
            return;
        }

        let input = match slot {
            FormSlot::GuestSearch => &mut self.guest_form.search_phone.input,
            FormSlot::GuestName => &mut self.guest_form.name.input,
            FormSlot::GuestPhone => &mut self.guest_form.phone.input,
            FormSlot::GuestEmail => &mut self.guest_form.email.input,
            FormSlot::GuestPassportSeries => &mut self.guest_form.passport_series.input,
            FormSlot::GuestPassportNumber => &mut self.guest_form.passport_number.input,
            FormSlot::RoomNumber => &mut self.room_form.room_number.input,
            FormSlot::RoomCategory => &mut self.room_form.category.input,
            FormSlot::RoomCapacity => &mut self.room_form.capacity.input,
            FormSlot::BookingSearch => &mut self.booking_form.search_phone.input,
            FormSlot::BookingCheckIn => &mut self.booking_form.check_in.input,
            FormSlot::BookingCheckOut => &mut self.booking_form.check_out.input,
            FormSlot::PriceAmount => &mut self.price_form.amount.input,
            _ => return,
        };
        input.handle_event(&Event::Key(key));
    }

    /// Enter on the focused slot: action slots act, everything else
    /// submits the section's form
    fn trigger(&mut self, slot: FormSlot) -> Vec<Effect> {
        match slot {
            FormSlot::GuestSearch => self.search(SearchTarget::GuestsPanel),
            FormSlot::BookingSearch => self.search(SearchTarget::BookingPanel),
            FormSlot::RoomChildBed => {
                self.room_form.has_child_bed = !self.room_form.has_child_bed;
                Vec::new()
            }
            FormSlot::BookingSetMainGuest => {
                if let SearchState::Found(guest) =
                    &self.searches[SearchTarget::BookingPanel.index()]
                {
                    self.draft.main_guest = Some((guest.id, guest.name.clone()));
                }
                Vec::new()
            }
            FormSlot::BookingAvailability => self.check_availability(),
            FormSlot::BookingRoomPick => {
                if let Availability::Loaded(rooms) = &self.availability {
                    if let Some(room) = rooms.get(self.availability_cursor) {
                        self.draft.room = Some((room.id, room.room_number.clone()));
                    }
                }
                Vec::new()
            }
            FormSlot::BookingAddRow => {
                self.booking_form.guest_rows.push(GuestRow::new());
                Vec::new()
            }
            FormSlot::BookingRow(i) => self.lookup_row(i),
            _ => self.submit_current(),
        }
    }

    fn submit_current(&mut self) -> Vec<Effect> {
        let result = match self.section {
            Section::Guests => self.guest_form.payload().map(Effect::SubmitGuest),
            Section::Rooms => self.room_form.payload().map(Effect::SubmitRoom),
            Section::Bookings => self
                .booking_form
                .payload(&self.draft)
                .map(Effect::SubmitBooking),
            Section::Prices => self
                .price_form
                .payload(&self.room_choices)
                .map(Effect::SubmitPrice),
        };

        match result {
            Ok(effect) => vec![effect],
            Err(message) => {
                self.notices.error(message);
                Vec::new()
            }
        }
    }

    fn search(&mut self, target: SearchTarget) -> Vec<Effect> {
        let field = match target {
            SearchTarget::GuestsPanel => &self.guest_form.search_phone,
            SearchTarget::BookingPanel => &self.booking_form.search_phone,
        };
        if field.is_blank() {
            self.notices.error("Enter a phone number to search");
            return Vec::new();
        }
        let phone = field.value().to_string();

        let slot = target.index();
        self.search_generations[slot] += 1;
        self.searches[slot] = SearchState::Pending;

        vec![Effect::SearchGuest {
            target,
            generation: self.search_generations[slot],
            phone,
        }]
    }

    /// Both dates are required and must parse before any network call
    fn check_availability(&mut self) -> Vec<Effect> {
        match self.booking_form.dates() {
            Ok((check_in, check_out)) => {
                self.availability_generation += 1;
                self.availability = Availability::Loading;
                self.availability_cursor = 0;
                vec![Effect::CheckAvailability {
                    generation: self.availability_generation,
                    check_in,
                    check_out,
                }]
            }
            Err(message) => {
                self.notices.error(message);
                Vec::new()
            }
        }
    }

    fn lookup_row(&mut self, row: usize) -> Vec<Effect> {
        let Some(guest_row) = self.booking_form.guest_rows.get_mut(row) else {
            return Vec::new();
        };
        if guest_row.phone.is_blank() {
            return Vec::new();
        }
        let phone = guest_row.phone.value().to_string();
        guest_row.status = RowStatus::Pending;

        vec![Effect::LookupGuestRow { row, phone }]
    }

    // ========== Update application ==========

    pub fn apply_update(&mut self, update: Update) -> Vec<Effect> {
        match update {
            Update::Loaded {
                section,
                generation,
                result,
            } => {
                if generation != self.load_generations[section.index()] {
                    tracing::debug!(section = section.title(), generation, "stale load discarded");
                    return Vec::new();
                }
                match result {
                    Ok(rows) => self.store_rows(section, rows),
                    Err(err) => {
                        self.notices.error(err.to_string());
                        self.set_failed(section);
                    }
                }
                Vec::new()
            }
            Update::RoomChoices(result) => {
                match result {
                    Ok(rooms) => {
                        self.room_choices = rooms
                            .into_iter()
                            .map(|r| (r.id, format!("Room {} ({})", r.room_number, r.category)))
                            .collect();
                        if self.price_form.room_idx >= self.room_choices.len() {
                            self.price_form.room_idx = 0;
                        }
                    }
                    Err(err) => self.notices.error(err.to_string()),
                }
                Vec::new()
            }
            Update::Availability { generation, result } => {
                if generation != self.availability_generation {
                    return Vec::new();
                }
                match result {
                    Ok(rooms) => {
                        self.availability = Availability::Loaded(rooms);
                        self.availability_cursor = 0;
                    }
                    Err(err) => {
                        self.notices.error(err.to_string());
                        self.availability = Availability::Failed(AVAILABILITY_ERROR);
                    }
                }
                Vec::new()
            }
            Update::SearchResult {
                target,
                generation,
                result,
            } => {
                let slot = target.index();
                if generation != self.search_generations[slot] {
                    return Vec::new();
                }
                self.searches[slot] = match result {
                    Ok(guest) => SearchState::Found(guest),
                    Err(ClientError::NotFound(_)) => SearchState::NotFound,
                    Err(err) => {
                        self.notices.error(err.to_string());
                        SearchState::Idle
                    }
                };
                Vec::new()
            }
            Update::RowLookup { row, phone, result } => {
                let Some(guest_row) = self.booking_form.guest_rows.get_mut(row) else {
                    return Vec::new();
                };
                // The row may have been retyped since the lookup started
                if guest_row.phone.value() != phone {
                    return Vec::new();
                }
                guest_row.status = match result {
                    Ok(guest) => RowStatus::Found {
                        id: guest.id,
                        name: guest.name,
                    },
                    Err(ClientError::NotFound(_)) => {
                        self.notices.error("No guest with that phone number");
                        RowStatus::NotFound
                    }
                    Err(err) => {
                        self.notices.error(err.to_string());
                        RowStatus::NotFound
                    }
                };
                Vec::new()
            }
            Update::Mutated { kind, result } => match result {
                Ok(()) => {
                    self.notices.success(kind.success_message());
                    self.after_mutation(kind)
                }
                Err(err) => {
                    // Form contents stay intact for correction
                    self.notices.error(err.to_string());
                    Vec::new()
                }
            },
        }
    }

    fn store_rows(&mut self, section: Section, rows: SectionRows) {
        match (section, rows) {
            (Section::Guests, SectionRows::Guests(items)) => self.guests = ListState::Loaded(items),
            (Section::Rooms, SectionRows::Rooms(items)) => self.rooms = ListState::Loaded(items),
            (Section::Bookings, SectionRows::Bookings(items)) => {
                self.bookings = ListState::Loaded(items)
            }
            (Section::Prices, SectionRows::Prices(items)) => self.prices = ListState::Loaded(items),
            _ => tracing::warn!("row payload does not match its section"),
        }
        if self.cursor >= self.visible_len() {
            self.cursor = self.visible_len().saturating_sub(1);
        }
    }

    fn set_failed(&mut self, section: Section) {
        match section {
            Section::Guests => self.guests = ListState::Failed(GUESTS_LOAD_ERROR),
            Section::Rooms => self.rooms = ListState::Failed(ROOMS_LOAD_ERROR),
            Section::Bookings => self.bookings = ListState::Failed(BOOKINGS_LOAD_ERROR),
            Section::Prices => self.prices = ListState::Failed(PRICES_LOAD_ERROR),
        }
    }

    /// Refresh-after-mutate: reset the owning form, clear transient
    /// selection state, and re-fetch the owning section's list
    fn after_mutation(&mut self, kind: MutationKind) -> Vec<Effect> {
        match kind {
            MutationKind::GuestCreated => self.guest_form.reset(),
            MutationKind::RoomCreated => self.room_form.reset(),
            MutationKind::BookingCreated => {
                self.booking_form.reset();
                self.draft = BookingDraft::default();
                self.availability = Availability::Idle;
                self.availability_cursor = 0;
                self.searches[SearchTarget::BookingPanel.index()] = SearchState::Idle;
                self.focus = 0;
            }
            MutationKind::PriceSet => self.price_form.reset(),
            MutationKind::GuestDeleted | MutationKind::BookingCancelled => {}
        }
        vec![self.reload(kind.section())]
    }
}
