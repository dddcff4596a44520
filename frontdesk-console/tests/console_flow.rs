// frontdesk-console/tests/console_flow.rs
// Headless update-loop tests: key events and task completions in,
// effects out. No terminal involved.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use frontdesk_console::app::{
    App, Availability, Effect, FormSlot, ListState, SearchState, SearchTarget, Section,
    SectionRows, Update,
};
use frontdesk_console::forms::{BookingDraft, RowStatus};
use shared::models::{Guest, Room, STATUS_CONFIRMED};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_key(key(KeyCode::Char(ch)));
    }
}

/// Tab until the given slot has focus
fn focus(app: &mut App, slot: FormSlot) {
    for _ in 0..app.form_slots().len() {
        if app.focused_slot() == slot {
            return;
        }
        app.handle_key(key(KeyCode::Tab));
    }
    panic!("slot {slot:?} not reachable");
}

fn guest(id: i64, name: &str, phone: &str) -> Guest {
    Guest {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
        email: None,
        passport_series: None,
        passport_number: None,
    }
}

fn room(id: i64, number: &str) -> Room {
    Room {
        id,
        room_number: number.to_string(),
        category: "Standard".into(),
        capacity: 2,
        has_child_bed: false,
    }
}

#[test]
fn booking_flow_end_to_end() {
    let (mut app, _) = App::new();

    // Open the bookings section and its form
    app.handle_key(key(KeyCode::Char('3')));
    assert_eq!(app.section, Section::Bookings);
    app.handle_key(key(KeyCode::Char('e')));

    // Search the main guest by phone
    focus(&mut app, FormSlot::BookingSearch);
    type_str(&mut app, "+1-555-0100");
    let effects = app.handle_key(key(KeyCode::Enter));
    let Effect::SearchGuest {
        target: SearchTarget::BookingPanel,
        generation,
        ref phone,
    } = effects[0]
    else {
        panic!("expected a guest search, got {effects:?}");
    };
    assert_eq!(phone, "+1-555-0100");

    app.apply_update(Update::SearchResult {
        target: SearchTarget::BookingPanel,
        generation,
        result: Ok(guest(1, "Ada Lovelace", "+1-555-0100")),
    });

    // Promote the hit to main guest
    focus(&mut app, FormSlot::BookingSetMainGuest);
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.draft.main_guest, Some((1, "Ada Lovelace".to_string())));

    // Dates feed both the availability check and the payload
    focus(&mut app, FormSlot::BookingCheckIn);
    type_str(&mut app, "2024-06-01");
    focus(&mut app, FormSlot::BookingCheckOut);
    type_str(&mut app, "2024-06-05");

    focus(&mut app, FormSlot::BookingAvailability);
    let effects = app.handle_key(key(KeyCode::Enter));
    let Effect::CheckAvailability { generation, .. } = effects[0] else {
        panic!("expected an availability check, got {effects:?}");
    };

    app.apply_update(Update::Availability {
        generation,
        result: Ok(vec![room(1, "101"), room(2, "102")]),
    });

    // Cycle to the second free room and pick it
    focus(&mut app, FormSlot::BookingRoomPick);
    app.handle_key(key(KeyCode::Right));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.draft.room, Some((2, "102".to_string())));

    // One additional guest, resolved by lookup
    focus(&mut app, FormSlot::BookingAddRow);
    app.handle_key(key(KeyCode::Enter));
    focus(&mut app, FormSlot::BookingRow(0));
    type_str(&mut app, "+1-555-0101");
    let effects = app.handle_key(key(KeyCode::Enter));
    assert_eq!(
        effects,
        vec![Effect::LookupGuestRow {
            row: 0,
            phone: "+1-555-0101".into()
        }]
    );
    app.apply_update(Update::RowLookup {
        row: 0,
        phone: "+1-555-0101".into(),
        result: Ok(guest(7, "Grace Hopper", "+1-555-0101")),
    });
    assert!(matches!(
        app.booking_form.guest_rows[0].status,
        RowStatus::Found { id: 7, .. }
    ));

    // Submit
    focus(&mut app, FormSlot::BookingSubmit);
    let effects = app.handle_key(key(KeyCode::Enter));
    let Effect::SubmitBooking(ref payload) = effects[0] else {
        panic!("expected a booking submission, got {effects:?}");
    };
    assert_eq!(payload.room_id, 2);
    assert_eq!(payload.main_guest_id, 1);
    assert_eq!(payload.status, STATUS_CONFIRMED);
    assert_eq!(payload.discount, 0);
    assert_eq!(payload.guest_ids, vec![1, 7]);
    assert_eq!(payload.check_in_date.to_string(), "2024-06-01");
    assert_eq!(payload.check_out_date.to_string(), "2024-06-05");

    // Success clears every transient selection and reloads bookings
    let effects = app.apply_update(Update::Mutated {
        kind: frontdesk_console::app::MutationKind::BookingCreated,
        result: Ok(()),
    });
    assert!(matches!(
        effects[0],
        Effect::Load {
            section: Section::Bookings,
            ..
        }
    ));
    assert_eq!(app.draft, BookingDraft::default());
    assert_eq!(app.availability, Availability::Idle);
    assert!(app.booking_form.guest_rows.is_empty());
    assert!(app.booking_form.check_in.is_blank());
}

#[test]
fn rapid_section_switching_renders_only_the_freshest_response() {
    let (mut app, _) = App::new();

    let first = app.handle_key(key(KeyCode::Char('2')));
    let second = app.handle_key(key(KeyCode::Char('2')));

    let generation_of = |effects: &[Effect]| {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::Load { generation, .. } => Some(*generation),
                _ => None,
            })
            .unwrap()
    };

    // Responses arrive out of order: the newer one first
    app.apply_update(Update::Loaded {
        section: Section::Rooms,
        generation: generation_of(&second),
        result: Ok(SectionRows::Rooms(vec![room(1, "101")])),
    });
    app.apply_update(Update::Loaded {
        section: Section::Rooms,
        generation: generation_of(&first),
        result: Ok(SectionRows::Rooms(vec![
            room(1, "101"),
            room(2, "102"),
            room(3, "103"),
        ])),
    });

    assert_eq!(app.rooms, ListState::Loaded(vec![room(1, "101")]));
}

#[test]
fn declining_a_delete_makes_no_network_calls() {
    let (mut app, _) = App::new();
    app.apply_update(Update::Loaded {
        section: Section::Guests,
        generation: 1,
        result: Ok(SectionRows::Guests(vec![guest(9, "Ada", "+1")])),
    });

    let effects = app.handle_key(key(KeyCode::Char('d')));
    assert!(effects.is_empty());

    let effects = app.handle_key(key(KeyCode::Esc));
    assert!(effects.is_empty());
    assert_eq!(app.confirm, None);

    // Accepting goes through
    app.handle_key(key(KeyCode::Char('d')));
    let effects = app.handle_key(key(KeyCode::Char('y')));
    assert_eq!(effects, vec![Effect::DeleteGuest(9)]);
}

#[test]
fn guests_search_result_stays_out_of_the_banner_surface() {
    let (mut app, _) = App::new();
    app.handle_key(key(KeyCode::Char('e')));
    type_str(&mut app, "+1-555-0100");

    let effects = app.handle_key(key(KeyCode::Enter));
    let Effect::SearchGuest { generation, .. } = effects[0] else {
        panic!("expected a guest search");
    };

    app.apply_update(Update::SearchResult {
        target: SearchTarget::GuestsPanel,
        generation,
        result: Err(frontdesk_client::ClientError::NotFound("no match".into())),
    });

    assert_eq!(
        app.searches[SearchTarget::GuestsPanel as usize],
        SearchState::NotFound
    );
    assert!(app.notices.is_empty());
}
