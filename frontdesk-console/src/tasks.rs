//! Effect runtime
//!
//! Each effect spawns one client call; the completion comes back to
//! the UI loop as an `Update` over the channel. Nothing is cancelled
//! once dispatched: stale completions are discarded by generation
//! token when `apply_update` sees them.

use crate::app::{Effect, MutationKind, Section, SectionRows, Update};
use frontdesk_client::ApiClient;
use shared::models::STATUS_CANCELLED;
use tokio::sync::mpsc::UnboundedSender;

pub fn run(effect: Effect, client: ApiClient, tx: UnboundedSender<Update>) {
    match effect {
        // Handled by the main loop, never spawned
        Effect::Quit => {}

        Effect::Load {
            section,
            generation,
        } => {
            tokio::spawn(async move {
                let result = match section {
                    Section::Guests => client.list_guests().await.map(SectionRows::Guests),
                    Section::Rooms => client.list_rooms().await.map(SectionRows::Rooms),
                    Section::Bookings => client.list_bookings().await.map(SectionRows::Bookings),
                    Section::Prices => client.list_prices().await.map(SectionRows::Prices),
                };
                let _ = tx.send(Update::Loaded {
                    section,
                    generation,
                    result,
                });
            });
        }

        Effect::LoadRoomChoices => {
            tokio::spawn(async move {
                let result = client.list_rooms().await;
                let _ = tx.send(Update::RoomChoices(result));
            });
        }

        Effect::CheckAvailability {
            generation,
            check_in,
            check_out,
        } => {
            tokio::spawn(async move {
                let result = client.available_rooms(check_in, check_out).await;
                let _ = tx.send(Update::Availability { generation, result });
            });
        }

        Effect::SearchGuest {
            target,
            generation,
            phone,
        } => {
            tokio::spawn(async move {
                let result = client.search_guest(&phone).await;
                let _ = tx.send(Update::SearchResult {
                    target,
                    generation,
                    result,
                });
            });
        }

        Effect::LookupGuestRow { row, phone } => {
            tokio::spawn(async move {
                let result = client.search_guest(&phone).await;
                let _ = tx.send(Update::RowLookup { row, phone, result });
            });
        }

        Effect::SubmitGuest(payload) => {
            tokio::spawn(async move {
                let result = client.create_guest(&payload).await.map(|_| ());
                let _ = tx.send(Update::Mutated {
                    kind: MutationKind::GuestCreated,
                    result,
                });
            });
        }

        Effect::SubmitRoom(payload) => {
            tokio::spawn(async move {
                let result = client.create_room(&payload).await.map(|_| ());
                let _ = tx.send(Update::Mutated {
                    kind: MutationKind::RoomCreated,
                    result,
                });
            });
        }

        Effect::SubmitBooking(payload) => {
            tokio::spawn(async move {
                let result = client.create_booking(&payload).await.map(|_| ());
                let _ = tx.send(Update::Mutated {
                    kind: MutationKind::BookingCreated,
                    result,
                });
            });
        }

        Effect::SubmitPrice(payload) => {
            tokio::spawn(async move {
                let result = client.set_price(&payload).await.map(|_| ());
                let _ = tx.send(Update::Mutated {
                    kind: MutationKind::PriceSet,
                    result,
                });
            });
        }

        Effect::DeleteGuest(id) => {
            tokio::spawn(async move {
                let result = client.delete_guest(id).await;
                let _ = tx.send(Update::Mutated {
                    kind: MutationKind::GuestDeleted,
                    result,
                });
            });
        }

        Effect::CancelBooking(id) => {
            tokio::spawn(async move {
                let result = client
                    .update_booking_status(id, STATUS_CANCELLED)
                    .await
                    .map(|_| ());
                let _ = tx.send(Update::Mutated {
                    kind: MutationKind::BookingCancelled,
                    result,
                });
            });
        }
    }
}
