//! HTTP client for the hotel management API

use crate::{ClientConfig, ClientError, ClientResult};
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    Booking, BookingCreate, BookingStatusUpdate, Guest, GuestCreate, Price, PriceCreate, Room,
    RoomCreate,
};

/// HTTP client for making requests to the hotel management API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        tracing::debug!(path, ?query, "GET");
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "PATCH");
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, discarding the acknowledgement body
    async fn delete(&self, path: &str) -> ClientResult<()> {
        tracing::debug!(path, "DELETE");
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Map a non-success response to an error carrying the
    /// server-provided body text, falling back to a status-coded
    /// message when the body is empty
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let text = if text.is_empty() {
            format!("HTTP {}", status.as_u16())
        } else {
            text
        };

        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ClientError::Validation(text))
            }
            StatusCode::CONFLICT => Err(ClientError::Conflict(text)),
            _ => Err(ClientError::Internal(text)),
        }
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }

    // ========== Guests API ==========

    /// List all guests
    pub async fn list_guests(&self) -> ClientResult<Vec<Guest>> {
        self.get("guests").await
    }

    /// Create a guest
    pub async fn create_guest(&self, guest: &GuestCreate) -> ClientResult<Guest> {
        self.post("guests", guest).await
    }

    /// Look up a guest by phone number
    pub async fn search_guest(&self, phone: &str) -> ClientResult<Guest> {
        self.get_query("guests/search", &[("phone", phone)]).await
    }

    /// Delete a guest
    pub async fn delete_guest(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("guests/{id}")).await
    }

    // ========== Rooms API ==========

    /// List all rooms
    pub async fn list_rooms(&self) -> ClientResult<Vec<Room>> {
        self.get("rooms").await
    }

    /// Create a room
    pub async fn create_room(&self, room: &RoomCreate) -> ClientResult<Room> {
        self.post("rooms", room).await
    }

    /// List rooms free in the given date range
    pub async fn available_rooms(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> ClientResult<Vec<Room>> {
        let check_in = check_in.to_string();
        let check_out = check_out.to_string();
        self.get_query(
            "rooms/available",
            &[("check_in", check_in.as_str()), ("check_out", check_out.as_str())],
        )
        .await
    }

    // ========== Bookings API ==========

    /// List all bookings
    pub async fn list_bookings(&self) -> ClientResult<Vec<Booking>> {
        self.get("bookings").await
    }

    /// Create a booking
    pub async fn create_booking(&self, booking: &BookingCreate) -> ClientResult<Booking> {
        self.post("bookings", booking).await
    }

    /// Transition a booking's status (the console only sends "Cancelled")
    pub async fn update_booking_status(
        &self,
        id: i64,
        status: impl Into<String>,
    ) -> ClientResult<Booking> {
        let body = BookingStatusUpdate {
            status: status.into(),
        };
        self.patch(&format!("bookings/{id}/status"), &body).await
    }

    // ========== Prices API ==========

    /// List all prices
    pub async fn list_prices(&self) -> ClientResult<Vec<Price>> {
        self.get("prices").await
    }

    /// Create or replace the price for a (room, day of week) pair
    pub async fn set_price(&self, price: &PriceCreate) -> ClientResult<Price> {
        self.post("prices", price).await
    }
}
