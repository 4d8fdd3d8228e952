//! REST
//!
//! Both backends are reached through their own [`Client`]. A client is bound to one domain and only
//! ever attaches the token stored for that domain.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use gloo_net::http::{Request, RequestBuilder, Response};
use koshub_domain::{self as domain, ApiError, Domain, SessionRepository};
use log::{error, warn};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::Config;

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Copy, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct Client<S, K> {
    domain: Domain,
    base_url: String,
    sender: S,
    sessions: K,
}

impl<S: SendRequest, K: SessionRepository> Client<S, K> {
    pub fn new(domain: Domain, base_url: &str, sender: S, sessions: K) -> Self {
        Self {
            domain,
            base_url: base_url.trim_end_matches('/').to_string(),
            sender,
            sessions,
        }
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// The token is read on every request, so a login or logout takes effect immediately.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Content-Type", "application/json");
        match self.sessions.token(self.domain) {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::get(&self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::post(&self.url(path)))
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::put(&self.url(path)))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::delete(&self.url(path)))
    }

    async fn send(&self, request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let request = request.map_err(|err| ApiError::Other(format!("invalid request: {err}")))?;
        let url = request.url();
        match self.sender.send_request(request).await {
            Ok(response) => {
                if response.ok() {
                    return Ok(response);
                }
                let status = response.status();
                if status != 401 {
                    error!("{} error: {status} {url}", self.domain);
                }
                let message = response
                    .json::<ErrorBody>()
                    .await
                    .ok()
                    .and_then(ErrorBody::into_message);
                Err(ApiError::from_status(status, message))
            }
            Err(err) => {
                error!("{} error: no connection {url}: {err}", self.domain);
                Err(ApiError::NoConnection)
            }
        }
    }

    async fn fetch<T>(&self, request: Result<Request, gloo_net::Error>) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|err| ApiError::InvalidResponse(err.to_string()))
    }

    /// Returns the `message` of the response body, or an empty string if there is none.
    async fn fetch_message(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<String, ApiError> {
        let text = self
            .send(request)
            .await?
            .text()
            .await
            .map_err(|err| ApiError::InvalidResponse(err.to_string()))?;
        Ok(serde_json::from_str::<MessageResponse>(&text)
            .map(|m| m.message)
            .unwrap_or_default())
    }
}

#[derive(Clone)]
pub struct REST<S, K> {
    pub primary: Client<S, K>,
    pub partner: Client<S, K>,
    sessions: K,
}

impl<K: SessionRepository + Clone> REST<GlooNetSendRequest, K> {
    pub fn new(config: &Config, sessions: K) -> Self {
        Self::with_sender(config, GlooNetSendRequest, sessions)
    }
}

impl<S: SendRequest + Clone, K: SessionRepository + Clone> REST<S, K> {
    pub fn with_sender(config: &Config, sender: S, sessions: K) -> Self {
        Self {
            primary: Client::new(
                Domain::Primary,
                config.base_url(Domain::Primary),
                sender.clone(),
                sessions.clone(),
            ),
            partner: Client::new(
                Domain::Partner,
                config.base_url(Domain::Partner),
                sender,
                sessions.clone(),
            ),
            sessions,
        }
    }

    fn client(&self, domain: Domain) -> &Client<S, K> {
        match domain {
            Domain::Primary => &self.primary,
            Domain::Partner => &self.partner,
        }
    }
}

impl<S, K: SessionRepository> SessionRepository for REST<S, K> {
    fn save_session(
        &self,
        domain: Domain,
        token: &str,
        user: &domain::User,
    ) -> Result<(), domain::SessionError> {
        self.sessions.save_session(domain, token, user)
    }

    fn load_session(
        &self,
        domain: Domain,
    ) -> Result<Option<domain::StoredSession>, domain::SessionError> {
        self.sessions.load_session(domain)
    }

    fn clear_session(&self, domain: Domain) {
        self.sessions.clear_session(domain);
    }

    fn token(&self, domain: Domain) -> Option<String> {
        self.sessions.token(domain)
    }
}

impl<S: SendRequest + Clone, K: SessionRepository + Clone> domain::AuthRepository for REST<S, K> {
    async fn log_in(
        &self,
        domain: Domain,
        credentials: domain::Credentials,
    ) -> Result<domain::Session, ApiError> {
        let client = self.client(domain);
        let response: AuthResponse = client
            .fetch(
                client
                    .post("/auth/login")
                    .json(&LoginRequest::from(credentials)),
            )
            .await?;
        normalize_session(response)
    }

    async fn register(
        &self,
        domain: Domain,
        registration: domain::Registration,
    ) -> Result<domain::Session, ApiError> {
        let client = self.client(domain);
        let response: AuthResponse = client
            .fetch(
                client
                    .post("/auth/register")
                    .json(&RegisterRequest::from(registration)),
            )
            .await?;
        normalize_session(response)
    }

    async fn change_password(&self, new_password: String) -> Result<String, ApiError> {
        self.primary
            .fetch_message(
                self.primary
                    .put("/auth/change-password")
                    .json(&ChangePasswordRequest { new_password }),
            )
            .await
    }

    async fn read_partner_user(&self, id: &domain::UserID) -> Result<domain::User, ApiError> {
        let user: User = self
            .partner
            .fetch(self.partner.get(&format!("/users/{id}")).build())
            .await?;
        Ok(user.into())
    }
}

impl<S: SendRequest + Clone, K: SessionRepository + Clone> domain::AccommodationRepository
    for REST<S, K>
{
    async fn read_accommodations(&self) -> Result<Vec<domain::Accommodation>, ApiError> {
        let accommodations: Vec<Accommodation> = self
            .partner
            .fetch(self.partner.get("/accommodations").build())
            .await?;
        Ok(accommodations.into_iter().map(Into::into).collect())
    }

    async fn read_accommodation(
        &self,
        id: domain::AccommodationID,
    ) -> Result<domain::Accommodation, ApiError> {
        let accommodation: Accommodation = self
            .partner
            .fetch(self.partner.get(&format!("/accommodations/{id}")).build())
            .await?;
        Ok(accommodation.into())
    }

    async fn create_accommodation(
        &self,
        accommodation: domain::NewAccommodation,
    ) -> Result<domain::Accommodation, ApiError> {
        let accommodation: Accommodation = self
            .partner
            .fetch(
                self.partner
                    .post("/accommodations")
                    .json(&NewAccommodation::from(accommodation)),
            )
            .await?;
        Ok(accommodation.into())
    }

    async fn modify_accommodation(
        &self,
        id: domain::AccommodationID,
        changes: domain::AccommodationChanges,
    ) -> Result<domain::Accommodation, ApiError> {
        let accommodation: Accommodation = self
            .partner
            .fetch(
                self.partner
                    .put(&format!("/accommodations/{id}"))
                    .json(&AccommodationChanges::from(changes)),
            )
            .await?;
        Ok(accommodation.into())
    }

    async fn delete_accommodation(&self, id: domain::AccommodationID) -> Result<String, ApiError> {
        self.partner
            .fetch_message(self.partner.delete(&format!("/accommodations/{id}")).build())
            .await
    }
}

impl<S: SendRequest + Clone, K: SessionRepository + Clone> domain::BookingRepository
    for REST<S, K>
{
    async fn read_bookings(&self) -> Result<Vec<domain::Booking>, ApiError> {
        let bookings: Vec<Booking> = self
            .partner
            .fetch(self.partner.get("/bookings").build())
            .await?;
        Ok(convert_all(bookings, "booking"))
    }

    async fn read_bookings_of_user(
        &self,
        user_id: &domain::UserID,
    ) -> Result<Vec<domain::Booking>, ApiError> {
        let bookings: Option<OneOrMany<Booking>> = self
            .partner
            .fetch(self.partner.get(&format!("/bookings/{user_id}")).build())
            .await?;
        Ok(convert_all(
            bookings.map(OneOrMany::into_vec).unwrap_or_default(),
            "booking",
        ))
    }

    async fn read_booking(&self, id: domain::BookingID) -> Result<domain::Booking, ApiError> {
        let booking: Booking = self
            .partner
            .fetch(self.partner.get(&format!("/bookings/{id}")).build())
            .await?;
        booking.try_into()
    }

    async fn create_booking(
        &self,
        booking: domain::NewBooking,
    ) -> Result<domain::Booking, ApiError> {
        let booking: Booking = self
            .partner
            .fetch(
                self.partner
                    .post("/bookings")
                    .json(&NewBooking::from(booking)),
            )
            .await?;
        booking.try_into()
    }

    async fn update_booking_status(
        &self,
        id: domain::BookingID,
        status: domain::BookingStatus,
        accommodation_id: domain::AccommodationID,
    ) -> Result<domain::Booking, ApiError> {
        let booking: Booking = self
            .partner
            .fetch(
                self.partner
                    .put(&format!("/bookings/{id}"))
                    .json(&BookingStatusUpdate::new(status, accommodation_id)),
            )
            .await?;
        booking.try_into()
    }

    async fn delete_booking(&self, id: domain::BookingID) -> Result<String, ApiError> {
        self.partner
            .fetch_message(self.partner.delete(&format!("/bookings/{id}")).build())
            .await
    }
}

impl<S: SendRequest + Clone, K: SessionRepository + Clone> domain::LaundryRepository
    for REST<S, K>
{
    async fn read_laundry_orders(&self) -> Result<Vec<domain::LaundryOrder>, ApiError> {
        let orders: Vec<LaundryOrder> = self
            .primary
            .fetch(self.primary.get("/api/laundry").build())
            .await?;
        Ok(orders.into_iter().map(Into::into).collect())
    }

    async fn read_laundry_order(
        &self,
        id: domain::LaundryOrderID,
    ) -> Result<domain::LaundryOrder, ApiError> {
        let order: LaundryOrder = self
            .primary
            .fetch(self.primary.get(&format!("/api/laundry/{id}")).build())
            .await?;
        Ok(order.into())
    }

    async fn create_laundry_order(
        &self,
        order: domain::NewLaundryOrder,
    ) -> Result<domain::LaundryOrder, ApiError> {
        let order: LaundryOrder = self
            .primary
            .fetch(
                self.primary
                    .post("/api/laundry")
                    .json(&NewLaundryOrder::from(order)),
            )
            .await?;
        Ok(order.into())
    }

    async fn modify_laundry_order(
        &self,
        id: domain::LaundryOrderID,
        changes: domain::LaundryOrderChanges,
    ) -> Result<domain::LaundryOrder, ApiError> {
        let order: LaundryOrder = self
            .primary
            .fetch(
                self.primary
                    .put(&format!("/api/laundry/{id}"))
                    .json(&LaundryOrderChanges::from(changes)),
            )
            .await?;
        Ok(order.into())
    }

    async fn update_laundry_status(
        &self,
        id: domain::LaundryOrderID,
        status: domain::OrderStatus,
        delivery_date: Option<String>,
        delivery_time: Option<String>,
    ) -> Result<domain::LaundryOrder, ApiError> {
        let order: LaundryOrder = self
            .primary
            .fetch(
                self.primary
                    .put(&format!("/api/laundry/{id}/status"))
                    .json(&StatusUpdate {
                        status: status.to_string(),
                        delivery_date,
                        delivery_time,
                    }),
            )
            .await?;
        Ok(order.into())
    }

    async fn cancel_laundry_order(&self, id: domain::LaundryOrderID) -> Result<String, ApiError> {
        self.primary
            .fetch_message(self.primary.delete(&format!("/api/laundry/{id}")).build())
            .await
    }
}

impl<S: SendRequest + Clone, K: SessionRepository + Clone> domain::CateringRepository
    for REST<S, K>
{
    async fn read_catering_menu(&self) -> Result<domain::CateringMenu, ApiError> {
        let menu: MenuResponse = self
            .primary
            .fetch(self.primary.get("/api/catering/menu").build())
            .await?;
        Ok(menu.into_menu().into())
    }

    async fn read_catering_orders(&self) -> Result<Vec<domain::CateringOrder>, ApiError> {
        let orders: Vec<CateringOrder> = self
            .primary
            .fetch(self.primary.get("/api/catering").build())
            .await?;
        Ok(convert_all(orders, "catering order"))
    }

    async fn read_catering_order(
        &self,
        id: domain::CateringOrderID,
    ) -> Result<domain::CateringOrder, ApiError> {
        let order: CateringOrder = self
            .primary
            .fetch(self.primary.get(&format!("/api/catering/{id}")).build())
            .await?;
        order.try_into()
    }

    async fn create_catering_order(
        &self,
        order: domain::NewCateringOrder,
    ) -> Result<domain::CateringOrder, ApiError> {
        let order: CateringOrder = self
            .primary
            .fetch(
                self.primary
                    .post("/api/catering")
                    .json(&NewCateringOrder::from(order)),
            )
            .await?;
        order.try_into()
    }

    async fn modify_catering_order(
        &self,
        id: domain::CateringOrderID,
        changes: domain::CateringOrderChanges,
    ) -> Result<domain::CateringOrder, ApiError> {
        let order: CateringOrder = self
            .primary
            .fetch(
                self.primary
                    .put(&format!("/api/catering/{id}"))
                    .json(&CateringOrderChanges::from(changes)),
            )
            .await?;
        order.try_into()
    }

    async fn update_catering_status(
        &self,
        id: domain::CateringOrderID,
        status: domain::OrderStatus,
    ) -> Result<domain::CateringOrder, ApiError> {
        let order: CateringOrder = self
            .primary
            .fetch(
                self.primary
                    .put(&format!("/api/catering/{id}/status"))
                    .json(&StatusUpdate {
                        status: status.to_string(),
                        delivery_date: None,
                        delivery_time: None,
                    }),
            )
            .await?;
        order.try_into()
    }

    async fn cancel_catering_order(
        &self,
        id: domain::CateringOrderID,
    ) -> Result<String, ApiError> {
        self.primary
            .fetch_message(self.primary.delete(&format!("/api/catering/{id}")).build())
            .await
    }
}

impl<S: SendRequest + Clone, K: SessionRepository + Clone> domain::NotificationRepository
    for REST<S, K>
{
    async fn read_notifications(
        &self,
        is_read: Option<bool>,
        limit: u32,
    ) -> Result<Vec<domain::Notification>, ApiError> {
        let mut params = vec![("limit", limit.to_string())];
        if let Some(is_read) = is_read {
            params.push(("is_read", is_read.to_string()));
        }
        let notifications: Vec<Notification> = self
            .primary
            .fetch(self.primary.get("/api/notifications").query(params).build())
            .await?;
        Ok(notifications.into_iter().map(Into::into).collect())
    }

    async fn read_unread_count(&self) -> Result<u32, ApiError> {
        let count: UnreadCount = self
            .primary
            .fetch(self.primary.get("/api/notifications/unread-count").build())
            .await?;
        Ok(count.unread_count)
    }

    async fn mark_notification_read(
        &self,
        id: domain::NotificationID,
    ) -> Result<domain::Notification, ApiError> {
        let notification: Notification = self
            .primary
            .fetch(
                self.primary
                    .put(&format!("/api/notifications/{id}/read"))
                    .build(),
            )
            .await?;
        Ok(notification.into())
    }

    async fn mark_all_notifications_read(&self) -> Result<String, ApiError> {
        self.primary
            .fetch_message(self.primary.put("/api/notifications/read-all").build())
            .await
    }
}

/// Raw login or register response.
///
/// Depending on the backend, the session is either nested in `session` or given at the top level.
#[derive(Debug, Default, Deserialize)]
pub struct AuthResponse {
    pub session: Option<SessionPayload>,
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
    pub user: Option<User>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SessionPayload {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
    pub user: Option<User>,
}

/// Extracts the session from either response shape.
///
/// Values in `session` take precedence over top-level ones. A missing or zero expiry falls back to
/// the default.
pub fn normalize_session(response: AuthResponse) -> Result<domain::Session, ApiError> {
    let AuthResponse {
        session,
        access_token,
        expires_in,
        user,
    } = response;
    let session = session.unwrap_or_default();
    let access_token = session
        .access_token
        .filter(|t| !t.is_empty())
        .or(access_token.filter(|t| !t.is_empty()))
        .ok_or_else(|| ApiError::InvalidResponse("missing access token".to_string()))?;
    let expires_in = session
        .expires_in
        .filter(|e| *e > 0)
        .or(expires_in.filter(|e| *e > 0))
        .unwrap_or(domain::DEFAULT_EXPIRES_IN);
    let user = session
        .user
        .or(user)
        .ok_or_else(|| ApiError::InvalidResponse("missing user".to_string()))?;
    Ok(domain::Session {
        access_token,
        expires_in,
        user: user.into(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<serde_json::Value>,
    message: Option<serde_json::Value>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        let text = |value: Option<serde_json::Value>| match value {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text),
            _ => None,
        };
        text(self.error).or_else(|| text(self.message))
    }
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct UnreadCount {
    unread_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MenuResponse {
    Wrapped { menu: CateringMenu },
    Flat(CateringMenu),
}

impl MenuResponse {
    fn into_menu(self) -> CateringMenu {
        match self {
            MenuResponse::Wrapped { menu } | MenuResponse::Flat(menu) => menu,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_level: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount_rate: Option<f64>,
}

impl From<User> for domain::User {
    fn from(value: User) -> Self {
        domain::User {
            id: value.id.into(),
            email: value.email,
            name: value.name,
            membership_level: value.membership_level,
            discount_rate: value.discount_rate,
        }
    }
}

impl From<domain::User> for User {
    fn from(value: domain::User) -> Self {
        User {
            id: value.id.to_string(),
            email: value.email,
            name: value.name,
            membership_level: value.membership_level,
            discount_rate: value.discount_rate,
        }
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

impl From<domain::Credentials> for LoginRequest {
    fn from(value: domain::Credentials) -> Self {
        LoginRequest {
            email: value.email,
            password: value.password,
        }
    }
}

#[derive(Debug, Serialize)]
struct RegisterRequest {
    email: String,
    password: String,
    name: String,
}

impl From<domain::Registration> for RegisterRequest {
    fn from(value: domain::Registration) -> Self {
        RegisterRequest {
            email: value.email,
            password: value.password,
            name: value.name,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChangePasswordRequest {
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub accommodation_id: u32,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub price: f64,
    #[serde(default)]
    pub available_units: Option<u32>,
    #[serde(default)]
    pub total_units: Option<u32>,
}

impl From<Accommodation> for domain::Accommodation {
    fn from(value: Accommodation) -> Self {
        domain::Accommodation {
            id: value.accommodation_id.into(),
            name: value.name,
            address: value.address,
            city: value.city,
            price: value.price,
            available_units: value.available_units.unwrap_or_default(),
            total_units: value.total_units.unwrap_or_default(),
        }
    }
}

impl From<domain::Accommodation> for Accommodation {
    fn from(value: domain::Accommodation) -> Self {
        Accommodation {
            accommodation_id: *value.id,
            name: value.name,
            address: value.address,
            city: value.city,
            price: value.price,
            available_units: Some(value.available_units),
            total_units: Some(value.total_units),
        }
    }
}

#[derive(Debug, Serialize)]
struct NewAccommodation {
    name: String,
    address: String,
    city: String,
    price: f64,
    available_units: u32,
    total_units: u32,
}

impl From<domain::NewAccommodation> for NewAccommodation {
    fn from(value: domain::NewAccommodation) -> Self {
        NewAccommodation {
            name: value.name,
            address: value.address,
            city: value.city,
            price: value.price,
            available_units: value.available_units,
            total_units: value.total_units,
        }
    }
}

#[derive(Debug, Serialize)]
struct AccommodationChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    available_units: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_units: Option<u32>,
}

impl From<domain::AccommodationChanges> for AccommodationChanges {
    fn from(value: domain::AccommodationChanges) -> Self {
        AccommodationChanges {
            name: value.name,
            address: value.address,
            city: value.city,
            price: value.price,
            available_units: value.available_units,
            total_units: value.total_units,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: u32,
    pub accommodation_id: u32,
    #[serde(deserialize_with = "deserialize_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub end_date: NaiveDate,
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub final_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub discount_applied: Option<f64>,
}

impl TryFrom<Booking> for domain::Booking {
    type Error = ApiError;

    fn try_from(value: Booking) -> Result<Self, Self::Error> {
        let status = domain::BookingStatus::from_str(&value.status).map_err(|_| {
            ApiError::InvalidResponse(format!("unknown booking status: {}", value.status))
        })?;
        Ok(domain::Booking {
            id: value.booking_id.into(),
            accommodation_id: value.accommodation_id.into(),
            start_date: value.start_date,
            end_date: value.end_date,
            status,
            final_price: value.final_price.unwrap_or_default(),
            discount_applied: value.discount_applied.unwrap_or_default(),
        })
    }
}

impl From<domain::Booking> for Booking {
    fn from(value: domain::Booking) -> Self {
        Booking {
            booking_id: *value.id,
            accommodation_id: *value.accommodation_id,
            start_date: value.start_date,
            end_date: value.end_date,
            status: value.status.to_string(),
            final_price: Some(value.final_price),
            discount_applied: Some(value.discount_applied),
        }
    }
}

#[derive(Debug, Serialize)]
struct NewBooking {
    accommodation_id: u32,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl From<domain::NewBooking> for NewBooking {
    fn from(value: domain::NewBooking) -> Self {
        NewBooking {
            accommodation_id: *value.accommodation_id,
            start_date: value.start_date,
            end_date: value.end_date,
        }
    }
}

/// The backend needs the accommodation to locate and authorize the status change.
#[derive(Debug, Serialize)]
struct BookingStatusUpdate {
    status: String,
    accommodation_id: u32,
}

impl BookingStatusUpdate {
    fn new(status: domain::BookingStatus, accommodation_id: domain::AccommodationID) -> Self {
        Self {
            status: status.to_string(),
            accommodation_id: *accommodation_id,
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaundryOrder {
    pub id: u32,
    #[serde(default)]
    pub service_type: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<f64>,
    #[serde(default)]
    pub pickup_date: String,
    #[serde(default)]
    pub pickup_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<u32>,
}

impl From<LaundryOrder> for domain::LaundryOrder {
    fn from(value: LaundryOrder) -> Self {
        domain::LaundryOrder {
            id: value.id.into(),
            service_type: value.service_type,
            weight: value.weight,
            pickup_date: value.pickup_date,
            pickup_time: value.pickup_time,
            delivery_date: value.delivery_date,
            delivery_time: value.delivery_time,
            special_requests: value.special_requests,
            status: value.status.into(),
            total_price: value.total_price,
            booking_id: value.booking_id.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize)]
struct NewLaundryOrder {
    service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    pickup_date: String,
    pickup_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    booking_id: Option<u32>,
}

impl From<domain::NewLaundryOrder> for NewLaundryOrder {
    fn from(value: domain::NewLaundryOrder) -> Self {
        NewLaundryOrder {
            service_type: value.service_type,
            weight: value.weight,
            pickup_date: value.pickup_date,
            pickup_time: value.pickup_time,
            special_requests: value.special_requests,
            booking_id: value.booking_id.map(|id| *id),
        }
    }
}

#[derive(Debug, Serialize)]
struct LaundryOrderChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pickup_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pickup_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    special_requests: Option<String>,
}

impl From<domain::LaundryOrderChanges> for LaundryOrderChanges {
    fn from(value: domain::LaundryOrderChanges) -> Self {
        LaundryOrderChanges {
            service_type: value.service_type,
            weight: value.weight,
            pickup_date: value.pickup_date,
            pickup_time: value.pickup_time,
            special_requests: value.special_requests,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CateringOrder {
    pub id: u32,
    pub meal_type: String,
    #[serde(default)]
    pub menu_name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub delivery_date: String,
    #[serde(default)]
    pub delivery_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<u32>,
}

impl TryFrom<CateringOrder> for domain::CateringOrder {
    type Error = ApiError;

    fn try_from(value: CateringOrder) -> Result<Self, Self::Error> {
        let meal_type = domain::MealType::from_str(&value.meal_type).map_err(|_| {
            ApiError::InvalidResponse(format!("unknown meal type: {}", value.meal_type))
        })?;
        Ok(domain::CateringOrder {
            id: value.id.into(),
            meal_type,
            menu_name: value.menu_name,
            quantity: value.quantity,
            delivery_date: value.delivery_date,
            delivery_time: value.delivery_time,
            delivery_address: value.delivery_address,
            special_requests: value.special_requests,
            status: value.status.into(),
            total_price: value.total_price,
            booking_id: value.booking_id.map(Into::into),
        })
    }
}

#[derive(Debug, Serialize)]
struct NewCateringOrder {
    meal_type: String,
    menu_name: String,
    quantity: u32,
    delivery_date: String,
    delivery_time: String,
    delivery_address: String,
    special_requests: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    booking_id: Option<u32>,
}

impl From<domain::NewCateringOrder> for NewCateringOrder {
    fn from(value: domain::NewCateringOrder) -> Self {
        NewCateringOrder {
            meal_type: value.meal_type.to_string(),
            menu_name: value.menu_name,
            quantity: value.quantity,
            delivery_date: value.delivery_date,
            delivery_time: value.delivery_time,
            delivery_address: value.delivery_address,
            special_requests: value.special_requests,
            booking_id: value.booking_id.map(|id| *id),
        }
    }
}

#[derive(Debug, Serialize)]
struct CateringOrderChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    meal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    menu_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    special_requests: Option<String>,
}

impl From<domain::CateringOrderChanges> for CateringOrderChanges {
    fn from(value: domain::CateringOrderChanges) -> Self {
        CateringOrderChanges {
            meal_type: value.meal_type.map(|m| m.to_string()),
            menu_name: value.menu_name,
            quantity: value.quantity,
            delivery_date: value.delivery_date,
            delivery_time: value.delivery_time,
            delivery_address: value.delivery_address,
            special_requests: value.special_requests,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CateringMenu {
    #[serde(default)]
    pub breakfast: Vec<MenuItem>,
    #[serde(default)]
    pub lunch: Vec<MenuItem>,
    #[serde(default)]
    pub dinner: Vec<MenuItem>,
    #[serde(default)]
    pub snack: Vec<MenuItem>,
}

impl From<CateringMenu> for domain::CateringMenu {
    fn from(value: CateringMenu) -> Self {
        let items = |items: Vec<MenuItem>| items.into_iter().map(Into::into).collect();
        domain::CateringMenu {
            breakfast: items(value.breakfast),
            lunch: items(value.lunch),
            dinner: items(value.dinner),
            snack: items(value.snack),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<MenuItem> for domain::MenuItem {
    fn from(value: MenuItem) -> Self {
        domain::MenuItem {
            name: value.name,
            price: value.price,
            description: value.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<u32>,
}

impl From<Notification> for domain::Notification {
    fn from(value: Notification) -> Self {
        domain::Notification {
            id: value.id.into(),
            kind: value.kind.as_str().into(),
            severity: value.severity.as_str().into(),
            title: value.title,
            message: value.message,
            is_read: value.is_read,
            created_at: value.created_at,
            reference_id: value.reference_id,
        }
    }
}

/// Records that cannot be converted are left out of the list.
fn convert_all<T, U>(items: Vec<T>, kind: &str) -> Vec<U>
where
    U: TryFrom<T, Error = ApiError>,
{
    items
        .into_iter()
        .filter_map(|item| {
            U::try_from(item)
                .inspect_err(|err| warn!("skipping {kind}: {err}"))
                .ok()
        })
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Id {
    Number(u64),
    Text(String),
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Id::deserialize(deserializer)? {
        Id::Number(number) => number.to_string(),
        Id::Text(text) => text,
    })
}

// Numeric database columns are sent as strings by some backends.
#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Float(f64),
    Text(String),
}

impl Number {
    fn value<E: de::Error>(self) -> Result<f64, E> {
        match self {
            Number::Float(value) => Ok(value),
            Number::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid number: {text}"))),
        }
    }
}

fn deserialize_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Number::deserialize(deserializer)?.value()
}

fn deserialize_optional_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    Option::<Number>::deserialize(deserializer)?
        .map(Number::value)
        .transpose()
}

/// Accepts plain dates as well as timestamps, of which only the date is used.
fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let value = String::deserialize(deserializer)?;
    let date = value.get(..10).unwrap_or(&value);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(de::Error::custom)
}

/// Timestamps without offset are taken as UTC.
fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    let value = String::deserialize(deserializer)?;
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&value, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|timestamp| timestamp.and_utc())
        .map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{ACCOMMODATION, BOOKING, PARTNER_USER, USER};

    use super::*;

    fn auth_response(value: serde_json::Value) -> AuthResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_normalize_session_nested() {
        let user = User::from(PARTNER_USER.clone());
        assert_eq!(
            normalize_session(auth_response(json!({
                "session": { "access_token": "X", "user": user }
            }))),
            Ok(domain::Session {
                access_token: "X".to_string(),
                expires_in: 3600,
                user: PARTNER_USER.clone(),
            })
        );
    }

    #[test]
    fn test_normalize_session_flat() {
        let user = User::from(USER.clone());
        assert_eq!(
            normalize_session(auth_response(json!({
                "access_token": "Y",
                "expires_in": 1800,
                "user": user
            }))),
            Ok(domain::Session {
                access_token: "Y".to_string(),
                expires_in: 1800,
                user: USER.clone(),
            })
        );
    }

    #[test]
    fn test_normalize_session_nested_token_with_top_level_user() {
        let user = User::from(USER.clone());
        assert_eq!(
            normalize_session(auth_response(json!({
                "session": { "access_token": "Z", "expires_in": 7200 },
                "user": user
            }))),
            Ok(domain::Session {
                access_token: "Z".to_string(),
                expires_in: 7200,
                user: USER.clone(),
            })
        );
    }

    #[rstest]
    #[case(json!({ "access_token": "Y", "expires_in": 0, "user": { "id": 1 } }), Ok(3600))]
    #[case(json!({ "session": null, "access_token": "Y", "user": { "id": 1 } }), Ok(3600))]
    #[case(
        json!({ "session": { "access_token": "" }, "user": { "id": 1 } }),
        Err(ApiError::InvalidResponse("missing access token".to_string()))
    )]
    #[case(
        json!({ "access_token": "Y" }),
        Err(ApiError::InvalidResponse("missing user".to_string()))
    )]
    fn test_normalize_session_edge_cases(
        #[case] response: serde_json::Value,
        #[case] expected: Result<u64, ApiError>,
    ) {
        assert_eq!(
            normalize_session(auth_response(response)).map(|s| s.expires_in),
            expected
        );
    }

    #[rstest]
    #[case(json!({ "error": "Email taken", "message": "Bad request" }), Some("Email taken"))]
    #[case(json!({ "message": "Bad request" }), Some("Bad request"))]
    #[case(json!({ "error": { "code": 7 }, "message": "Bad request" }), Some("Bad request"))]
    #[case(json!({ "error": "" }), None)]
    #[case(json!({}), None)]
    fn test_error_body_into_message(
        #[case] body: serde_json::Value,
        #[case] expected: Option<&str>,
    ) {
        let body: ErrorBody = serde_json::from_value(body).unwrap();
        assert_eq!(body.into_message().as_deref(), expected);
    }

    #[test]
    fn test_booking_status_update_body() {
        assert_eq!(
            json!(BookingStatusUpdate::new(
                domain::BookingStatus::Success,
                42.into()
            )),
            json!({ "status": "SUCCESS", "accommodation_id": 42 })
        );
    }

    #[test]
    fn test_new_booking_body_has_no_prices() {
        assert_eq!(
            json!(NewBooking::from(domain::NewBooking {
                accommodation_id: 42.into(),
                start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            })),
            json!({ "accommodation_id": 42, "start_date": "2024-03-01", "end_date": "2024-03-05" })
        );
    }

    #[test]
    fn test_status_update_body_omits_missing_delivery() {
        assert_eq!(
            json!(StatusUpdate {
                status: "delivered".to_string(),
                delivery_date: Some("2024-03-02".to_string()),
                delivery_time: None,
            }),
            json!({ "status": "delivered", "delivery_date": "2024-03-02" })
        );
    }

    #[test]
    fn test_accommodation_changes_body_is_partial() {
        assert_eq!(
            json!(AccommodationChanges::from(domain::AccommodationChanges {
                price: Some(1_250_000.0),
                ..domain::AccommodationChanges::default()
            })),
            json!({ "price": 1_250_000.0 })
        );
    }

    #[test]
    fn test_user_serde() {
        let obj = User::from(PARTNER_USER.clone());
        let deserialized: User = serde_json::from_value(json!(obj)).unwrap();
        assert_eq!(domain::User::from(deserialized), PARTNER_USER.clone());
    }

    #[rstest]
    #[case(json!({ "id": 12 }), "12")]
    #[case(json!({ "id": "5f0e1c2a-0000-4000-8000-000000000000" }), "5f0e1c2a-0000-4000-8000-000000000000")]
    fn test_user_id_number_or_string(#[case] value: serde_json::Value, #[case] expected: &str) {
        let user: User = serde_json::from_value(value).unwrap();
        assert_eq!(user.id, expected);
    }

    #[test]
    fn test_user_discount_rate_as_string() {
        let user: User =
            serde_json::from_value(json!({ "id": 1, "discount_rate": "0.10" })).unwrap();
        assert_eq!(user.discount_rate, Some(0.1));
    }

    #[test]
    fn test_accommodation_from() {
        assert_eq!(
            domain::Accommodation::from(Accommodation::from(ACCOMMODATION.clone())),
            ACCOMMODATION.clone()
        );
    }

    #[test]
    fn test_booking_try_from() {
        assert_eq!(
            domain::Booking::try_from(Booking::from(BOOKING.clone())),
            Ok(BOOKING.clone())
        );
    }

    #[test]
    fn test_booking_with_timestamps_and_string_prices() {
        let booking: Booking = serde_json::from_value(json!({
            "booking_id": 7,
            "accommodation_id": 42,
            "start_date": "2024-03-01T00:00:00.000Z",
            "end_date": "2024-03-05",
            "status": "PENDING",
            "final_price": "900000.00",
            "discount_applied": 100000
        }))
        .unwrap();
        assert_eq!(domain::Booking::try_from(booking), Ok(BOOKING.clone()));
    }

    #[test]
    fn test_booking_unknown_status() {
        let booking = Booking {
            status: "REFUNDED".to_string(),
            ..Booking::from(BOOKING.clone())
        };
        assert_eq!(
            domain::Booking::try_from(booking),
            Err(ApiError::InvalidResponse(
                "unknown booking status: REFUNDED".to_string()
            ))
        );
    }

    #[test]
    fn test_booking_without_prices() {
        let booking: Booking = serde_json::from_value(json!({
            "booking_id": 7,
            "accommodation_id": 42,
            "start_date": "2024-03-01",
            "end_date": "2024-03-05",
            "status": "PENDING",
            "final_price": null,
            "discount_applied": null
        }))
        .unwrap();
        assert_eq!(
            domain::Booking::try_from(booking),
            Ok(domain::Booking {
                final_price: 0.0,
                discount_applied: 0.0,
                ..BOOKING.clone()
            })
        );
    }

    #[test]
    fn test_accommodation_without_units() {
        let accommodation: Accommodation = serde_json::from_value(json!({
            "accommodation_id": 42,
            "name": "Kos Melati",
            "price": "250000",
            "available_units": null
        }))
        .unwrap();
        let accommodation = domain::Accommodation::from(accommodation);
        assert_eq!(accommodation.available_units, 0);
        assert_eq!(accommodation.total_units, 0);
    }

    #[test]
    fn test_convert_all_skips_invalid_bookings() {
        let bookings: Vec<Booking> = serde_json::from_value(json!([
            {
                "booking_id": 7, "accommodation_id": 42, "start_date": "2024-03-01",
                "end_date": "2024-03-05", "status": "PENDING"
            },
            {
                "booking_id": 8, "accommodation_id": 42, "start_date": "2024-04-01",
                "end_date": "2024-04-05", "status": "EXPIRED"
            }
        ]))
        .unwrap();

        let bookings: Vec<domain::Booking> = convert_all(bookings, "booking");

        assert_eq!(
            bookings.iter().map(|b| *b.id).collect::<Vec<_>>(),
            vec![7]
        );
    }

    #[test]
    fn test_convert_all_catering_orders() {
        let orders: Vec<CateringOrder> = serde_json::from_value(json!([
            { "id": 1, "meal_type": "lunch" },
            { "id": 2, "meal_type": "Lunch" },
            { "id": 3, "meal_type": "brunch" }
        ]))
        .unwrap();

        let orders: Vec<domain::CateringOrder> = convert_all(orders, "catering order");

        assert_eq!(
            orders.iter().map(|o| (*o.id, o.meal_type)).collect::<Vec<_>>(),
            vec![(1, domain::MealType::Lunch), (2, domain::MealType::Lunch)]
        );
    }

    #[rstest]
    #[case(json!([]), 0)]
    #[case(json!([{
        "booking_id": 7, "accommodation_id": 42, "start_date": "2024-03-01",
        "end_date": "2024-03-05", "status": "PENDING"
    }]), 1)]
    #[case(json!({
        "booking_id": 7, "accommodation_id": 42, "start_date": "2024-03-01",
        "end_date": "2024-03-05", "status": "PENDING"
    }), 1)]
    #[case(json!(null), 0)]
    fn test_bookings_of_user_shapes(#[case] value: serde_json::Value, #[case] expected: usize) {
        let bookings: Option<OneOrMany<Booking>> = serde_json::from_value(value).unwrap();
        assert_eq!(
            bookings.map(OneOrMany::into_vec).unwrap_or_default().len(),
            expected
        );
    }

    #[rstest]
    #[case(json!({ "menu": { "breakfast": [{ "name": "Nasi Uduk", "price": 15000 }] } }))]
    #[case(json!({ "breakfast": [{ "name": "Nasi Uduk", "price": 15000 }] }))]
    fn test_menu_response_shapes(#[case] value: serde_json::Value) {
        let menu: MenuResponse = serde_json::from_value(value).unwrap();
        let menu = domain::CateringMenu::from(menu.into_menu());
        assert_eq!(
            menu.first_item_name(domain::MealType::Breakfast),
            Some("Nasi Uduk")
        );
        assert!(menu.lunch.is_empty());
    }

    #[test]
    fn test_catering_order_try_from() {
        let order: CateringOrder = serde_json::from_value(json!({
            "id": 3,
            "meal_type": "lunch",
            "menu_name": "Nasi Goreng",
            "quantity": 2,
            "delivery_date": "2024-03-02",
            "delivery_time": "12:00",
            "status": "Preparing",
            "total_price": "40000"
        }))
        .unwrap();
        let order = domain::CateringOrder::try_from(order).unwrap();
        assert_eq!(order.meal_type, domain::MealType::Lunch);
        assert_eq!(order.total_price, Some(40_000.0));
        assert!(order.status.is("preparing"));
        assert!(matches!(
            domain::CateringOrder::try_from(CateringOrder {
                meal_type: "brunch".to_string(),
                ..serde_json::from_value(json!({ "id": 4, "meal_type": "lunch" })).unwrap()
            }),
            Err(ApiError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_laundry_order_from() {
        let order: LaundryOrder = serde_json::from_value(json!({
            "id": 5,
            "service_type": "wash_and_fold",
            "weight": 3.5,
            "pickup_date": "2024-03-01",
            "pickup_time": "09:00",
            "status": "PENDING",
            "booking_id": 7
        }))
        .unwrap();
        let order = domain::LaundryOrder::from(order);
        assert_eq!(order.weight, Some(3.5));
        assert_eq!(order.total_price, None);
        assert_eq!(order.booking_id, Some(7.into()));
        assert!(order.status.is_active());
    }

    #[rstest]
    #[case("2024-03-01T08:00:00Z")]
    #[case("2024-03-01T10:00:00+02:00")]
    #[case("2024-03-01T08:00:00.000")]
    #[case("2024-03-01 08:00:00")]
    fn test_notification_timestamps(#[case] created_at: &str) {
        let notification: Notification = serde_json::from_value(json!({
            "id": 1,
            "type": "laundry",
            "severity": "success",
            "title": "Done",
            "message": "Your laundry is ready",
            "is_read": false,
            "created_at": created_at
        }))
        .unwrap();
        let notification = domain::Notification::from(notification);
        assert_eq!(
            notification.created_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
        );
        assert_eq!(notification.kind, domain::NotificationType::Laundry);
        assert_eq!(notification.severity, domain::Severity::Success);
    }

    #[test]
    fn test_notification_unknown_type() {
        let notification: Notification = serde_json::from_value(json!({
            "id": 1,
            "type": "promo",
            "created_at": "2024-03-01T08:00:00Z"
        }))
        .unwrap();
        let notification = domain::Notification::from(notification);
        assert_eq!(notification.kind, domain::NotificationType::Other);
        assert_eq!(notification.severity, domain::Severity::Info);
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use std::{cell::RefCell, collections::VecDeque, rc::Rc};

        use koshub_domain::{
            AccommodationRepository, AuthRepository, BookingRepository, CateringRepository,
            LaundryRepository, NotificationRepository,
        };
        use pretty_assertions::assert_eq;
        use serde_json::json;
        use wasm_bindgen_test::wasm_bindgen_test;

        use crate::local_storage::LocalStorage;
        use crate::tests::data::{PARTNER_USER, USER};

        use super::*;

        #[wasm_bindgen_test]
        async fn test_request_carries_token_of_own_domain() {
            reset_sessions();
            LocalStorage
                .save_session(Domain::Primary, "primary-token", &USER)
                .unwrap();
            LocalStorage
                .save_session(Domain::Partner, "partner-token", &PARTNER_USER)
                .unwrap();
            let (rest, sender) = rest_with_responses(vec![ok(&json!([])), ok(&json!([]))]);

            rest.read_laundry_orders().await.unwrap();
            rest.read_accommodations().await.unwrap();

            assert_eq!(
                sender.sent(),
                vec![
                    (
                        "http://localhost:3010/api/laundry".to_string(),
                        Some("Bearer primary-token".to_string())
                    ),
                    (
                        "http://localhost:3000/accommodations".to_string(),
                        Some("Bearer partner-token".to_string())
                    ),
                ]
            );
        }

        #[wasm_bindgen_test]
        async fn test_request_without_token() {
            reset_sessions();
            LocalStorage
                .save_session(Domain::Primary, "primary-token", &USER)
                .unwrap();
            let (rest, sender) = rest_with_responses(vec![ok(&json!([]))]);

            rest.read_bookings().await.unwrap();

            assert_eq!(
                sender.sent(),
                vec![("http://localhost:3000/bookings".to_string(), None)]
            );
        }

        #[wasm_bindgen_test]
        async fn test_log_in_partner_nested_session() {
            reset_sessions();
            let (rest, sender) = rest_with_responses(vec![ok(&json!({
                "session": {
                    "access_token": "X",
                    "user": User::from(PARTNER_USER.clone())
                }
            }))]);

            assert_eq!(
                rest.log_in(
                    Domain::Partner,
                    domain::Credentials {
                        email: "bob@example.com".to_string(),
                        password: "secret".to_string(),
                    }
                )
                .await
                .unwrap(),
                domain::Session {
                    access_token: "X".to_string(),
                    expires_in: 3600,
                    user: PARTNER_USER.clone(),
                }
            );
            assert_eq!(
                sender.sent(),
                vec![("http://localhost:3000/auth/login".to_string(), None)]
            );
        }

        #[wasm_bindgen_test]
        async fn test_update_booking_status_url() {
            reset_sessions();
            let (rest, sender) = rest_with_responses(vec![ok(&json!({
                "booking_id": 7,
                "accommodation_id": 42,
                "start_date": "2024-03-01",
                "end_date": "2024-03-05",
                "status": "SUCCESS",
                "final_price": 900_000,
                "discount_applied": 100_000
            }))]);

            let booking = rest
                .update_booking_status(7.into(), domain::BookingStatus::Success, 42.into())
                .await
                .unwrap();

            assert_eq!(booking.status, domain::BookingStatus::Success);
            assert_eq!(
                sender.sent(),
                vec![("http://localhost:3000/bookings/7".to_string(), None)]
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_notifications_query() {
            reset_sessions();
            let (rest, sender) = rest_with_responses(vec![ok(&json!([]))]);

            rest.read_notifications(Some(false), 50).await.unwrap();

            assert_eq!(
                sender.sent(),
                vec![(
                    "http://localhost:3010/api/notifications?limit=50&is_read=false".to_string(),
                    None
                )]
            );
        }

        #[wasm_bindgen_test]
        async fn test_error_response() {
            reset_sessions();
            let (rest, _) = rest_with_responses(vec![
                status(422, &json!({ "message": "Dates overlap" })),
                status(401, &json!({ "error": "Token expired" })),
                status(500, &json!({})),
            ]);

            assert_eq!(
                rest.read_bookings().await,
                Err(ApiError::Rejected {
                    status: 422,
                    message: Some("Dates overlap".to_string())
                })
            );
            assert_eq!(
                rest.read_catering_orders().await,
                Err(ApiError::Unauthorized {
                    message: Some("Token expired".to_string())
                })
            );
            assert_eq!(
                rest.read_laundry_orders().await,
                Err(ApiError::Server {
                    status: 500,
                    message: None
                })
            );
        }

        #[wasm_bindgen_test]
        async fn test_no_connection() {
            reset_sessions();
            let (rest, _) = rest_with_responses(vec![]);

            assert_eq!(
                rest.read_unread_count().await,
                Err(ApiError::NoConnection)
            );
        }

        #[wasm_bindgen_test]
        async fn test_read_catering_menu_wrapped() {
            reset_sessions();
            let (rest, _) = rest_with_responses(vec![ok(&json!({
                "menu": { "lunch": [{ "name": "Nasi Goreng", "price": 20000 }] }
            }))]);

            assert_eq!(
                rest.read_catering_menu()
                    .await
                    .unwrap()
                    .first_item_name(domain::MealType::Lunch),
                Some("Nasi Goreng")
            );
        }

        #[wasm_bindgen_test]
        async fn test_cancel_message() {
            reset_sessions();
            let (rest, _) = rest_with_responses(vec![
                ok(&json!({ "message": "Laundry order cancelled" })),
                ok(&json!(null)),
            ]);

            assert_eq!(
                rest.cancel_laundry_order(5.into()).await,
                Ok("Laundry order cancelled".to_string())
            );
            assert_eq!(rest.delete_booking(7.into()).await, Ok(String::new()));
        }

        fn reset_sessions() {
            LocalStorage.clear_session(Domain::Primary);
            LocalStorage.clear_session(Domain::Partner);
        }

        fn ok(body: &serde_json::Value) -> Result<gloo_net::http::Response, gloo_net::Error> {
            status(200, body)
        }

        fn status(
            status: u16,
            body: &serde_json::Value,
        ) -> Result<gloo_net::http::Response, gloo_net::Error> {
            gloo_net::http::Response::builder().status(status).json(body)
        }

        fn rest_with_responses(
            responses: Vec<Result<gloo_net::http::Response, gloo_net::Error>>,
        ) -> (REST<MockSendRequest, LocalStorage>, MockSendRequest) {
            let sender = MockSendRequest {
                requests: Rc::new(RefCell::new(vec![])),
                responses: Rc::new(RefCell::new(responses.into())),
            };
            (
                REST::with_sender(&Config::default(), sender.clone(), LocalStorage),
                sender,
            )
        }

        #[derive(Clone)]
        struct MockSendRequest {
            requests: Rc<RefCell<Vec<gloo_net::http::Request>>>,
            responses: Rc<RefCell<VecDeque<Result<gloo_net::http::Response, gloo_net::Error>>>>,
        }

        impl MockSendRequest {
            fn sent(&self) -> Vec<(String, Option<String>)> {
                self.requests
                    .borrow()
                    .iter()
                    .map(|r| (r.url(), r.headers().get("Authorization")))
                    .collect()
            }
        }

        impl SendRequest for MockSendRequest {
            async fn send_request(
                &self,
                request: gloo_net::http::Request,
            ) -> Result<gloo_net::http::Response, gloo_net::Error> {
                self.requests.borrow_mut().push(request);
                self.responses
                    .borrow_mut()
                    .pop_front()
                    .unwrap_or(Err(gloo_net::Error::GlooError("no response".to_string())))
            }
        }
    }
}
