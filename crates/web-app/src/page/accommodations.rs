//! Accommodations of the partner backend and the user's bookings there.
//!
//! The partner backend has its own accounts. Accommodations and bookings are only loaded once a
//! partner session exists, so selecting an accommodation without one opens the partner login.

use futures_util::future::join;
use koshub_domain::{
    Accommodation, AccommodationService, ApiError, AuthService, Booking, BookingService,
    Credentials, DiscountPreview, Domain, NewBooking, Registration, User, ValidationError,
    discount_preview,
};
use log::{info, warn};

use crate::Settings;

pub const LOAD_ERROR: &str = "Unable to load accommodations. Please try again.";
pub const AUTH_ERROR: &str = "Authentication failed. Please try again.";
pub const DATES_MISSING: &str = "Please select both start and end dates";
pub const BOOKING_ERROR: &str = "Failed to create booking";
pub const BOOKING_SUCCESS: &str = "Booking created successfully!";
pub const PAYMENT_ERROR: &str = "Failed to process payment";
pub const CANCEL_ERROR: &str = "Failed to cancel booking";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    LogIn,
    Register,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub accommodation: Accommodation,
    pub start_date: String,
    pub end_date: String,
}

impl BookingForm {
    #[must_use]
    pub fn new(accommodation: Accommodation) -> Self {
        Self {
            accommodation,
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AccommodationsPage {
    pub partner_user: Option<User>,
    pub accommodations: Vec<Accommodation>,
    pub bookings: Vec<Booking>,
    /// Shown instead of the list if no accommodations could be loaded.
    pub error: Option<String>,
    pub auth_form: Option<AuthForm>,
    pub booking_form: Option<BookingForm>,
    pub notice: Option<String>,
    /// Blocking message that must be acknowledged by the user.
    pub alert: Option<String>,
    selection: Option<Accommodation>,
}

impl AccommodationsPage {
    pub async fn mount<S>(service: &S) -> Self
    where
        S: AuthService + AccommodationService + BookingService,
    {
        let mut page = Self {
            partner_user: super::stored_user(service, Domain::Partner),
            ..Self::default()
        };
        if page.is_partner_authenticated() {
            page.load(service).await;
        }
        page
    }

    #[must_use]
    pub fn is_partner_authenticated(&self) -> bool {
        self.partner_user.is_some()
    }

    /// Accommodation chosen before the partner session existed.
    #[must_use]
    pub fn selection(&self) -> Option<&Accommodation> {
        self.selection.as_ref()
    }

    pub async fn load<S: AccommodationService + BookingService>(&mut self, service: &S) {
        let (accommodations, bookings) =
            join(service.get_accommodations(), service.get_bookings()).await;
        self.error = None;
        match accommodations {
            Ok(accommodations) => self.accommodations = accommodations,
            Err(err) => {
                warn!("failed to load accommodations: {err}");
                if self.accommodations.is_empty() {
                    self.error = Some(LOAD_ERROR.to_string());
                }
            }
        }
        self.set_bookings(bookings);
    }

    pub async fn refresh_bookings(&mut self, service: &impl BookingService) {
        let bookings = service.get_bookings().await;
        self.set_bookings(bookings);
    }

    fn set_bookings(&mut self, bookings: Result<Vec<Booking>, ApiError>) {
        match bookings {
            Ok(bookings) => self.bookings = bookings,
            Err(err) => warn!("failed to load bookings: {err}"),
        }
    }

    /// Opens the booking form, or the partner auth form if there is no partner session yet.
    pub fn select(&mut self, accommodation: Accommodation) {
        if self.is_partner_authenticated() {
            self.booking_form = Some(BookingForm::new(accommodation));
        } else {
            self.selection = Some(accommodation);
            self.auth_form = Some(AuthForm::default());
        }
    }

    pub fn open_auth_form(&mut self, mode: AuthMode) {
        self.auth_form = Some(AuthForm {
            mode,
            ..AuthForm::default()
        });
    }

    pub fn switch_auth_mode(&mut self) {
        if let Some(form) = self.auth_form.as_mut() {
            form.mode = match form.mode {
                AuthMode::LogIn => AuthMode::Register,
                AuthMode::Register => AuthMode::LogIn,
            };
            form.error = None;
        }
    }

    pub fn close_auth_form(&mut self) {
        self.auth_form = None;
    }

    pub async fn submit_auth<S>(&mut self, service: &S)
    where
        S: AuthService + AccommodationService + BookingService,
    {
        let Some(form) = self.auth_form.clone() else {
            return;
        };

        let result = match form.mode {
            AuthMode::LogIn => match Credentials::new(&form.email, &form.password) {
                Ok(credentials) => service.log_in(Domain::Partner, credentials).await,
                Err(err) => return self.set_auth_error(err.to_string()),
            },
            AuthMode::Register => {
                match Registration::new(&form.email, &form.password, &form.name) {
                    Ok(registration) => service.register(Domain::Partner, registration).await,
                    Err(err) => return self.set_auth_error(err.to_string()),
                }
            }
        };

        match result {
            Ok(session) => {
                info!("logged in to {} as {}", Domain::Partner, session.user.email);
                self.partner_user = Some(session.user);
                self.auth_form = None;
                if let Some(accommodation) = self.selection.take() {
                    self.booking_form = Some(BookingForm::new(accommodation));
                }
                self.load(service).await;
            }
            Err(err) => self.set_auth_error(err.user_message(AUTH_ERROR)),
        }
    }

    fn set_auth_error(&mut self, message: String) {
        if let Some(form) = self.auth_form.as_mut() {
            form.error = Some(message);
        }
    }

    /// Estimated price for the partner user, only for display.
    #[must_use]
    pub fn price_preview(&self, accommodation: &Accommodation) -> DiscountPreview {
        discount_preview(self.partner_user.as_ref(), accommodation.price)
    }

    pub fn close_booking_form(&mut self) {
        self.booking_form = None;
    }

    pub async fn submit_booking(&mut self, service: &impl BookingService) {
        let Some(form) = self.booking_form.clone() else {
            return;
        };
        if !self.is_partner_authenticated() {
            self.booking_form = None;
            self.select(form.accommodation);
            return;
        }

        let (start_date, end_date) =
            match service.validate_booking_dates(&form.start_date, &form.end_date) {
                Ok(dates) => dates,
                Err(ValidationError::Missing(_)) => {
                    self.alert = Some(DATES_MISSING.to_string());
                    return;
                }
                Err(err) => {
                    self.alert = Some(err.to_string());
                    return;
                }
            };

        match service
            .create_booking(NewBooking {
                accommodation_id: form.accommodation.id,
                start_date,
                end_date,
            })
            .await
        {
            Ok(_) => {
                self.booking_form = None;
                self.notice = Some(BOOKING_SUCCESS.to_string());
                self.refresh_bookings(service).await;
            }
            Err(err) => self.alert = Some(err.user_message(BOOKING_ERROR)),
        }
    }

    pub async fn pay(&mut self, service: &impl BookingService, booking: &Booking) {
        match service.pay_booking(booking).await {
            Ok(_) => self.refresh_bookings(service).await,
            Err(err) => {
                warn!("failed to pay booking {}: {err}", booking.id);
                self.alert = Some(PAYMENT_ERROR.to_string());
            }
        }
    }

    /// Confirmation has to be obtained by the caller.
    pub async fn cancel(&mut self, service: &impl BookingService, booking: &Booking) {
        match service.cancel_booking(booking).await {
            Ok(_) => self.refresh_bookings(service).await,
            Err(err) => {
                warn!("failed to cancel booking {}: {err}", booking.id);
                self.alert = Some(CANCEL_ERROR.to_string());
            }
        }
    }

    /// Ends the partner session, the primary session is kept.
    pub fn log_out(&mut self, service: &impl AuthService) {
        service.log_out(Domain::Partner);
        self.partner_user = None;
        self.booking_form = None;
        self.bookings.clear();
    }

    pub fn leave(&mut self, service: &impl AuthService, settings: &Settings) {
        if settings.partner_logout_on_leave && service.is_authenticated(Domain::Partner) {
            info!("logging out of {} on leaving", Domain::Partner);
            self.log_out(service);
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
