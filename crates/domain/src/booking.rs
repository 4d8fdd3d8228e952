use chrono::NaiveDate;
use derive_more::{Deref, Display, From};
use strum::{Display as StrumDisplay, EnumString};

use crate::{AccommodationID, ApiError, UserID, ValidationError};

#[allow(async_fn_in_trait)]
pub trait BookingService {
    async fn get_bookings(&self) -> Result<Vec<Booking>, ApiError>;
    async fn get_bookings_of_user(&self, user_id: &UserID) -> Result<Vec<Booking>, ApiError>;
    async fn get_booking(&self, id: BookingID) -> Result<Booking, ApiError>;
    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, ApiError>;
    async fn update_booking_status(
        &self,
        id: BookingID,
        status: BookingStatus,
        accommodation_id: AccommodationID,
    ) -> Result<Booking, ApiError>;
    async fn delete_booking(&self, id: BookingID) -> Result<String, ApiError>;

    async fn pay_booking(&self, booking: &Booking) -> Result<Booking, ApiError> {
        self.update_booking_status(booking.id, BookingStatus::Success, booking.accommodation_id)
            .await
    }

    async fn cancel_booking(&self, booking: &Booking) -> Result<Booking, ApiError> {
        self.update_booking_status(
            booking.id,
            BookingStatus::Cancelled,
            booking.accommodation_id,
        )
        .await
    }

    fn validate_booking_dates(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<(NaiveDate, NaiveDate), ValidationError> {
        let start = parse_date(start_date, "start date")?;
        let end = parse_date(end_date, "end date")?;
        if end < start {
            return Err(ValidationError::Other(
                "End date must not be before start date".to_string(),
            ));
        }
        Ok((start, end))
    }
}

#[allow(async_fn_in_trait)]
pub trait BookingRepository {
    async fn read_bookings(&self) -> Result<Vec<Booking>, ApiError>;
    async fn read_bookings_of_user(&self, user_id: &UserID) -> Result<Vec<Booking>, ApiError>;
    async fn read_booking(&self, id: BookingID) -> Result<Booking, ApiError>;
    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, ApiError>;
    async fn update_booking_status(
        &self,
        id: BookingID,
        status: BookingStatus,
        accommodation_id: AccommodationID,
    ) -> Result<Booking, ApiError>;
    async fn delete_booking(&self, id: BookingID) -> Result<String, ApiError>;
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Missing(field.to_string()));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::Other(format!("Invalid {field}")))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingID,
    pub accommodation_id: AccommodationID,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    pub final_price: f64,
    pub discount_applied: f64,
}

impl Booking {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == BookingStatus::Pending
    }

    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

#[derive(
    Deref, Display, From, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct BookingID(u32);

#[derive(StrumDisplay, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum BookingStatus {
    Pending,
    Success,
    Cancelled,
}

/// Prices are intentionally absent, the backend derives them from the accommodation and the
/// user's membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub accommodation_id: AccommodationID,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
