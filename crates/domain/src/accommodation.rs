use derive_more::{Deref, Display, From};

use crate::ApiError;

#[allow(async_fn_in_trait)]
pub trait AccommodationService {
    async fn get_accommodations(&self) -> Result<Vec<Accommodation>, ApiError>;
    async fn get_accommodation(&self, id: AccommodationID) -> Result<Accommodation, ApiError>;
    async fn create_accommodation(
        &self,
        accommodation: NewAccommodation,
    ) -> Result<Accommodation, ApiError>;
    async fn modify_accommodation(
        &self,
        id: AccommodationID,
        changes: AccommodationChanges,
    ) -> Result<Accommodation, ApiError>;
    async fn delete_accommodation(&self, id: AccommodationID) -> Result<String, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait AccommodationRepository {
    async fn read_accommodations(&self) -> Result<Vec<Accommodation>, ApiError>;
    async fn read_accommodation(&self, id: AccommodationID) -> Result<Accommodation, ApiError>;
    async fn create_accommodation(
        &self,
        accommodation: NewAccommodation,
    ) -> Result<Accommodation, ApiError>;
    async fn modify_accommodation(
        &self,
        id: AccommodationID,
        changes: AccommodationChanges,
    ) -> Result<Accommodation, ApiError>;
    async fn delete_accommodation(&self, id: AccommodationID) -> Result<String, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Accommodation {
    pub id: AccommodationID,
    pub name: String,
    pub address: String,
    pub city: String,
    pub price: f64,
    pub available_units: u32,
    pub total_units: u32,
}

impl Accommodation {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available_units > 0
    }
}

#[derive(
    Deref, Display, From, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct AccommodationID(u32);

#[derive(Debug, Clone, PartialEq)]
pub struct NewAccommodation {
    pub name: String,
    pub address: String,
    pub city: String,
    pub price: f64,
    pub available_units: u32,
    pub total_units: u32,
}

/// Partial update, fields set to `None` are left unchanged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AccommodationChanges {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub price: Option<f64>,
    pub available_units: Option<u32>,
    pub total_units: Option<u32>,
}
