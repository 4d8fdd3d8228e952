use derive_more::{Deref, Display, From};

use crate::{ApiError, BookingID, OrderStatus};

#[allow(async_fn_in_trait)]
pub trait LaundryService {
    async fn get_laundry_orders(&self) -> Result<Vec<LaundryOrder>, ApiError>;
    async fn get_laundry_order(&self, id: LaundryOrderID) -> Result<LaundryOrder, ApiError>;
    async fn create_laundry_order(&self, order: NewLaundryOrder)
    -> Result<LaundryOrder, ApiError>;
    async fn modify_laundry_order(
        &self,
        id: LaundryOrderID,
        changes: LaundryOrderChanges,
    ) -> Result<LaundryOrder, ApiError>;
    async fn update_laundry_status(
        &self,
        id: LaundryOrderID,
        status: OrderStatus,
        delivery_date: Option<String>,
        delivery_time: Option<String>,
    ) -> Result<LaundryOrder, ApiError>;
    async fn cancel_laundry_order(&self, id: LaundryOrderID) -> Result<String, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait LaundryRepository {
    async fn read_laundry_orders(&self) -> Result<Vec<LaundryOrder>, ApiError>;
    async fn read_laundry_order(&self, id: LaundryOrderID) -> Result<LaundryOrder, ApiError>;
    async fn create_laundry_order(&self, order: NewLaundryOrder)
    -> Result<LaundryOrder, ApiError>;
    async fn modify_laundry_order(
        &self,
        id: LaundryOrderID,
        changes: LaundryOrderChanges,
    ) -> Result<LaundryOrder, ApiError>;
    async fn update_laundry_status(
        &self,
        id: LaundryOrderID,
        status: OrderStatus,
        delivery_date: Option<String>,
        delivery_time: Option<String>,
    ) -> Result<LaundryOrder, ApiError>;
    async fn cancel_laundry_order(&self, id: LaundryOrderID) -> Result<String, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaundryOrder {
    pub id: LaundryOrderID,
    pub service_type: String,
    pub weight: Option<f64>,
    pub pickup_date: String,
    pub pickup_time: String,
    pub delivery_date: Option<String>,
    pub delivery_time: Option<String>,
    pub special_requests: Option<String>,
    pub status: OrderStatus,
    pub total_price: Option<f64>,
    pub booking_id: Option<BookingID>,
}

#[derive(
    Deref, Display, From, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct LaundryOrderID(u32);

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NewLaundryOrder {
    pub service_type: String,
    pub weight: Option<f64>,
    pub pickup_date: String,
    pub pickup_time: String,
    pub special_requests: Option<String>,
    pub booking_id: Option<BookingID>,
}

/// Partial update, fields set to `None` are left unchanged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LaundryOrderChanges {
    pub service_type: Option<String>,
    pub weight: Option<f64>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    pub special_requests: Option<String>,
}
