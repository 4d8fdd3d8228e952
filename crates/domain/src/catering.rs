use derive_more::{Deref, Display, From};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

use crate::{ApiError, BookingID, OrderStatus};

#[allow(async_fn_in_trait)]
pub trait CateringService {
    async fn get_catering_menu(&self) -> Result<CateringMenu, ApiError>;
    async fn get_catering_orders(&self) -> Result<Vec<CateringOrder>, ApiError>;
    async fn get_catering_order(&self, id: CateringOrderID) -> Result<CateringOrder, ApiError>;
    async fn create_catering_order(
        &self,
        order: NewCateringOrder,
    ) -> Result<CateringOrder, ApiError>;
    async fn modify_catering_order(
        &self,
        id: CateringOrderID,
        changes: CateringOrderChanges,
    ) -> Result<CateringOrder, ApiError>;
    async fn update_catering_status(
        &self,
        id: CateringOrderID,
        status: OrderStatus,
    ) -> Result<CateringOrder, ApiError>;
    async fn cancel_catering_order(&self, id: CateringOrderID) -> Result<String, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait CateringRepository {
    async fn read_catering_menu(&self) -> Result<CateringMenu, ApiError>;
    async fn read_catering_orders(&self) -> Result<Vec<CateringOrder>, ApiError>;
    async fn read_catering_order(&self, id: CateringOrderID) -> Result<CateringOrder, ApiError>;
    async fn create_catering_order(
        &self,
        order: NewCateringOrder,
    ) -> Result<CateringOrder, ApiError>;
    async fn modify_catering_order(
        &self,
        id: CateringOrderID,
        changes: CateringOrderChanges,
    ) -> Result<CateringOrder, ApiError>;
    async fn update_catering_status(
        &self,
        id: CateringOrderID,
        status: OrderStatus,
    ) -> Result<CateringOrder, ApiError>;
    async fn cancel_catering_order(&self, id: CateringOrderID) -> Result<String, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CateringOrder {
    pub id: CateringOrderID,
    pub meal_type: MealType,
    pub menu_name: String,
    pub quantity: u32,
    pub delivery_date: String,
    pub delivery_time: String,
    pub delivery_address: Option<String>,
    pub special_requests: Option<String>,
    pub status: OrderStatus,
    pub total_price: Option<f64>,
    pub booking_id: Option<BookingID>,
}

#[derive(
    Deref, Display, From, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct CateringOrderID(u32);

#[derive(StrumDisplay, EnumString, EnumIter, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CateringMenu {
    pub breakfast: Vec<MenuItem>,
    pub lunch: Vec<MenuItem>,
    pub dinner: Vec<MenuItem>,
    pub snack: Vec<MenuItem>,
}

impl CateringMenu {
    #[must_use]
    pub fn items(&self, meal_type: MealType) -> &[MenuItem] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }

    #[must_use]
    pub fn item(&self, meal_type: MealType, name: &str) -> Option<&MenuItem> {
        self.items(meal_type).iter().find(|i| i.name == name)
    }

    #[must_use]
    pub fn first_item_name(&self, meal_type: MealType) -> Option<&str> {
        self.items(meal_type).first().map(|i| i.name.as_str())
    }

    /// Estimated price of an order, zero if the item is not on the menu.
    #[must_use]
    pub fn price(&self, meal_type: MealType, name: &str, quantity: u32) -> f64 {
        self.item(meal_type, name)
            .map_or(0.0, |i| i.price * f64::from(quantity))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NewCateringOrder {
    pub meal_type: MealType,
    pub menu_name: String,
    pub quantity: u32,
    pub delivery_date: String,
    pub delivery_time: String,
    pub delivery_address: String,
    pub special_requests: String,
    pub booking_id: Option<BookingID>,
}

/// Partial update, fields set to `None` are left unchanged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CateringOrderChanges {
    pub meal_type: Option<MealType>,
    pub menu_name: Option<String>,
    pub quantity: Option<u32>,
    pub delivery_date: Option<String>,
    pub delivery_time: Option<String>,
    pub delivery_address: Option<String>,
    pub special_requests: Option<String>,
}
