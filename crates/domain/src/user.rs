use derive_more::{Deref, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserID,
    pub email: String,
    pub name: String,
    pub membership_level: Option<String>,
    pub discount_rate: Option<f64>,
}

impl User {
    #[must_use]
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate.unwrap_or_default()
    }

    /// Estimated discount for displaying before a booking is made.
    ///
    /// The backend computes the binding `final_price` and `discount_applied` when the booking is
    /// created. This estimate must never be sent to it.
    #[must_use]
    pub fn discount_preview(&self, price: f64) -> DiscountPreview {
        DiscountPreview::new(price, self.discount_rate())
    }
}

/// Opaque user identifier, the backends use both numbers and strings.
#[derive(Deref, Display, Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserID(String);

impl AsRef<str> for UserID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for UserID {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountPreview {
    pub price: f64,
    pub discount: f64,
    pub final_price: f64,
}

impl DiscountPreview {
    #[must_use]
    pub fn new(price: f64, discount_rate: f64) -> Self {
        let discount = price * discount_rate;
        Self {
            price,
            discount,
            final_price: price - discount,
        }
    }

    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }
}

/// Discount preview for an optional (not yet authenticated) user.
#[must_use]
pub fn discount_preview(user: Option<&User>, price: f64) -> DiscountPreview {
    match user {
        Some(user) => user.discount_preview(price),
        None => DiscountPreview::new(price, 0.0),
    }
}
