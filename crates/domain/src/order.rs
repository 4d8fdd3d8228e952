use derive_more::Display;

/// Status of a laundry or catering order.
///
/// The backend uses free-form strings in varying case, so the status is kept verbatim and only
/// interpreted for display.
#[derive(Display, Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderStatus(String);

impl OrderStatus {
    #[must_use]
    pub fn new(status: &str) -> Self {
        Self(status.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is(&self, status: &str) -> bool {
        self.0.trim().eq_ignore_ascii_case(status)
    }

    #[must_use]
    pub fn category(&self) -> StatusCategory {
        match self.0.trim().to_ascii_lowercase().as_str() {
            "pending" => StatusCategory::Pending,
            "processing" | "preparing" => StatusCategory::Processing,
            "completed" | "delivered" | "success" => StatusCategory::Completed,
            "cancelled" => StatusCategory::Cancelled,
            _ => StatusCategory::Other,
        }
    }

    /// Pending and processing orders count as active, `preparing` is shown like processing but
    /// not counted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is("pending") || self.is("processing")
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Pending,
    Processing,
    Completed,
    Cancelled,
    Other,
}

#[must_use]
pub fn count_active<'a>(statuses: impl IntoIterator<Item = &'a OrderStatus>) -> usize {
    statuses.into_iter().filter(|s| s.is_active()).count()
}
