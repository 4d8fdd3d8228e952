use chrono::{DateTime, Utc};
use derive_more::{Deref, Display, From};
use strum::Display as StrumDisplay;

use crate::ApiError;

pub const DEFAULT_NOTIFICATION_LIMIT: u32 = 50;

#[allow(async_fn_in_trait)]
pub trait NotificationService {
    async fn get_notifications(
        &self,
        filter: NotificationFilter,
        limit: u32,
    ) -> Result<Vec<Notification>, ApiError>;
    async fn get_unread_count(&self) -> Result<u32, ApiError>;
    async fn mark_notification_read(&self, id: NotificationID) -> Result<Notification, ApiError>;
    async fn mark_all_notifications_read(&self) -> Result<String, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait NotificationRepository {
    async fn read_notifications(
        &self,
        is_read: Option<bool>,
        limit: u32,
    ) -> Result<Vec<Notification>, ApiError>;
    async fn read_unread_count(&self) -> Result<u32, ApiError>;
    async fn mark_notification_read(&self, id: NotificationID) -> Result<Notification, ApiError>;
    async fn mark_all_notifications_read(&self) -> Result<String, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationID,
    pub kind: NotificationType,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub reference_id: Option<u32>,
}

#[derive(
    Deref, Display, From, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct NotificationID(u32);

#[derive(StrumDisplay, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationType {
    Laundry,
    Catering,
    Booking,
    Other,
}

impl From<&str> for NotificationType {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "laundry" => NotificationType::Laundry,
            "catering" => NotificationType::Catering,
            "booking" => NotificationType::Booking,
            _ => NotificationType::Other,
        }
    }
}

#[derive(StrumDisplay, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Read,
}

impl NotificationFilter {
    #[must_use]
    pub fn is_read(self) -> Option<bool> {
        match self {
            NotificationFilter::All => None,
            NotificationFilter::Unread => Some(false),
            NotificationFilter::Read => Some(true),
        }
    }
}

/// Marks the notification with `id` as read, returns `false` if there is none.
pub fn mark_read(notifications: &mut [Notification], id: NotificationID) -> bool {
    match notifications.iter_mut().find(|n| n.id == id) {
        Some(notification) => {
            notification.is_read = true;
            true
        }
        None => false,
    }
}

pub fn mark_all_read(notifications: &mut [Notification]) {
    for notification in notifications {
        notification.is_read = true;
    }
}

#[must_use]
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}
