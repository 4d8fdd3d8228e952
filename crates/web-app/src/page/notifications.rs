use koshub_domain::{
    AuthService, Notification, NotificationFilter, NotificationID, NotificationService,
    mark_all_read, mark_read, unread_count,
};
use log::warn;

use super::Redirect;
use crate::Settings;

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationsPage {
    pub filter: NotificationFilter,
    pub notifications: Vec<Notification>,
    limit: u32,
}

impl NotificationsPage {
    pub async fn mount<S>(service: &S, settings: &Settings) -> Result<Self, Redirect>
    where
        S: AuthService + NotificationService,
    {
        super::ensure_session(service)?;
        let mut page = Self {
            filter: NotificationFilter::default(),
            notifications: vec![],
            limit: settings.notification_limit,
        };
        page.load(service).await;
        Ok(page)
    }

    /// A failed request leaves the list empty.
    pub async fn load(&mut self, service: &impl NotificationService) {
        self.notifications = service
            .get_notifications(self.filter, self.limit)
            .await
            .unwrap_or_else(|err| {
                warn!("failed to load notifications: {err}");
                vec![]
            });
    }

    pub async fn set_filter(
        &mut self,
        service: &impl NotificationService,
        filter: NotificationFilter,
    ) {
        self.filter = filter;
        self.load(service).await;
    }

    /// Only the local copy is updated on success, the list is not fetched again.
    pub async fn mark_read(&mut self, service: &impl NotificationService, id: NotificationID) {
        match service.mark_notification_read(id).await {
            Ok(_) => {
                mark_read(&mut self.notifications, id);
            }
            Err(err) => warn!("failed to mark notification {id} as read: {err}"),
        }
    }

    pub async fn mark_all_read(&mut self, service: &impl NotificationService) {
        match service.mark_all_notifications_read().await {
            Ok(_) => mark_all_read(&mut self.notifications),
            Err(err) => warn!("failed to mark all notifications as read: {err}"),
        }
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        unread_count(&self.notifications)
    }
}
