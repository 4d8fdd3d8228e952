use log::{debug, error};

use crate::{
    Accommodation, AccommodationChanges, AccommodationID, AccommodationRepository,
    AccommodationService, ApiError, AuthError, AuthRepository, AuthService, Booking, BookingID,
    BookingRepository, BookingService, BookingStatus, CateringMenu, CateringOrder,
    CateringOrderChanges, CateringOrderID, CateringRepository, CateringService, Credentials,
    Domain, LaundryOrder, LaundryOrderChanges, LaundryOrderID, LaundryRepository, LaundryService,
    NewAccommodation, NewBooking, NewCateringOrder, NewLaundryOrder, Notification,
    NotificationFilter, NotificationID, NotificationRepository, NotificationService, OrderStatus,
    Registration, Session, SessionError, SessionRepository, StoredSession, User, UserID,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

// The transport has already logged status and URL, only the context is added here.
macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            debug!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: AuthRepository + SessionRepository> Service<R> {
    fn store_session(&self, domain: Domain, session: &Session) -> Result<(), AuthError> {
        self.repository
            .save_session(domain, &session.access_token, &session.user)
            .map_err(|err| {
                error!("failed to store {domain} session: {err}");
                AuthError::from(err)
            })
    }
}

impl<R: AuthRepository + SessionRepository> AuthService for Service<R> {
    async fn log_in(
        &self,
        domain: Domain,
        credentials: Credentials,
    ) -> Result<Session, AuthError> {
        let session = log_on_error!(self.repository.log_in(domain, credentials), "log in", "user")?;
        self.store_session(domain, &session)?;
        Ok(session)
    }

    async fn register(
        &self,
        domain: Domain,
        registration: Registration,
    ) -> Result<Session, AuthError> {
        let session = log_on_error!(
            self.repository.register(domain, registration),
            "register",
            "user"
        )?;
        self.store_session(domain, &session)?;
        Ok(session)
    }

    async fn change_password(&self, new_password: String) -> Result<String, ApiError> {
        log_on_error!(
            self.repository.change_password(new_password),
            "change",
            "password"
        )
    }

    async fn get_partner_user(&self, id: &UserID) -> Result<User, ApiError> {
        log_on_error!(
            self.repository.read_partner_user(id),
            "get",
            "partner user"
        )
    }

    fn log_out(&self, domain: Domain) {
        self.repository.clear_session(domain);
    }

    fn get_session(&self, domain: Domain) -> Result<Option<StoredSession>, SessionError> {
        self.repository.load_session(domain).inspect_err(|err| {
            error!("failed to load {domain} session: {err}");
        })
    }

    fn is_authenticated(&self, domain: Domain) -> bool {
        self.repository.is_authenticated(domain)
    }
}

impl<R: AccommodationRepository> AccommodationService for Service<R> {
    async fn get_accommodations(&self) -> Result<Vec<Accommodation>, ApiError> {
        log_on_error!(
            self.repository.read_accommodations(),
            "get",
            "accommodations"
        )
    }

    async fn get_accommodation(&self, id: AccommodationID) -> Result<Accommodation, ApiError> {
        log_on_error!(
            self.repository.read_accommodation(id),
            "get",
            "accommodation"
        )
    }

    async fn create_accommodation(
        &self,
        accommodation: NewAccommodation,
    ) -> Result<Accommodation, ApiError> {
        log_on_error!(
            self.repository.create_accommodation(accommodation),
            "create",
            "accommodation"
        )
    }

    async fn modify_accommodation(
        &self,
        id: AccommodationID,
        changes: AccommodationChanges,
    ) -> Result<Accommodation, ApiError> {
        log_on_error!(
            self.repository.modify_accommodation(id, changes),
            "modify",
            "accommodation"
        )
    }

    async fn delete_accommodation(&self, id: AccommodationID) -> Result<String, ApiError> {
        log_on_error!(
            self.repository.delete_accommodation(id),
            "delete",
            "accommodation"
        )
    }
}

impl<R: BookingRepository> BookingService for Service<R> {
    async fn get_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        log_on_error!(self.repository.read_bookings(), "get", "bookings")
    }

    async fn get_bookings_of_user(&self, user_id: &UserID) -> Result<Vec<Booking>, ApiError> {
        log_on_error!(
            self.repository.read_bookings_of_user(user_id),
            "get",
            "bookings of user"
        )
    }

    async fn get_booking(&self, id: BookingID) -> Result<Booking, ApiError> {
        log_on_error!(self.repository.read_booking(id), "get", "booking")
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, ApiError> {
        log_on_error!(
            self.repository.create_booking(booking),
            "create",
            "booking"
        )
    }

    async fn update_booking_status(
        &self,
        id: BookingID,
        status: BookingStatus,
        accommodation_id: AccommodationID,
    ) -> Result<Booking, ApiError> {
        log_on_error!(
            self.repository
                .update_booking_status(id, status, accommodation_id),
            "update",
            "booking status"
        )
    }

    async fn delete_booking(&self, id: BookingID) -> Result<String, ApiError> {
        log_on_error!(self.repository.delete_booking(id), "delete", "booking")
    }
}

impl<R: LaundryRepository> LaundryService for Service<R> {
    async fn get_laundry_orders(&self) -> Result<Vec<LaundryOrder>, ApiError> {
        log_on_error!(
            self.repository.read_laundry_orders(),
            "get",
            "laundry orders"
        )
    }

    async fn get_laundry_order(&self, id: LaundryOrderID) -> Result<LaundryOrder, ApiError> {
        log_on_error!(
            self.repository.read_laundry_order(id),
            "get",
            "laundry order"
        )
    }

    async fn create_laundry_order(
        &self,
        order: NewLaundryOrder,
    ) -> Result<LaundryOrder, ApiError> {
        log_on_error!(
            self.repository.create_laundry_order(order),
            "create",
            "laundry order"
        )
    }

    async fn modify_laundry_order(
        &self,
        id: LaundryOrderID,
        changes: LaundryOrderChanges,
    ) -> Result<LaundryOrder, ApiError> {
        log_on_error!(
            self.repository.modify_laundry_order(id, changes),
            "modify",
            "laundry order"
        )
    }

    async fn update_laundry_status(
        &self,
        id: LaundryOrderID,
        status: OrderStatus,
        delivery_date: Option<String>,
        delivery_time: Option<String>,
    ) -> Result<LaundryOrder, ApiError> {
        log_on_error!(
            self.repository
                .update_laundry_status(id, status, delivery_date, delivery_time),
            "update",
            "laundry status"
        )
    }

    async fn cancel_laundry_order(&self, id: LaundryOrderID) -> Result<String, ApiError> {
        log_on_error!(
            self.repository.cancel_laundry_order(id),
            "cancel",
            "laundry order"
        )
    }
}

impl<R: CateringRepository> CateringService for Service<R> {
    async fn get_catering_menu(&self) -> Result<CateringMenu, ApiError> {
        log_on_error!(
            self.repository.read_catering_menu(),
            "get",
            "catering menu"
        )
    }

    async fn get_catering_orders(&self) -> Result<Vec<CateringOrder>, ApiError> {
        log_on_error!(
            self.repository.read_catering_orders(),
            "get",
            "catering orders"
        )
    }

    async fn get_catering_order(&self, id: CateringOrderID) -> Result<CateringOrder, ApiError> {
        log_on_error!(
            self.repository.read_catering_order(id),
            "get",
            "catering order"
        )
    }

    async fn create_catering_order(
        &self,
        order: NewCateringOrder,
    ) -> Result<CateringOrder, ApiError> {
        log_on_error!(
            self.repository.create_catering_order(order),
            "create",
            "catering order"
        )
    }

    async fn modify_catering_order(
        &self,
        id: CateringOrderID,
        changes: CateringOrderChanges,
    ) -> Result<CateringOrder, ApiError> {
        log_on_error!(
            self.repository.modify_catering_order(id, changes),
            "modify",
            "catering order"
        )
    }

    async fn update_catering_status(
        &self,
        id: CateringOrderID,
        status: OrderStatus,
    ) -> Result<CateringOrder, ApiError> {
        log_on_error!(
            self.repository.update_catering_status(id, status),
            "update",
            "catering status"
        )
    }

    async fn cancel_catering_order(&self, id: CateringOrderID) -> Result<String, ApiError> {
        log_on_error!(
            self.repository.cancel_catering_order(id),
            "cancel",
            "catering order"
        )
    }
}

impl<R: NotificationRepository> NotificationService for Service<R> {
    async fn get_notifications(
        &self,
        filter: NotificationFilter,
        limit: u32,
    ) -> Result<Vec<Notification>, ApiError> {
        log_on_error!(
            self.repository.read_notifications(filter.is_read(), limit),
            "get",
            "notifications"
        )
    }

    async fn get_unread_count(&self) -> Result<u32, ApiError> {
        log_on_error!(
            self.repository.read_unread_count(),
            "get",
            "unread count"
        )
    }

    async fn mark_notification_read(&self, id: NotificationID) -> Result<Notification, ApiError> {
        log_on_error!(
            self.repository.mark_notification_read(id),
            "mark",
            "notification as read"
        )
    }

    async fn mark_all_notifications_read(&self) -> Result<String, ApiError> {
        log_on_error!(
            self.repository.mark_all_notifications_read(),
            "mark",
            "all notifications as read"
        )
    }
}
