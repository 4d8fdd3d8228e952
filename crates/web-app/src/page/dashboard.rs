use futures_util::future::join;
use koshub_domain::{
    AuthService, Booking, BookingService, CateringOrder, CateringService, Domain, LaundryOrder,
    LaundryService, UserID, count_active,
};
use log::{error, info, warn};

use super::Redirect;

pub const PAYMENT_ERROR: &str = "Failed to process payment";
pub const CANCEL_ERROR: &str = "Failed to cancel booking";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DashboardPage {
    pub laundry_orders: Vec<LaundryOrder>,
    pub catering_orders: Vec<CateringOrder>,
    /// `None` if the accommodation backend could not provide the bookings.
    pub bookings: Option<Vec<Booking>>,
    pub alert: Option<String>,
    partner_user_id: Option<UserID>,
}

impl DashboardPage {
    pub async fn mount<S>(service: &S) -> Result<Self, Redirect>
    where
        S: AuthService + LaundryService + CateringService + BookingService,
    {
        super::ensure_session(service)?;
        let mut page = Self {
            partner_user_id: super::stored_user(service, Domain::Partner).map(|u| u.id),
            ..Self::default()
        };
        page.load(service).await;
        Ok(page)
    }

    /// A failing order list does not prevent the other one from being shown.
    pub async fn load<S>(&mut self, service: &S)
    where
        S: LaundryService + CateringService + BookingService,
    {
        let (laundry_orders, catering_orders) =
            join(service.get_laundry_orders(), service.get_catering_orders()).await;
        match laundry_orders {
            Ok(orders) => self.laundry_orders = orders,
            Err(err) => error!("failed to load laundry orders: {err}"),
        }
        match catering_orders {
            Ok(orders) => self.catering_orders = orders,
            Err(err) => error!("failed to load catering orders: {err}"),
        }
        self.refresh_bookings(service).await;
    }

    pub async fn refresh_bookings(&mut self, service: &impl BookingService) {
        let Some(user_id) = &self.partner_user_id else {
            self.bookings = None;
            return;
        };
        self.bookings = match service.get_bookings_of_user(user_id).await {
            Ok(bookings) => Some(bookings),
            Err(err) => {
                info!("bookings not available: {err}");
                None
            }
        };
    }

    #[must_use]
    pub fn total_laundry(&self) -> usize {
        self.laundry_orders.len()
    }

    #[must_use]
    pub fn total_catering(&self) -> usize {
        self.catering_orders.len()
    }

    #[must_use]
    pub fn active_orders(&self) -> usize {
        count_active(
            self.laundry_orders
                .iter()
                .map(|o| &o.status)
                .chain(self.catering_orders.iter().map(|o| &o.status)),
        )
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

    pub async fn cancel(&mut self, service: &impl BookingService, booking: &Booking) {
        match service.cancel_booking(booking).await {
            Ok(_) => self.refresh_bookings(service).await,
            Err(err) => {
                warn!("failed to cancel booking {}: {err}", booking.id);
                self.alert = Some(CANCEL_ERROR.to_string());
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
