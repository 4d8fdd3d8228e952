use koshub_domain::{AuthService, CateringMenu, CateringService, MealType, NewCateringOrder};
use log::warn;

use super::Redirect;

pub const MENU_ERROR: &str = "Failed to load menu. Please try again later.";
pub const ORDER_ERROR: &str = "Failed to place order";
pub const ORDER_SUCCESS: &str = "Catering order placed successfully!";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CateringPage {
    pub menu: Option<CateringMenu>,
    pub form: NewCateringOrder,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl CateringPage {
    pub async fn mount<S>(service: &S) -> Result<Self, Redirect>
    where
        S: AuthService + CateringService,
    {
        super::ensure_session(service)?;
        let mut page = Self {
            form: new_form(None),
            ..Self::default()
        };
        page.load_menu(service).await;
        Ok(page)
    }

    pub async fn load_menu(&mut self, service: &impl CateringService) {
        match service.get_catering_menu().await {
            Ok(menu) => {
                if let Some(name) = menu.first_item_name(self.form.meal_type) {
                    self.form.menu_name = name.to_string();
                }
                self.menu = Some(menu);
            }
            Err(err) => {
                warn!("failed to load catering menu: {err}");
                self.error = Some(MENU_ERROR.to_string());
            }
        }
    }

    /// Switches the meal type and preselects its first item.
    pub fn select_meal_type(&mut self, meal_type: MealType) {
        self.form.meal_type = meal_type;
        self.form.menu_name = self
            .menu
            .as_ref()
            .and_then(|menu| menu.first_item_name(meal_type))
            .unwrap_or_default()
            .to_string();
    }

    /// Estimated price of the current selection.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.menu.as_ref().map_or(0.0, |menu| {
            menu.price(self.form.meal_type, &self.form.menu_name, self.form.quantity)
        })
    }

    pub async fn submit(&mut self, service: &impl CateringService) {
        self.error = None;
        self.success = None;
        match service.create_catering_order(self.form.clone()).await {
            Ok(_) => {
                self.success = Some(ORDER_SUCCESS.to_string());
                self.form = new_form(self.menu.as_ref());
            }
            Err(err) => self.error = Some(err.user_message(ORDER_ERROR)),
        }
    }
}

fn new_form(menu: Option<&CateringMenu>) -> NewCateringOrder {
    let meal_type = MealType::default();
    NewCateringOrder {
        meal_type,
        menu_name: menu
            .and_then(|menu| menu.first_item_name(meal_type))
            .unwrap_or_default()
            .to_string(),
        quantity: 1,
        ..NewCateringOrder::default()
    }
}
