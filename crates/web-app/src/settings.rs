use koshub_domain::DEFAULT_NOTIFICATION_LIMIT;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Log out of the accommodation backend when leaving the accommodations page.
    pub partner_logout_on_leave: bool,
    pub notification_limit: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            partner_logout_on_leave: true,
            notification_limit: DEFAULT_NOTIFICATION_LIMIT,
        }
    }
}
