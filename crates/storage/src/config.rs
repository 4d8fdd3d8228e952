use koshub_domain::Domain;

pub const LIVING_SUPPORT_API: &str = "KOSHUB_LIVING_SUPPORT_API";
pub const ACCOMMODATION_API: &str = "KOSHUB_ACCOMMODATION_API";

pub const DEFAULT_LIVING_SUPPORT_API: &str = "http://localhost:3010";
pub const DEFAULT_ACCOMMODATION_API: &str = "http://localhost:3000";

/// Base URLs of the two backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub living_support_api: String,
    pub accommodation_api: String,
}

impl Config {
    #[must_use]
    pub fn new(living_support_api: &str, accommodation_api: &str) -> Self {
        Self {
            living_support_api: living_support_api.trim_end_matches('/').to_string(),
            accommodation_api: accommodation_api.trim_end_matches('/').to_string(),
        }
    }

    /// Uses the values given at build time, as there is no process environment in the browser.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            LIVING_SUPPORT_API => option_env!("KOSHUB_LIVING_SUPPORT_API").map(str::to_string),
            ACCOMMODATION_API => option_env!("KOSHUB_ACCOMMODATION_API").map(str::to_string),
            _ => None,
        })
    }

    /// Unset or blank values fall back to the local development defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self::new(
            value(LIVING_SUPPORT_API, DEFAULT_LIVING_SUPPORT_API).trim(),
            value(ACCOMMODATION_API, DEFAULT_ACCOMMODATION_API).trim(),
        )
    }

    #[must_use]
    pub fn base_url(&self, domain: Domain) -> &str {
        match domain {
            Domain::Primary => &self.living_support_api,
            Domain::Partner => &self.accommodation_api,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_LIVING_SUPPORT_API, DEFAULT_ACCOMMODATION_API)
    }
}
