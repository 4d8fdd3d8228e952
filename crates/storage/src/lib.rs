#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::sync::{Arc, Mutex};

use koshub_domain::Service;

mod config;
pub mod local_storage;
pub mod rest;

pub use config::*;

pub type Gateway = Service<rest::REST<rest::GlooNetSendRequest, local_storage::LocalStorage>>;

/// Both backends behind a single service, with sessions kept in local storage.
#[must_use]
pub fn gateway(config: &Config) -> Gateway {
    Service::new(rest::REST::new(config, local_storage::LocalStorage))
}

pub type Preferences = koshub_web_app::Service<local_storage::LocalStorage>;

/// Settings and persisted log entries.
#[must_use]
pub fn preferences() -> Preferences {
    koshub_web_app::Service::new(local_storage::LocalStorage)
}

/// Installs the console logger with its entries kept in local storage.
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    koshub_web_app::log::init(Arc::new(Mutex::new(local_storage::LocalStorage)))
}
