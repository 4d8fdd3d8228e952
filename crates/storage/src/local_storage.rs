use std::collections::VecDeque;

use gloo_storage::{Storage as GlooStorage, errors::StorageError};
use koshub_domain::{Domain, SessionError, SessionRepository, StoredSession, User};
use koshub_web_app::{Settings, SettingsRepository, log};

use crate::rest;

/// Sessions, settings and the log, kept in the browser's local storage.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

const KEY_SETTINGS: &str = "settings";

impl SessionRepository for LocalStorage {
    fn save_session(&self, domain: Domain, token: &str, user: &User) -> Result<(), SessionError> {
        gloo_storage::LocalStorage::set(domain.token_key(), token)
            .and_then(|()| {
                gloo_storage::LocalStorage::set(domain.user_key(), rest::User::from(user.clone()))
            })
            .map_err(|err| SessionError::Storage(err.to_string()))
    }

    fn load_session(&self, domain: Domain) -> Result<Option<StoredSession>, SessionError> {
        let token = match gloo_storage::LocalStorage::get::<String>(domain.token_key()) {
            Ok(token) => token,
            Err(StorageError::KeyNotFound(_)) => return Ok(None),
            Err(err) => return Err(session_error(err)),
        };
        let user = match gloo_storage::LocalStorage::get::<rest::User>(domain.user_key()) {
            Ok(user) => user,
            Err(StorageError::KeyNotFound(_)) => {
                return Err(SessionError::Corrupt(format!(
                    "{domain} session has a token but no user"
                )));
            }
            Err(err) => return Err(session_error(err)),
        };
        Ok(Some(StoredSession {
            token,
            user: user.into(),
        }))
    }

    fn clear_session(&self, domain: Domain) {
        gloo_storage::LocalStorage::delete(domain.token_key());
        gloo_storage::LocalStorage::delete(domain.user_key());
    }

    fn token(&self, domain: Domain) -> Option<String> {
        gloo_storage::LocalStorage::get(domain.token_key()).ok()
    }
}

fn session_error(err: StorageError) -> SessionError {
    match err {
        StorageError::SerdeError(err) => SessionError::Corrupt(err.to_string()),
        err => SessionError::Storage(err.to_string()),
    }
}

impl SettingsRepository for LocalStorage {
    async fn read_settings(&self) -> Result<Settings, String> {
        match gloo_storage::LocalStorage::get(KEY_SETTINGS) {
            Ok(settings) => Ok(settings),
            Err(err) => match err {
                StorageError::KeyNotFound(_) => Ok(Settings::default()),
                err => Err(err),
            },
        }
        .map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        gloo_storage::LocalStorage::set(KEY_SETTINGS, settings).map_err(|err| err.to_string())
    }
}

const KEY_LOG: &str = "log";

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
