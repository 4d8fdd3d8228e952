use strum::{Display, EnumIter};

use crate::{SessionError, User};

/// Expiry assumed when a backend does not state one.
pub const DEFAULT_EXPIRES_IN: u64 = 3600;

/// One of the two backends, each with its own session.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    #[strum(serialize = "Living Support")]
    Primary,
    #[strum(serialize = "Accommodation")]
    Partner,
}

impl Domain {
    #[must_use]
    pub fn token_key(self) -> &'static str {
        match self {
            Domain::Primary => "access_token",
            Domain::Partner => "accommodation_token",
        }
    }

    #[must_use]
    pub fn user_key(self) -> &'static str {
        match self {
            Domain::Primary => "user",
            Domain::Partner => "accommodation_user",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub expires_in: u64,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

/// Persistence of the credentials of both domains.
///
/// The two domains are stored under disjoint keys. Clearing one domain must leave the other one
/// untouched.
pub trait SessionRepository {
    fn save_session(&self, domain: Domain, token: &str, user: &User) -> Result<(), SessionError>;
    fn load_session(&self, domain: Domain) -> Result<Option<StoredSession>, SessionError>;
    fn clear_session(&self, domain: Domain);
    fn token(&self, domain: Domain) -> Option<String>;

    fn is_authenticated(&self, domain: Domain) -> bool {
        self.token(domain).is_some()
    }
}
