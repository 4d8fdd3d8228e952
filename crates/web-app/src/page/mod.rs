//! UI-independent state of the pages.
//!
//! A page is created by `mount` and changed only through its methods, which call the services and
//! update the state accordingly. Rendering is left to the frontend.

use koshub_domain::{AuthService, Domain, User};
use log::warn;

pub mod accommodations;
pub mod catering;
pub mod dashboard;
pub mod notifications;

/// Returned by `mount` if the page requires a session that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    LogIn,
}

fn ensure_session(service: &impl AuthService) -> Result<(), Redirect> {
    if service.is_authenticated(Domain::Primary) {
        Ok(())
    } else {
        Err(Redirect::LogIn)
    }
}

/// A stored session that cannot be read is discarded, so that the user can log in again.
fn stored_user(service: &impl AuthService, domain: Domain) -> Option<User> {
    if !service.is_authenticated(domain) {
        return None;
    }
    match service.get_session(domain) {
        Ok(session) => session.map(|s| s.user),
        Err(err) => {
            warn!("discarding {domain} session: {err}");
            service.log_out(domain);
            None
        }
    }
}
