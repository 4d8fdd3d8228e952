#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod accommodation;
mod auth;
mod booking;
mod catering;
mod error;
mod laundry;
mod notification;
mod order;
mod service;
mod session;
mod user;

pub use accommodation::*;
pub use auth::*;
pub use booking::*;
pub use catering::*;
pub use error::*;
pub use laundry::*;
pub use notification::*;
pub use order::*;
pub use service::*;
pub use session::*;
pub use user::*;
