#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
pub mod page;
mod service;
mod settings;

pub use service::*;
pub use settings::*;
