//! Operario Web - browser automation for portal robots.
//!
//! Launches Chromium with the robot's standard flags (window size,
//! `pt-BR` accept-language, headless by default, downloads routed to the
//! configured directory) and wraps pages in the small set of actions
//! portal automations actually use: navigate, wait for a selector, click
//! (synthesized or via JavaScript), type and read text.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]

pub mod actions;
pub mod driver;
pub mod error;

pub use actions::{extract_domain, PageActions};
pub use driver::Driver;
pub use error::{WebError, WebResult};
