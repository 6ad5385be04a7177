//! Operario Captcha - captcha solving for portal automations.
//!
//! Thin async client for a 2Captcha-compatible service: normal image
//! captchas (from file, URL or raw bytes), reCAPTCHA v2 and v3, and the
//! account balance query. Polling cadence and the give-up deadline come
//! from [`operario_core::CaptchaConfig`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod solver;

pub use error::{CaptchaError, CaptchaResult};
pub use solver::CaptchaSolver;
