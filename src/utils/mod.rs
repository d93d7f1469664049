//! Utility functions and helpers.
//!
//! - [`dom`] - Browser API access
//! - [`format`] - Markup stripping for plain-text output
//! - [`logger`] - `log` backend for the browser console
//! - [`sound`] - UI sound effects

pub mod dom;
pub mod format;
pub mod logger;
pub mod sound;
