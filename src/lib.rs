//! GelOS: a browser desktop with a terminal over a read-only virtual
//! filesystem.
//!
//! The [`core`] module is host-independent and drives both the Leptos
//! desktop ([`app`], [`components`]) and the native `gelos-cli` REPL.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
