//! # prizedraw_core
//!
//! Core domain logic for the Prizedraw webapp client.

pub mod api;
pub mod auth;
pub mod config;
pub mod controller;
pub mod launch;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
