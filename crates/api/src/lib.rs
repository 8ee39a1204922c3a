//! Roster API library.
//!
//! This crate provides the versioned users API as a library, allowing it to
//! be tested and reused. The binary in `main.rs` is a thin bootstrap around
//! [`routes::routes`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod views;
