//! Roster Core - Shared types library.
//!
//! This crate provides common types used across all Roster components:
//! - `api` - The versioned users REST API
//! - `integration-tests` - End-to-end router tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no global state. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs
//! - [`shape`] - Allow-list based response shaping

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod shape;
pub mod types;

pub use types::*;
