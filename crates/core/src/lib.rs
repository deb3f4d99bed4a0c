//! Sparkshop Core - Shared types library.
//!
//! This crate provides the domain types used across all Sparkshop
//! components:
//! - `storefront` - JSON backend for the mobile shopping app
//! - `integration-tests` - Cross-crate test suite
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, catalog entities, orders, and store settings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
