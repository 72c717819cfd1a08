//! Shared test fixtures for seatplan crates.
//!
//! This crate provides guest and table data for tests.
//! It depends only on `seatplan-core` so every other crate can use it.
//!
//! - [`guests`] - guest constructors
//! - [`tables`] - table constructors
//! - [`wedding`] - a realistic mid-sized guest list
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! seatplan-test = { workspace = true }
//! ```

pub mod guests;
pub mod tables;
pub mod wedding;

pub use guests::plain;
pub use tables::tables;
pub use wedding::Wedding;
