//! ds-detail - dolphin stats detail screen.
//!
//! Reads the device's gamification counters (icounter, butthurt, level)
//! once and shows them as a three-item menu until the user presses BACK.
//!
//! Everything here is pure logic behind the [`platform`] traits, so it
//! runs on the host as well as on the target.
//!
//! Usage: `cargo test` (host), or for the firmware:
//! `cargo run --release --features embedded --target thumbv7em-none-eabihf`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and provides the board implementation of [`platform::Platform`].

#![cfg_attr(not(test), no_std)]

// Must come first: defines the logging macros used by the modules below.
mod fmt;

pub mod app;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod format;
pub mod main_scene;
pub mod mock;
pub mod platform;
pub mod scene;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::ds_detail;
pub use error::Error;
