//! Roster Core — student record store, CSV persistence, and configuration.

pub mod config;
pub mod csv_codec;
pub mod error;
pub mod models;
pub mod store;
