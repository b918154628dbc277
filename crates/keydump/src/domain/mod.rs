//! Domain types for the keydump application.

pub mod config;

pub use config::KeydumpConfig;
