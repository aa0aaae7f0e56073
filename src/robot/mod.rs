//! Core robot types and configuration.
//!
//! - [`commands`]: modes and operator commands, parsed from text tokens.
//! - [`config`]: body geometry and movement constants.
//! - [`leg`] and [`joint`]: enumerations and indexing helpers.
//! - [`servo`]: the actuation boundary.
//! - [`settings`]: runtime tunables and calibration, persisted as TOML.
pub mod commands;
pub mod config;
pub mod joint;
pub mod leg;
pub mod servo;
pub mod settings;
