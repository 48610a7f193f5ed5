//! Settings persistence for the PR widget
//!
//! This crate provides:
//! - File path utilities for the config directory
//! - The persisted settings (token, theme, poll interval), stored as TOML
//! - Token format validation

pub mod paths;
pub mod settings;
pub mod theme;

pub use paths::{config_dir, settings_path};
pub use settings::{token_looks_valid, Settings};
pub use theme::{parse_hex, Theme};
