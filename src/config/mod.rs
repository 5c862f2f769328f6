//! Configuration module for TiffinCLI
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TiffinPaths;
pub use settings::Settings;
