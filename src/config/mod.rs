//! Configuration module for SpendPace
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PacePaths;
pub use settings::Settings;
