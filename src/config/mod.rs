//! Configuration module for krypt
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::KryptPaths;
pub use settings::Settings;
