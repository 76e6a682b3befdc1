//! Configuration module for the toolbox
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ToolboxPaths;
pub use settings::Settings;
