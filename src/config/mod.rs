/// Database configuration and connection management
pub mod database;

/// Reference data (tags, ingredients) loading from config.toml
pub mod catalog;

/// Environment-driven settings
pub mod settings;
