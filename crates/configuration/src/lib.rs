//! # Roster Configuration Crate
//!
//! Loads the runtime settings of the service from the process environment
//! (`DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `PORT`).
//! Settings are read exactly once at startup; nothing in this crate is
//! consulted again while the service is running.

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::Settings;
