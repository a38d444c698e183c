//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTP server configuration.
pub mod http_server_config;

/// Appliance probe configuration.
pub mod probe_config;
