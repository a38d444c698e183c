//! Configuration management module.
//!
//! Loads the exporter configuration from a TOML file (`config.toml` by
//! default) and applies command line / environment overrides.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **http_server**: listen address and actix worker settings
//! - **probe**: default appliance port and probe timeout
//!
//! # Example
//!
//! ```rust,ignore
//! use leontp_exporter::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! config.validate()?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
