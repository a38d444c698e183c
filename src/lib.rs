//! # LeoNTP Exporter
//!
//! Prometheus exporter for LeoNTP GPS-disciplined time servers.
//!
//! ## Overview
//!
//! LeoNTP appliances report their internal counters through a private-mode
//! request on the NTP port. This crate probes one appliance per scrape over
//! UDP, decodes the fixed-layout status reply and republishes the counters as
//! Prometheus gauges over HTTP:
//!
//! ```text
//! GET /metrics?target=192.168.1.10
//!
//! leontp_uptime_seconds 3600
//! leontp_ntp_request_count 42
//! leontp_lock_time_seconds 7200
//! leontp_satellites_count 9
//! ```
//!
//! Each scrape performs exactly one UDP exchange. There is no caching and no
//! retry; an unreachable appliance yields an empty (but successful) scrape and
//! an error log line naming the failing stage.
//!
//! ## Modules
//!
//! - [`leontp`] - Status request, UDP client, reply decoder and timestamp conversion
//! - [`metrics`] - Prometheus text exposition of a decoded status
//! - [`http`] - Scrape endpoint
//! - [`config`] - TOML configuration
//! - [`common`] - Query parsing and logging setup
//! - [`structs`] - CLI arguments

/// Common utilities and shared functionality.
///
/// Contains helper functions for query parsing, logging setup and the
/// startup error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validating and saving the TOML configuration, and applies
/// command line and environment overrides.
pub mod config;

/// HTTP scrape endpoint.
pub mod http;

/// LeoNTP status protocol client and decoder.
pub mod leontp;

/// Prometheus exposition of appliance status.
pub mod metrics;

/// CLI argument parsing.
pub mod structs;
