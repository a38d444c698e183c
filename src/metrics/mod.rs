//! Prometheus text exposition for appliance status.
//!
//! The exposition body is rendered fresh for every scrape from a single
//! [`StatusRecord`]; no registry or collector state outlives the request.
//!
//! # Exposed gauges
//!
//! - `leontp_uptime_seconds`
//! - `leontp_ntp_request_count`
//! - `leontp_lock_time_seconds`
//! - `leontp_satellites_count`
//!
//! [`StatusRecord`]: crate::leontp::structs::status_record::StatusRecord

/// Gauge descriptor structure.
pub mod structs;

/// Gauge rendering.
pub mod impls;

/// Gauge definitions and status rendering.
#[allow(clippy::module_inception)]
pub mod metrics;
