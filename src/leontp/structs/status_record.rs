use chrono::{DateTime, Utc};

/// Decoded snapshot of one appliance reply.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct StatusRecord {
    pub reference_timestamp_fraction: u32,
    /// Seconds since 1900-01-01T00:00:00Z.
    pub reference_timestamp_seconds: u32,
    pub uptime_seconds: u32,
    pub ntp_request_count: u32,
    pub gps_lock_seconds: u32,
    pub firmware_version: u32,
    /// Opaque bitfield, passed through as received.
    pub status_flags: u8,
    pub satellite_count: u8,
    pub serial_number: u16,
    /// Reference timestamp converted to the Unix epoch.
    pub observed_at: DateTime<Utc>,
}
