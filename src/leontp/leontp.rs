use std::net::{IpAddr, SocketAddr};
use chrono::{DateTime, TimeDelta, Utc};

pub const DEFAULT_PORT: u16 = 123;

pub const PROTOCOL_VERSION: u8 = 4;
pub const PRIVATE_MODE: u8 = 7;
pub const REQUEST_CODE: u8 = 0x10;
pub const REQUEST_SEQUENCE: u8 = 0x01;
pub const REQUEST_SIZE: usize = 9;

/// Smallest reply holding every consumed field (firmware version ends at 48).
pub const STATUS_REPLY_MIN_SIZE: usize = 48;

/// Receive buffer size; the real reply is far smaller.
pub const RECEIVE_BUFFER_SIZE: usize = 1024;

/// Seconds between 1900-01-01 and 1970-01-01.
pub const NTP_UNIX_EPOCH_OFFSET: i64 = 2_208_988_800;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Convert an NTP timestamp (seconds since 1900 plus a 32-bit binary fraction)
/// into a UTC timestamp. The fraction is rounded to the nearest nanosecond.
/// Seconds values below the epoch offset give pre-1970 timestamps.
pub fn ntp_to_datetime(seconds: u32, fraction: u32) -> DateTime<Utc> {
    let mut epoch_seconds = i64::from(seconds) - NTP_UNIX_EPOCH_OFFSET;
    let mut nanoseconds = (u64::from(fraction) * NANOS_PER_SECOND + (1 << 31)) >> 32;
    if nanoseconds >= NANOS_PER_SECOND {
        epoch_seconds += 1;
        nanoseconds -= NANOS_PER_SECOND;
    }
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(epoch_seconds) + TimeDelta::nanoseconds(nanoseconds as i64)
}

/// Build the `host:port` string probed for a scrape target.
///
/// A target that already names a port keeps it; otherwise `default_port` is
/// appended. Bare IPv6 literals are bracketed.
pub fn target_address(target: &str, default_port: u16) -> String {
    if let Ok(address) = target.parse::<SocketAddr>() {
        return address.to_string();
    }
    if let Ok(ip) = target.parse::<IpAddr>() {
        return SocketAddr::new(ip, default_port).to_string();
    }
    if let Some(ip) = target.strip_prefix('[').and_then(|t| t.strip_suffix(']')).and_then(|t| t.parse::<IpAddr>().ok()) {
        return SocketAddr::new(ip, default_port).to_string();
    }
    match target.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && !host.contains(':') && port.parse::<u16>().is_ok() => target.to_string(),
        _ => format!("{target}:{default_port}"),
    }
}
