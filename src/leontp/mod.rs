//! LeoNTP status protocol client.
//!
//! LeoNTP GPS time servers answer a private-mode request on the NTP port with a
//! fixed-layout status reply. This module builds that request, performs the UDP
//! round trip and decodes the reply into a [`StatusRecord`].
//!
//! # Wire format
//!
//! The request is a fixed 9-byte datagram. The reply carries little-endian
//! fields at fixed offsets; only the first 48 bytes are consumed:
//!
//! | Offset | Width | Field                              |
//! |--------|-------|------------------------------------|
//! | 16     | 4     | reference timestamp, fraction      |
//! | 20     | 4     | reference timestamp, seconds (1900)|
//! | 24     | 4     | uptime seconds                     |
//! | 28     | 4     | NTP request count                  |
//! | 36     | 4     | GPS lock seconds                   |
//! | 40     | 1     | status flags                       |
//! | 41     | 1     | satellite count                    |
//! | 42     | 2     | serial number                      |
//! | 44     | 4     | firmware version                   |
//!
//! The reply has no header, checksum or magic number; a datagram received on
//! the connected socket is trusted to be a status reply.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use leontp_exporter::leontp::structs::leontp_client::LeoNtpClient;
//!
//! let client = LeoNtpClient::new("192.168.1.10:123", Duration::from_secs(1));
//! let status = client.probe().await?;
//! println!("{} satellites visible", status.satellite_count);
//! ```
//!
//! [`StatusRecord`]: structs::status_record::StatusRecord

/// Error types for probing and decoding.
pub mod enums;

/// Request, reply and client data structures.
pub mod structs;

/// Implementation blocks for the protocol types.
pub mod impls;

/// Protocol constants and timestamp conversion.
#[allow(clippy::module_inception)]
pub mod leontp;
