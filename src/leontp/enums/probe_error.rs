use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use crate::leontp::enums::decode_error::DecodeError;

/// Failure of a single status probe, labeled by the stage that failed.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("probe timeout must be greater than zero")]
    InvalidTimeout,

    #[error("unable to resolve {target}: {source}")]
    Resolve {
        target: String,
        source: io::Error,
    },

    #[error("unable to connect to {address}: {source}")]
    Connect {
        address: SocketAddr,
        source: io::Error,
    },

    #[error("unable to send to {address}: {source}")]
    Send {
        address: SocketAddr,
        source: io::Error,
    },

    #[error("unable to read from {address}: {source}")]
    Receive {
        address: SocketAddr,
        source: io::Error,
    },

    #[error("no reply from {address} within {timeout:?}")]
    Timeout {
        address: SocketAddr,
        timeout: Duration,
    },

    #[error("unable to decode reply: {0}")]
    Decode(#[from] DecodeError),
}
