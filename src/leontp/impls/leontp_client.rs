use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use log::debug;
use tokio::net::{lookup_host, UdpSocket};
use tokio::time::{timeout_at, Instant};
use crate::leontp::enums::probe_error::ProbeError;
use crate::leontp::leontp::RECEIVE_BUFFER_SIZE;
use crate::leontp::structs::leontp_client::LeoNtpClient;
use crate::leontp::structs::status_record::StatusRecord;
use crate::leontp::structs::status_request::StatusRequest;

impl LeoNtpClient {
    pub fn new(target: impl Into<String>, timeout: Duration) -> LeoNtpClient {
        LeoNtpClient {
            target: target.into(),
            timeout,
        }
    }

    /// Query the appliance and decode its reply.
    #[tracing::instrument(level = "debug")]
    pub async fn probe(&self) -> Result<StatusRecord, ProbeError> {
        let reply = self.query().await?;
        Ok(StatusRecord::from_bytes(&reply)?)
    }

    /// Perform one request/response exchange and return the raw reply.
    ///
    /// Opens a fresh socket per call. A single deadline covers both the send
    /// and the receive; resolution is not bounded by it.
    #[tracing::instrument(level = "debug")]
    pub async fn query(&self) -> Result<Vec<u8>, ProbeError> {
        if self.timeout.is_zero() {
            return Err(ProbeError::InvalidTimeout);
        }

        let address = self.resolve().await?;

        let bind_address: SocketAddr = match address {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = UdpSocket::bind(bind_address).await
            .map_err(|source| ProbeError::Connect { address, source })?;
        socket.connect(address).await
            .map_err(|source| ProbeError::Connect { address, source })?;

        let request = StatusRequest::default().to_bytes()
            .map_err(|source| ProbeError::Send { address, source })?;

        let deadline = Instant::now() + self.timeout;

        match timeout_at(deadline, socket.send(&request)).await {
            Ok(Ok(_)) => {}
            Ok(Err(source)) => return Err(ProbeError::Send { address, source }),
            Err(_) => return Err(ProbeError::Timeout { address, timeout: self.timeout }),
        }

        let mut buffer = vec![0u8; RECEIVE_BUFFER_SIZE];
        let size = match timeout_at(deadline, socket.recv(&mut buffer)).await {
            Ok(Ok(size)) => size,
            Ok(Err(source)) => return Err(ProbeError::Receive { address, source }),
            Err(_) => return Err(ProbeError::Timeout { address, timeout: self.timeout }),
        };
        buffer.truncate(size);

        debug!("[PROBE] Received {} bytes from {}", size, address);
        Ok(buffer)
    }

    async fn resolve(&self) -> Result<SocketAddr, ProbeError> {
        let mut addresses = lookup_host(self.target.as_str()).await
            .map_err(|source| ProbeError::Resolve { target: self.target.clone(), source })?;
        addresses.next().ok_or_else(|| ProbeError::Resolve {
            target: self.target.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, "no addresses found"),
        })
    }
}
