use std::net::{AddrParseError, Ipv6Addr, SocketAddr};
use crate::config::structs::http_server_config::HttpServerConfig;

impl HttpServerConfig {
    /// Resolve `bind_address`; a host-less `:port` listens on every interface.
    pub fn socket_address(&self) -> Result<SocketAddr, AddrParseError> {
        match self.bind_address.strip_prefix(':') {
            Some(port) => port.parse::<u16>()
                .map(|port| SocketAddr::new(Ipv6Addr::UNSPECIFIED.into(), port))
                .or_else(|_| self.bind_address.parse::<SocketAddr>()),
            None => self.bind_address.parse::<SocketAddr>(),
        }
    }
}
