use std::sync::Arc;
use crate::config::structs::probe_config::ProbeConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::leontp::leontp::target_address;
use crate::leontp::structs::leontp_client::LeoNtpClient;

impl HttpServiceData {
    pub fn new(probe_config: ProbeConfig) -> HttpServiceData {
        HttpServiceData {
            probe_config: Arc::new(probe_config),
        }
    }

    /// Fresh client for one scrape of `target`.
    pub fn client_for(&self, target: &str) -> LeoNtpClient {
        LeoNtpClient::new(
            target_address(target, self.probe_config.port),
            self.probe_config.timeout(),
        )
    }
}
