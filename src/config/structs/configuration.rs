use serde::{Deserialize, Serialize};
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::probe_config::ProbeConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub http_server: HttpServerConfig,
    pub probe: ProbeConfig,
}
