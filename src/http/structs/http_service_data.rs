use std::sync::Arc;
use crate::config::structs::probe_config::ProbeConfig;

#[derive(Debug)]
pub struct HttpServiceData {
    pub probe_config: Arc<ProbeConfig>,
}
