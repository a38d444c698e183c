use std::time::Duration;
use crate::config::structs::probe_config::ProbeConfig;

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
