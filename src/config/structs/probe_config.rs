use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    /// Port used when a scrape target does not name one.
    pub port: u16,
    pub timeout_ms: u64,
}
