use std::time::Duration;

/// One-shot status client for a single `host:port` target.
#[derive(Clone, Debug)]
pub struct LeoNtpClient {
    pub target: String,
    pub timeout: Duration,
}
