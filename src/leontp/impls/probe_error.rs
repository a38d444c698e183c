use crate::leontp::enums::probe_error::ProbeError;

impl ProbeError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProbeError::Timeout { .. })
    }

    /// Short label of the failing stage, used as a log tag.
    pub fn stage(&self) -> &'static str {
        match self {
            ProbeError::InvalidTimeout => "config",
            ProbeError::Resolve { .. } => "resolve",
            ProbeError::Connect { .. } => "connect",
            ProbeError::Send { .. } => "send",
            ProbeError::Receive { .. } => "receive",
            ProbeError::Timeout { .. } => "timeout",
            ProbeError::Decode(_) => "decode",
        }
    }
}
