use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("reply too short: expected at least {expected} bytes, got {actual}")]
    TooShort {
        expected: usize,
        actual: usize,
    },
}
