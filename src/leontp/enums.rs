pub mod decode_error;
pub mod probe_error;
