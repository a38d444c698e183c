pub mod leontp_client;
pub mod probe_error;
pub mod status_record;
pub mod status_request;
