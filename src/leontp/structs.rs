pub mod leontp_client;
pub mod status_record;
pub mod status_request;
