pub mod http_service_data;
