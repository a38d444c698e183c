#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use std::time::Duration;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_configuration_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.http_server.bind_address, "0.0.0.0:9124");
            assert!(config.http_server.threads > 0);
            assert_eq!(config.probe.port, 123);
            assert_eq!(config.probe.timeout(), Duration::from_secs(1));
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_configuration_toml_roundtrip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded, config);
        }

        #[test]
        fn test_configuration_load() {
            let data = br#"
log_level = "debug"

[http_server]
bind_address = "127.0.0.1:9999"
threads = 2
keep_alive = 5
request_timeout = 10
disconnect_timeout = 5

[probe]
port = 1123
timeout_ms = 250
"#;
            let config = Configuration::load(data).unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.http_server.bind_address, "127.0.0.1:9999");
            assert_eq!(config.http_server.threads, 2);
            assert_eq!(config.probe.port, 1123);
            assert_eq!(config.probe.timeout(), Duration::from_millis(250));
        }

        #[test]
        fn test_configuration_load_missing_section() {
            let data = b"log_level = \"info\"\n";
            assert!(Configuration::load(data).is_err());
        }

        #[test]
        fn test_configuration_overrides() {
            let mut config = Configuration::init();
            config.apply_overrides(Some(String::from("127.0.0.1:1234")), None);
            assert_eq!(config.http_server.bind_address, "127.0.0.1:1234");
            assert_eq!(config.log_level, "info");
            config.apply_overrides(None, Some(String::from("trace")));
            assert_eq!(config.http_server.bind_address, "127.0.0.1:1234");
            assert_eq!(config.log_level, "trace");
        }
    }

    mod validation_tests {
        use std::net::{Ipv6Addr, SocketAddr};
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;

        fn assert_invalid(config: &Configuration, needle: &str) {
            match config.validate() {
                Err(ConfigurationError::ValidationError(message)) => {
                    assert!(message.contains(needle), "unexpected message: {message}");
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }

        #[test]
        fn test_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("verbose");
            assert_invalid(&config, "unknown log level");
        }

        #[test]
        fn test_invalid_bind_address() {
            let mut config = Configuration::init();
            config.http_server.bind_address = String::from(":http");
            assert_invalid(&config, "bind address");
            config.http_server.bind_address = String::from("localhost:9124");
            assert_invalid(&config, "bind address");
        }

        #[test]
        fn test_hostless_bind_address() {
            let mut config = Configuration::init();
            config.http_server.bind_address = String::from(":9124");
            assert!(config.validate().is_ok());
            assert_eq!(
                config.http_server.socket_address().unwrap(),
                SocketAddr::new(Ipv6Addr::UNSPECIFIED.into(), 9124)
            );

            config.http_server.bind_address = String::from("127.0.0.1:9124");
            assert_eq!(config.http_server.socket_address().unwrap(), SocketAddr::from(([127, 0, 0, 1], 9124)));
        }

        #[test]
        fn test_zero_threads() {
            let mut config = Configuration::init();
            config.http_server.threads = 0;
            assert_invalid(&config, "threads");
        }

        #[test]
        fn test_zero_port() {
            let mut config = Configuration::init();
            config.probe.port = 0;
            assert_invalid(&config, "probe.port");
        }

        #[test]
        fn test_zero_timeout() {
            let mut config = Configuration::init();
            config.probe.timeout_ms = 0;
            assert_invalid(&config, "probe.timeout_ms");
        }

        #[test]
        fn test_validation_error_display() {
            let error = ConfigurationError::ValidationError(String::from("broken"));
            assert_eq!(format!("{}", error), "invalid configuration: broken");
        }
    }
}
