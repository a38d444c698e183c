use std::fs::File;
use std::io::{ErrorKind, Write};
use std::thread::available_parallelism;
use crate::common::common::log_level_filter;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::probe_config::ProbeConfig;
use crate::leontp::leontp::DEFAULT_PORT;

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            http_server: HttpServerConfig {
                bind_address: String::from("0.0.0.0:9124"),
                threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1),
                keep_alive: 60,
                request_timeout: 15,
                disconnect_timeout: 15,
            },
            probe: ProbeConfig {
                port: DEFAULT_PORT,
                timeout_ms: 1000,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(&self, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(self).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    ///
    /// With `create` set, a missing or broken file is replaced by the defaults.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = Configuration::init();
        match Configuration::load_file(path) {
            Ok(c) => Ok(c),
            Err(error) => {
                if create {
                    eprintln!("[CONFIG] Creating config file {path}..");
                    return match config.save_from_config(path) {
                        Ok(_) => Ok(config),
                        Err(e) => {
                            eprintln!("{path} file could not be created, check permissions...");
                            eprintln!("{e}");
                            Err(CustomError::new(&format!("could not create {path} file")))
                        }
                    };
                }

                if matches!(&error, ConfigurationError::IOError(e) if e.kind() == ErrorKind::NotFound) {
                    eprintln!("[CONFIG] No {path} found, using defaults.");
                    return Ok(config);
                }

                eprintln!("[ERROR] {path} is corrupt: {error}");
                eprintln!("You can either fix your own {path} file, or start this app using '--create-config' as parameter.");
                Err(CustomError::new(&format!("unable to load {path}")))
            }
        }
    }

    /// Apply command line / environment overrides on top of the loaded file.
    pub fn apply_overrides(&mut self, listen: Option<String>, log_level: Option<String>) {
        if let Some(listen) = listen {
            self.http_server.bind_address = listen;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if log_level_filter(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }
        if self.http_server.socket_address().is_err() {
            return Err(ConfigurationError::ValidationError(format!("bind address '{}' is not a socket address", self.http_server.bind_address)));
        }
        if self.http_server.threads == 0 {
            return Err(ConfigurationError::ValidationError(String::from("http_server.threads must be greater than zero")));
        }
        if self.probe.port == 0 {
            return Err(ConfigurationError::ValidationError(String::from("probe.port must be greater than zero")));
        }
        if self.probe.timeout_ms == 0 {
            return Err(ConfigurationError::ValidationError(String::from("probe.timeout_ms must be greater than zero")));
        }
        Ok(())
    }
}
