use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// HTTP address to listen on for scrapes.
    #[arg(long, env = "LEONTP_LISTEN")]
    pub listen: Option<String>,
    /// Log level (off, trace, debug, info, warn, error).
    #[arg(long, env = "LEONTP_LOG_LEVEL")]
    pub log_level: Option<String>,
}
