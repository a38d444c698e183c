use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use leontp_exporter::common::common::setup_logging;
use leontp_exporter::config::structs::configuration::Configuration;
use leontp_exporter::http::http::http_service;
use leontp_exporter::http::structs::http_service_data::HttpServiceData;
use leontp_exporter::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    config.apply_overrides(args.listen.clone(), args.log_level.clone());

    println!("[VALIDATE] Validating configuration...");
    if let Err(error) = config.validate() {
        eprintln!("[VALIDATE] {error}");
        exit(101);
    }
    let config = Arc::new(config);

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let address = match config.http_server.socket_address() {
                Ok(address) => address,
                Err(_) => {
                    error!("[BOOT] Invalid bind address {}", config.http_server.bind_address);
                    exit(101);
                }
            };

            info!(
                "[BOOT] Probing appliances on port {} with a {}ms timeout",
                config.probe.port, config.probe.timeout_ms
            );

            let data = Arc::new(HttpServiceData::new(config.probe.clone()));
            let (handle, server) = http_service(address, data, &config.http_server)?;
            let server = tokio::spawn(server);

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    handle.stop(true).await;
                    info!("Server shutting down completed");
                    Ok(())
                }
                result = server => {
                    match result {
                        Ok(Ok(())) => Ok(()),
                        Ok(Err(error)) => {
                            error!("[HTTP] Server stopped with an error: {error}");
                            Err(error)
                        }
                        Err(error) => {
                            error!("[HTTP] Server task failed: {error}");
                            Err(std::io::Error::other(error))
                        }
                    }
                }
            }
        })
}
