#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use tokio::net::UdpSocket;
use leontp_exporter::config::structs::configuration::Configuration;
use leontp_exporter::config::structs::probe_config::ProbeConfig;
use leontp_exporter::http::structs::http_service_data::HttpServiceData;

pub const STATUS_REQUEST: [u8; 9] = [0x27, 0x00, 0x10, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00];

pub struct FakeAppliance {
    pub address: SocketAddr,
    pub requests: Arc<AtomicUsize>,
}

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.http_server.bind_address = "127.0.0.1:0".to_string();
    config.http_server.threads = 1;
    config.probe.timeout_ms = 500;
    config
}

pub fn create_test_service_data(timeout_ms: u64) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData::new(ProbeConfig { port: 123, timeout_ms }))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn status_reply(uptime: u32, requests: u32, lock: u32, satellites: u8) -> Vec<u8> {
    let mut reply = vec![0u8; 48];
    reply[16..20].copy_from_slice(&0x8000_0000u32.to_le_bytes());
    reply[20..24].copy_from_slice(&3_913_056_000u32.to_le_bytes());
    reply[24..28].copy_from_slice(&uptime.to_le_bytes());
    reply[28..32].copy_from_slice(&requests.to_le_bytes());
    reply[36..40].copy_from_slice(&lock.to_le_bytes());
    reply[40] = 0x01;
    reply[41] = satellites;
    reply[42..44].copy_from_slice(&4321u16.to_le_bytes());
    reply[44..48].copy_from_slice(&0x0000_0203u32.to_le_bytes());
    reply
}

/// Answer every well-formed status request with `reply`.
pub async fn spawn_fake_appliance(reply: Vec<u8>) -> FakeAppliance {
    let socket = UdpSocket::bind("127.0.0.1:0").await.expect("Failed to bind fake appliance");
    let address = socket.local_addr().unwrap();
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = requests.clone();
    tokio::spawn(async move {
        let mut buffer = [0u8; 64];
        loop {
            let Ok((size, peer)) = socket.recv_from(&mut buffer).await else {
                return;
            };
            if buffer[..size] != STATUS_REQUEST {
                continue;
            }
            counter.fetch_add(1, Ordering::SeqCst);
            let _ = socket.send_to(&reply, peer).await;
        }
    });
    FakeAppliance { address, requests }
}

/// Accept datagrams but never answer.
pub async fn spawn_silent_appliance() -> FakeAppliance {
    let socket = UdpSocket::bind("127.0.0.1:0").await.expect("Failed to bind silent appliance");
    let address = socket.local_addr().unwrap();
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = requests.clone();
    tokio::spawn(async move {
        let mut buffer = [0u8; 64];
        while socket.recv_from(&mut buffer).await.is_ok() {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });
    FakeAppliance { address, requests }
}
