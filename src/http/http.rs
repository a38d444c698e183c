use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, error, info};
use crate::common::common::parse_query;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::metrics::metrics::{status_exposition, METRICS_CONTENT_TYPE};

pub const TARGET_REQUIRED_MESSAGE: &str = "Must specify ?target=<leontp address>";

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/").route(web::get().to(http_service_index)));
        cfg.service(web::resource("/metrics").route(web::get().to(http_service_metrics)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>,
    config: &HttpServerConfig
) -> std::io::Result<(ServerHandle, Server)>
{
    info!("[HTTP] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_index() -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(format!(
        "{} {}\n\nScrape an appliance with /metrics?target=<leontp address>\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ))
}

pub async fn http_service_metrics(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let start = Instant::now();

    let target = match http_service_target(&request) {
        Ok(target) => target,
        Err(response) => return response,
    };

    let client = data.client_for(&target);
    debug!("[HTTP] Scrape of {} (probing {})", target, client.target);

    let body = match client.probe().await {
        Ok(status) => {
            debug!(
                "[PROBE] {}: uptime={}s requests={} lock={}s satellites={} flags={:#04x} serial={} firmware={:#x} reference={}",
                client.target,
                status.uptime_seconds,
                status.ntp_request_count,
                status.gps_lock_seconds,
                status.satellite_count,
                status.status_flags,
                status.serial_number,
                status.firmware_version,
                status.observed_at.to_rfc3339()
            );
            status_exposition(&status)
        }
        Err(error) => {
            error!("[PROBE] Unable to get metrics from {} ({}): {}", client.target, error.stage(), error);
            String::new()
        }
    };

    debug!("[PERF] http_service_metrics: {:?}", start.elapsed());
    HttpResponse::Ok().content_type(METRICS_CONTENT_TYPE).body(body)
}

/// Extract the single `target` query value, or the client error to answer with.
pub fn http_service_target(request: &HttpRequest) -> Result<String, HttpResponse>
{
    let queries = parse_query(Some(request.query_string().to_string()));
    let bad_request = || HttpResponse::BadRequest().content_type(ContentType::plaintext()).body(TARGET_REQUIRED_MESSAGE);

    match queries.get("target").map(|values| values.as_slice()) {
        Some([value]) => match String::from_utf8(value.clone()) {
            Ok(target) if !target.trim().is_empty() => Ok(target.trim().to_string()),
            _ => Err(bad_request()),
        },
        _ => Err(bad_request()),
    }
}

pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[HTTP] Request for {}: 404 Not Found", request.path());
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body("unknown request")
}
