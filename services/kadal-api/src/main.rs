mod alerts;
mod routes;
mod state;

use actix_web::{web, App, HttpServer};
use kadal_config::{EstimateConfig, ServiceConfig, TrackerConfig};
use kadal_observability::{init, log_startup, ObservabilityConfig};
use state::AppState;
use std::env;
use std::io;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = ServiceConfig::from_env("kadal-api");
    let obs_config = ObservabilityConfig {
        service_name: config.service_name.clone(),
        environment: config.environment.to_string(),
        log_level: config.log_level.clone(),
        metrics_addr: config.metrics_addr.clone(),
    };
    let handle = init(&obs_config);
    log_startup(&handle, &obs_config.environment);

    let tracker_config = TrackerConfig::from_env();
    let estimates = EstimateConfig::from_env();
    let cache_ttl_ms = env::var("KADAL_PROVIDER_CACHE_TTL_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(30_000);

    let bind_addr = config.bind_addr.clone();
    let state = web::Data::new(AppState::new(
        config,
        tracker_config,
        estimates,
        Duration::from_millis(cache_ttl_ms),
    ));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
