use actix_web::{get, web, HttpResponse};
use kadal_core::now_epoch_millis;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct StatusResponse {
    service: String,
    environment: String,
    region: Option<String>,
    tracking_active: bool,
    sos_active: bool,
    timestamp_ms: u64,
}

#[get("/v1/status")]
pub async fn status(state: web::Data<AppState>) -> HttpResponse {
    let tracking_active = state
        .tracker
        .lock()
        .map(|tracker| tracker.last_known().is_some())
        .unwrap_or(false);
    let sos_active = state
        .sos
        .lock()
        .map(|beacon| beacon.is_some())
        .unwrap_or(false);
    let response = StatusResponse {
        service: state.config.service_name.clone(),
        environment: state.config.environment.to_string(),
        region: state.config.region.clone(),
        tracking_active,
        sos_active,
        timestamp_ms: now_epoch_millis(),
    };

    HttpResponse::Ok().json(response)
}
