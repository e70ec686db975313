use actix_web::{delete, get, post, web, HttpResponse};
use kadal_core::{now_epoch_millis, AlertSeverity, Notice, NotificationSink, SosBeacon};
use kadal_geo::Position;
use serde::{Deserialize, Serialize};

use crate::routes::common::{bad_request, conflict, internal_error, not_found};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SosRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize)]
struct SosStatus {
    active: bool,
    beacon: Option<SosBeacon>,
}

#[post("/v1/sos")]
pub async fn activate_sos(
    state: web::Data<AppState>,
    payload: web::Json<SosRequest>,
) -> HttpResponse {
    let position = state.resolve_position(payload.latitude, payload.longitude);
    if !position.is_valid() {
        return bad_request("latitude/longitude out of range");
    }

    let beacon = SosBeacon {
        latitude: position.latitude,
        longitude: position.longitude,
        started_at_ms: now_epoch_millis(),
    };
    {
        let mut sos = match state.sos.lock() {
            Ok(sos) => sos,
            Err(_) => return internal_error("sos lock poisoned"),
        };
        if sos.is_some() {
            return conflict("SOS is already active");
        }
        *sos = Some(beacon);
    }

    state.alerts.notify(Notice::new(
        "SOS Signal Activated",
        "Emergency services have been notified of your location. Stay calm and wait for assistance.",
        AlertSeverity::Destructive,
    ));
    tracing::warn!(
        latitude = beacon.latitude,
        longitude = beacon.longitude,
        "distress beacon activated"
    );

    HttpResponse::Ok().json(beacon)
}

#[delete("/v1/sos")]
pub async fn cancel_sos(state: web::Data<AppState>) -> HttpResponse {
    {
        let mut sos = match state.sos.lock() {
            Ok(sos) => sos,
            Err(_) => return internal_error("sos lock poisoned"),
        };
        if sos.take().is_none() {
            return not_found("no active SOS");
        }
    }

    state.alerts.notify(Notice::new(
        "Emergency Mode Deactivated",
        "SOS signals have been stopped.",
        AlertSeverity::Default,
    ));
    tracing::info!("distress beacon cancelled");

    HttpResponse::NoContent().finish()
}

#[get("/v1/sos")]
pub async fn sos_status(state: web::Data<AppState>) -> HttpResponse {
    let beacon = state.sos.lock().ok().and_then(|sos| *sos);
    HttpResponse::Ok().json(SosStatus {
        active: beacon.is_some(),
        beacon,
    })
}
