use actix_web::{get, post, web, HttpResponse};
use kadal_core::NotificationSink;
use kadal_geo::{CrossingEvent, Position};
use serde::{Deserialize, Serialize};

use crate::routes::common::{bad_request, error_response, internal_error, not_found, unavailable};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PositionSample {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
struct IngestResponse {
    position: Position,
    crossings: Vec<CrossingEvent>,
}

#[post("/v1/position")]
pub async fn ingest_position(
    state: web::Data<AppState>,
    payload: web::Json<PositionSample>,
) -> HttpResponse {
    let sample = Position::new(payload.latitude, payload.longitude);
    if !sample.is_valid() {
        return bad_request(format!(
            "position out of range: {}, {}",
            sample.latitude, sample.longitude
        ));
    }

    let boundaries = match state.boundaries_for_tracking(sample).await {
        Ok(boundaries) => boundaries,
        Err(err) => return unavailable(err.message),
    };

    let events = {
        let mut tracker = match state.tracker.lock() {
            Ok(tracker) => tracker,
            Err(_) => return internal_error("tracker lock poisoned"),
        };
        match tracker.observe(sample, &boundaries) {
            Ok(events) => events,
            Err(err) => return error_response(&err),
        }
    };

    metrics::counter!("kadal_position_samples_total").increment(1);
    for event in &events {
        metrics::counter!(
            "kadal_boundary_crossings_total",
            "category" => event.category.to_string()
        )
        .increment(1);
        state.alerts.notify(event.to_notice());
    }

    HttpResponse::Ok().json(IngestResponse {
        position: sample,
        crossings: events,
    })
}

#[get("/v1/position")]
pub async fn last_position(state: web::Data<AppState>) -> HttpResponse {
    let last = state
        .tracker
        .lock()
        .ok()
        .and_then(|tracker| tracker.last_known());
    match last {
        Some(position) => HttpResponse::Ok().json(position),
        None => not_found("no position reported yet"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use kadal_config::{EstimateConfig, ServiceConfig, TrackerConfig};
    use serde_json::json;
    use std::time::Duration;

    fn test_state() -> web::Data<AppState> {
        web::Data::new(AppState::new(
            ServiceConfig::from_env("kadal-api-test"),
            TrackerConfig {
                sample_interval_ms: 1_000,
                default_latitude: 8.0883,
                default_longitude: 77.5385,
            },
            EstimateConfig {
                cruise_speed_kmh: 14.0,
                fuel_burn_l_per_km: 0.5,
            },
            Duration::from_millis(30_000),
        ))
    }

    #[actix_web::test]
    async fn first_sample_is_accepted_without_crossings() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(ingest_position)
                .service(last_position),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/v1/position")
            .set_json(json!({"latitude": 8.0883, "longitude": 77.5385}))
            .to_request();
        let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(response["crossings"].as_array().unwrap().len(), 0);

        let request = test::TestRequest::get().uri("/v1/position").to_request();
        let last: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(last["latitude"].as_f64().unwrap(), 8.0883);
    }

    #[actix_web::test]
    async fn leaving_territorial_waters_raises_an_alert() {
        let state = test_state();
        let app = test::init_service(App::new().app_data(state.clone()).service(ingest_position))
            .await;

        // Anchor inside the territorial ring, then step well outside every
        // sampled zone.
        for (latitude, longitude, expected) in [
            (8.0883, 77.5385, 0usize),
            (9.5, 78.9, 1),
        ] {
            let request = test::TestRequest::post()
                .uri("/v1/position")
                .set_json(json!({"latitude": latitude, "longitude": longitude}))
                .to_request();
            let response: serde_json::Value = test::call_and_read_body_json(&app, request).await;
            assert_eq!(
                response["crossings"].as_array().unwrap().len(),
                expected,
                "at {latitude}, {longitude}"
            );
        }

        let recent = state.alerts.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].notice.title, "Exited national zone");
    }

    #[actix_web::test]
    async fn out_of_range_samples_are_rejected() {
        let state = test_state();
        let app =
            test::init_service(App::new().app_data(state).service(ingest_position)).await;
        let request = test::TestRequest::post()
            .uri("/v1/position")
            .set_json(json!({"latitude": 120.0, "longitude": 77.5}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn no_position_yet_is_not_found() {
        let state = test_state();
        let app = test::init_service(App::new().app_data(state).service(last_position)).await;
        let request = test::TestRequest::get().uri("/v1/position").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
