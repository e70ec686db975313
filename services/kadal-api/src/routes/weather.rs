use actix_web::{get, web, HttpResponse};
use kadal_core::{AlertSeverity, Notice, NotificationSink};
use kadal_geo::Position;
use kadal_providers::{ProviderError, WeatherProvider, WeatherReport};
use serde::Deserialize;
use std::time::Instant;

use crate::routes::common::{bad_request, unavailable};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PositionQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Cache-fronted weather lookup shared by the weather and bait routes.
/// A fresh fetch that comes back severe raises a weather alert through
/// the normal sink.
pub async fn current_weather(
    state: &AppState,
    position: Position,
) -> Result<WeatherReport, ProviderError> {
    let now = Instant::now();
    {
        let cache = state
            .weather_cache
            .lock()
            .map_err(|_| ProviderError::new("weather cache lock poisoned"))?;
        if let Some(report) = cache.fresh(state.cache_ttl, now) {
            return Ok(report);
        }
    }

    let report = state.weather_provider.current(position).await?;
    if report.is_severe() {
        state.alerts.notify(Notice::new(
            "Weather Alert",
            format!(
                "Challenging conditions detected: {}, Wind: {:.0} km/h, Waves: {:.1}m",
                report.conditions, report.wind_speed_kmh, report.wave_height_m
            ),
            AlertSeverity::Destructive,
        ));
    }

    let mut cache = state
        .weather_cache
        .lock()
        .map_err(|_| ProviderError::new("weather cache lock poisoned"))?;
    cache.store(report.clone(), now);
    Ok(report)
}

#[get("/v1/weather")]
pub async fn weather(
    state: web::Data<AppState>,
    query: web::Query<PositionQuery>,
) -> HttpResponse {
    let position = state.resolve_position(query.lat, query.lon);
    if !position.is_valid() {
        return bad_request("lat/lon out of range");
    }
    match current_weather(&state, position).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => unavailable(err.message),
    }
}
