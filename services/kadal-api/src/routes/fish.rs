use actix_web::{get, web, HttpResponse};
use kadal_providers::FishForecastProvider;
use std::time::Instant;

use crate::routes::common::{bad_request, internal_error, unavailable};
use crate::routes::weather::PositionQuery;
use crate::state::AppState;

#[get("/v1/fish-forecast")]
pub async fn fish_forecast(
    state: web::Data<AppState>,
    query: web::Query<PositionQuery>,
) -> HttpResponse {
    let position = state.resolve_position(query.lat, query.lon);
    if !position.is_valid() {
        return bad_request("lat/lon out of range");
    }

    let now = Instant::now();
    {
        let cache = match state.fish_cache.lock() {
            Ok(cache) => cache,
            Err(_) => return internal_error("forecast cache lock poisoned"),
        };
        if let Some(spots) = cache.fresh(state.cache_ttl, now) {
            return HttpResponse::Ok().json(spots);
        }
    }

    match state.fish_provider.forecast_near(position).await {
        Ok(spots) => {
            if let Ok(mut cache) = state.fish_cache.lock() {
                cache.store(spots.clone(), now);
            }
            HttpResponse::Ok().json(spots)
        }
        Err(err) => unavailable(err.message),
    }
}
