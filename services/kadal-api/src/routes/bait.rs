use actix_web::{get, web, HttpResponse};
use kadal_providers::bait_advice;

use crate::routes::common::{bad_request, unavailable};
use crate::routes::weather::{current_weather, PositionQuery};
use crate::state::AppState;

#[get("/v1/bait")]
pub async fn bait(state: web::Data<AppState>, query: web::Query<PositionQuery>) -> HttpResponse {
    let position = state.resolve_position(query.lat, query.lon);
    if !position.is_valid() {
        return bad_request("lat/lon out of range");
    }
    match current_weather(&state, position).await {
        Ok(report) => HttpResponse::Ok().json(bait_advice(&report)),
        Err(err) => unavailable(err.message),
    }
}
