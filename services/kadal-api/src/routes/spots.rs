use actix_web::{delete, get, post, web, HttpResponse};
use kadal_core::{SavedSpot, SpotId};
use kadal_geo::Position;
use kadal_storage::SpotRepository;
use serde::Deserialize;

use crate::routes::common::{bad_request, internal_error, not_found, parse_uuid};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[get("/v1/spots")]
pub async fn list_spots(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let limit = query.limit.unwrap_or(100);
    let offset = query.offset.unwrap_or(0);

    match SpotRepository::list(&state.store, limit, offset).await {
        Ok(spots) => HttpResponse::Ok().json(spots),
        Err(err) => internal_error(err.message),
    }
}

#[get("/v1/spots/{id}")]
pub async fn get_spot(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    let uuid = match parse_uuid(&id) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let spot_id = SpotId::from_uuid(uuid);

    match SpotRepository::get(&state.store, spot_id).await {
        Ok(Some(spot)) => HttpResponse::Ok().json(spot),
        Ok(None) => not_found("spot not found"),
        Err(err) => internal_error(err.message),
    }
}

#[post("/v1/spots")]
pub async fn upsert_spot(
    state: web::Data<AppState>,
    payload: web::Json<SavedSpot>,
) -> HttpResponse {
    let spot = payload.into_inner();
    if spot.name.trim().is_empty() {
        return bad_request("spot name is required");
    }
    if !Position::new(spot.latitude, spot.longitude).is_valid() {
        return bad_request("spot position out of range");
    }

    match SpotRepository::upsert(&state.store, spot.clone()).await {
        Ok(()) => HttpResponse::Ok().json(spot),
        Err(err) => internal_error(err.message),
    }
}

#[delete("/v1/spots/{id}")]
pub async fn delete_spot(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    let uuid = match parse_uuid(&id) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let spot_id = SpotId::from_uuid(uuid);

    match SpotRepository::delete(&state.store, spot_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => internal_error(err.message),
    }
}
