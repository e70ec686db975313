use actix_web::{delete, get, post, web, HttpResponse};
use kadal_core::{CatchReport, CatchReportId, FuelReport, FuelReportId};
use kadal_geo::Position;
use kadal_storage::{CatchReportRepository, FuelReportRepository};
use serde::Serialize;
use std::collections::HashSet;

use crate::routes::common::{bad_request, internal_error, not_found, parse_uuid};
use crate::routes::spots::ListQuery;
use crate::state::AppState;

#[get("/v1/reports/catch")]
pub async fn list_catch_reports(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let limit = query.limit.unwrap_or(100);
    let offset = query.offset.unwrap_or(0);

    match CatchReportRepository::list(&state.store, limit, offset).await {
        Ok(reports) => HttpResponse::Ok().json(reports),
        Err(err) => internal_error(err.message),
    }
}

#[get("/v1/reports/catch/{id}")]
pub async fn get_catch_report(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> HttpResponse {
    let uuid = match parse_uuid(&id) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let report_id = CatchReportId::from_uuid(uuid);

    match CatchReportRepository::get(&state.store, report_id).await {
        Ok(Some(report)) => HttpResponse::Ok().json(report),
        Ok(None) => not_found("catch report not found"),
        Err(err) => internal_error(err.message),
    }
}

#[post("/v1/reports/catch")]
pub async fn upsert_catch_report(
    state: web::Data<AppState>,
    payload: web::Json<CatchReport>,
) -> HttpResponse {
    let report = payload.into_inner();
    if report.species.is_empty() {
        return bad_request("at least one species is required");
    }
    if !report.quantity_kg.is_finite() || report.quantity_kg <= 0.0 {
        return bad_request("quantity must be positive");
    }
    if !Position::new(report.latitude, report.longitude).is_valid() {
        return bad_request("report position out of range");
    }

    match CatchReportRepository::upsert(&state.store, report.clone()).await {
        Ok(()) => HttpResponse::Ok().json(report),
        Err(err) => internal_error(err.message),
    }
}

#[delete("/v1/reports/catch/{id}")]
pub async fn delete_catch_report(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> HttpResponse {
    let uuid = match parse_uuid(&id) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let report_id = CatchReportId::from_uuid(uuid);

    match CatchReportRepository::delete(&state.store, report_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => internal_error(err.message),
    }
}

#[get("/v1/reports/fuel")]
pub async fn list_fuel_reports(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let limit = query.limit.unwrap_or(100);
    let offset = query.offset.unwrap_or(0);

    match FuelReportRepository::list(&state.store, limit, offset).await {
        Ok(reports) => HttpResponse::Ok().json(reports),
        Err(err) => internal_error(err.message),
    }
}

#[get("/v1/reports/fuel/{id}")]
pub async fn get_fuel_report(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> HttpResponse {
    let uuid = match parse_uuid(&id) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let report_id = FuelReportId::from_uuid(uuid);

    match FuelReportRepository::get(&state.store, report_id).await {
        Ok(Some(report)) => HttpResponse::Ok().json(report),
        Ok(None) => not_found("fuel report not found"),
        Err(err) => internal_error(err.message),
    }
}

#[post("/v1/reports/fuel")]
pub async fn upsert_fuel_report(
    state: web::Data<AppState>,
    payload: web::Json<FuelReport>,
) -> HttpResponse {
    let report = payload.into_inner();
    if !report.litres.is_finite() || report.litres <= 0.0 {
        return bad_request("litres must be positive");
    }
    if !report.cost.is_finite() || report.cost < 0.0 {
        return bad_request("cost must not be negative");
    }

    match FuelReportRepository::upsert(&state.store, report.clone()).await {
        Ok(()) => HttpResponse::Ok().json(report),
        Err(err) => internal_error(err.message),
    }
}

#[delete("/v1/reports/fuel/{id}")]
pub async fn delete_fuel_report(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> HttpResponse {
    let uuid = match parse_uuid(&id) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let report_id = FuelReportId::from_uuid(uuid);

    match FuelReportRepository::delete(&state.store, report_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => internal_error(err.message),
    }
}

#[derive(Debug, Serialize)]
struct SustainabilityResponse {
    score: u8,
    recent_reports: usize,
    distinct_species: usize,
    total_quantity_kg: f64,
}

/// Base 75, +2 per distinct species across the five most recent reports,
/// -10 when their combined catch exceeds 100 kg, clamped to 0-100.
fn sustainability_score(reports: &[CatchReport]) -> SustainabilityResponse {
    let recent = &reports[reports.len().saturating_sub(5)..];
    let distinct: HashSet<&str> = recent
        .iter()
        .flat_map(|report| report.species.iter().map(String::as_str))
        .collect();
    let total_quantity_kg: f64 = recent.iter().map(|report| report.quantity_kg).sum();

    let mut score = 75_i32 + distinct.len() as i32 * 2;
    if total_quantity_kg > 100.0 {
        score -= 10;
    }

    SustainabilityResponse {
        score: score.clamp(0, 100) as u8,
        recent_reports: recent.len(),
        distinct_species: distinct.len(),
        total_quantity_kg,
    }
}

#[get("/v1/reports/sustainability")]
pub async fn sustainability(state: web::Data<AppState>) -> HttpResponse {
    match CatchReportRepository::list(&state.store, usize::MAX, 0).await {
        Ok(reports) => HttpResponse::Ok().json(sustainability_score(&reports)),
        Err(err) => internal_error(err.message),
    }
}
