use actix_web::{delete, get, post, web, HttpResponse};
use kadal_core::{Route, RouteId, RouteSummary};
use kadal_geo::{track_length_km, Position};
use kadal_storage::RouteRepository;

use crate::routes::common::{bad_request, internal_error, not_found, parse_uuid};
use crate::routes::spots::ListQuery;
use crate::state::AppState;

#[get("/v1/routes")]
pub async fn list_routes(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let limit = query.limit.unwrap_or(100);
    let offset = query.offset.unwrap_or(0);

    match RouteRepository::list(&state.store, limit, offset).await {
        Ok(routes) => HttpResponse::Ok().json(routes),
        Err(err) => internal_error(err.message),
    }
}

#[get("/v1/routes/{id}")]
pub async fn get_route(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    let uuid = match parse_uuid(&id) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let route_id = RouteId::from_uuid(uuid);

    match RouteRepository::get(&state.store, route_id).await {
        Ok(Some(route)) => HttpResponse::Ok().json(route),
        Ok(None) => not_found("route not found"),
        Err(err) => internal_error(err.message),
    }
}

#[post("/v1/routes")]
pub async fn upsert_route(
    state: web::Data<AppState>,
    payload: web::Json<Route>,
) -> HttpResponse {
    let route = payload.into_inner();
    if route.name.trim().is_empty() {
        return bad_request("route name is required");
    }
    for waypoint in &route.waypoints {
        if !Position::new(waypoint.latitude, waypoint.longitude).is_valid() {
            return bad_request(format!(
                "waypoint '{}' position out of range",
                waypoint.name
            ));
        }
    }

    match RouteRepository::upsert(&state.store, route.clone()).await {
        Ok(()) => HttpResponse::Ok().json(route),
        Err(err) => internal_error(err.message),
    }
}

#[delete("/v1/routes/{id}")]
pub async fn delete_route(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    let uuid = match parse_uuid(&id) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let route_id = RouteId::from_uuid(uuid);

    match RouteRepository::delete(&state.store, route_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => internal_error(err.message),
    }
}

fn summarize(route: &Route, cruise_speed_kmh: f64, fuel_burn_l_per_km: f64) -> RouteSummary {
    let track: Vec<Position> = route
        .waypoints
        .iter()
        .map(|waypoint| Position::new(waypoint.latitude, waypoint.longitude))
        .collect();
    let distance_km = track_length_km(&track);
    let duration_hours = if cruise_speed_kmh > 0.0 {
        distance_km / cruise_speed_kmh
    } else {
        0.0
    };
    RouteSummary {
        route_id: route.id,
        leg_count: route.waypoints.len().saturating_sub(1),
        distance_km,
        duration_hours,
        fuel_litres: distance_km * fuel_burn_l_per_km,
    }
}

#[get("/v1/routes/{id}/summary")]
pub async fn route_summary(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    let uuid = match parse_uuid(&id) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let route_id = RouteId::from_uuid(uuid);

    match RouteRepository::get(&state.store, route_id).await {
        Ok(Some(route)) => HttpResponse::Ok().json(summarize(
            &route,
            state.estimates.cruise_speed_kmh,
            state.estimates.fuel_burn_l_per_km,
        )),
        Ok(None) => not_found("route not found"),
        Err(err) => internal_error(err.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kadal_core::{now_epoch_millis, Waypoint};

    #[test]
    fn summary_scales_with_cruise_speed_and_burn_rate() {
        let route = Route {
            id: RouteId::new(),
            name: "Morning grounds".to_string(),
            waypoints: vec![
                Waypoint {
                    name: "Harbour".to_string(),
                    latitude: 8.0,
                    longitude: 77.0,
                },
                Waypoint {
                    name: "Reef".to_string(),
                    latitude: 9.0,
                    longitude: 77.0,
                },
            ],
            created_at_ms: now_epoch_millis(),
            updated_at_ms: now_epoch_millis(),
        };

        let summary = summarize(&route, 14.0, 0.5);
        assert_eq!(summary.leg_count, 1);
        assert!((summary.distance_km - 111.19).abs() < 0.5);
        assert!((summary.duration_hours - summary.distance_km / 14.0).abs() < 1e-9);
        assert!((summary.fuel_litres - summary.distance_km * 0.5).abs() < 1e-9);
    }

    #[test]
    fn single_waypoint_route_has_an_empty_summary() {
        let route = Route {
            id: RouteId::new(),
            name: "Anchor".to_string(),
            waypoints: vec![Waypoint {
                name: "Harbour".to_string(),
                latitude: 8.0,
                longitude: 77.0,
            }],
            created_at_ms: now_epoch_millis(),
            updated_at_ms: now_epoch_millis(),
        };

        let summary = summarize(&route, 14.0, 0.5);
        assert_eq!(summary.leg_count, 0);
        assert_eq!(summary.distance_km, 0.0);
        assert_eq!(summary.fuel_litres, 0.0);
    }
}
