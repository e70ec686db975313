use actix_web::{get, web, HttpResponse};
use kadal_core::BoundaryId;
use kadal_geo::{Boundary, BoundaryCategory, BoundingBox, Position};
use kadal_providers::BoundaryProvider;
use serde::{Deserialize, Serialize};

use crate::routes::common::{bad_request, unavailable};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BoundaryQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub lamin: Option<f64>,
    pub lomin: Option<f64>,
    pub lamax: Option<f64>,
    pub lomax: Option<f64>,
}

#[derive(Debug, Serialize)]
struct BoundaryView {
    id: BoundaryId,
    name: String,
    category: BoundaryCategory,
    ring: Vec<Position>,
    bounding_box: Option<BoundingBox>,
}

impl From<Boundary> for BoundaryView {
    fn from(boundary: Boundary) -> Self {
        let bounding_box = boundary.bounding_box();
        Self {
            id: boundary.id,
            name: boundary.name,
            category: boundary.category,
            ring: boundary.ring,
            bounding_box,
        }
    }
}

fn viewport(query: &BoundaryQuery) -> Option<BoundingBox> {
    match (query.lamin, query.lomin, query.lamax, query.lomax) {
        (Some(lamin), Some(lomin), Some(lamax), Some(lomax))
            if lamin < lamax && lomin < lomax =>
        {
            Some(BoundingBox {
                north: lamax,
                south: lamin,
                east: lomax,
                west: lomin,
            })
        }
        _ => None,
    }
}

#[get("/v1/boundaries")]
pub async fn boundaries(
    state: web::Data<AppState>,
    query: web::Query<BoundaryQuery>,
) -> HttpResponse {
    let position = state.resolve_position(query.lat, query.lon);
    if !position.is_valid() {
        return bad_request("lat/lon out of range");
    }

    let zones = match state.boundary_provider.boundaries_near(position).await {
        Ok(zones) => zones,
        Err(err) => return unavailable(err.message),
    };

    let viewport = viewport(&query);
    let views: Vec<BoundaryView> = zones
        .into_iter()
        .filter(|zone| match (&viewport, zone.bounding_box()) {
            (Some(viewport), Some(extent)) => viewport.intersects(&extent),
            _ => true,
        })
        .map(BoundaryView::from)
        .collect();

    HttpResponse::Ok().json(views)
}
