use crate::boundary::{Boundary, BoundaryCategory};
use crate::position::Position;
use kadal_core::{BoundaryId, Notice};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossingDirection {
    Entered,
    Exited,
}

/// A detected transition across one zone ring. Transient: it lives for one
/// notification dispatch and is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossingEvent {
    pub boundary_id: BoundaryId,
    pub boundary_name: String,
    pub category: BoundaryCategory,
    pub direction: CrossingDirection,
    pub position: Position,
}

impl CrossingEvent {
    pub fn to_notice(&self) -> Notice {
        let severity = self.category.alert_severity();
        match self.direction {
            CrossingDirection::Entered => Notice::new(
                format!("Entered {} zone", self.category),
                format!("You have entered {}", self.boundary_name),
                severity,
            ),
            CrossingDirection::Exited => Notice::new(
                format!("Exited {} zone", self.category),
                format!("You have left {}", self.boundary_name),
                severity,
            ),
        }
    }
}

/// Even-odd ray cast over raw degrees, latitude as abscissa and longitude
/// as ordinate. Zone rings are small coastal polygons, so the planar
/// treatment is deliberate; no antimeridian or polar correction is
/// applied. The edge walk wraps the index, so an explicitly closed ring
/// and an open one give identical answers.
pub fn point_in_polygon(point: Position, ring: &[Position]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[j];
        // Half-open straddle test: exactly one endpoint strictly beyond
        // the query longitude, so shared vertices are not counted twice.
        if (a.longitude > point.longitude) != (b.longitude > point.longitude) {
            let delta = b.longitude - a.longitude;
            // An edge with zero longitude extent cannot straddle, but a
            // malformed ring must not divide by it either.
            if delta != 0.0 {
                let crossing_latitude =
                    (b.latitude - a.latitude) * (point.longitude - a.longitude) / delta
                        + a.latitude;
                if point.latitude < crossing_latitude {
                    inside = !inside;
                }
            }
        }
        j = i;
    }
    inside
}

/// One evaluation pass: tests the previous/current pair against every
/// boundary, in input order, and reports each transition exactly once.
/// Without a previous position no crossing is decidable and the pass is a
/// no-op.
pub fn detect_crossings(
    previous: Option<Position>,
    current: Position,
    boundaries: &[Boundary],
) -> Vec<CrossingEvent> {
    let Some(previous) = previous else {
        return Vec::new();
    };
    let mut events = Vec::new();
    for boundary in boundaries {
        let was_inside = point_in_polygon(previous, &boundary.ring);
        let is_inside = point_in_polygon(current, &boundary.ring);
        if was_inside != is_inside {
            let direction = if is_inside {
                CrossingDirection::Entered
            } else {
                CrossingDirection::Exited
            };
            events.push(CrossingEvent {
                boundary_id: boundary.id,
                boundary_name: boundary.name.clone(),
                category: boundary.category,
                direction,
                position: current,
            });
        }
    }
    events
}
