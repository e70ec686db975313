use crate::{BoundaryProvider, ProviderError};
use async_trait::async_trait;
use kadal_core::BoundaryId;
use kadal_geo::{Boundary, BoundaryCategory, Position};
use uuid::Uuid;

// "kadal-zn"; fixed namespace so repeated fetches hand out the same ids.
const ZONE_ID_SEED: u64 = 0x6b61_6461_6c2d_7a6e;

fn stable_zone_id(index: u64) -> BoundaryId {
    BoundaryId::from_uuid(Uuid::from_u64_pair(ZONE_ID_SEED, index))
}

/// Regular polygon ring around a center point, explicitly closed. The
/// containment test does not require closure, but map rendering does.
fn polygon_around(center: Position, radius_deg: f64, vertex_count: usize) -> Vec<Position> {
    let mut ring = Vec::with_capacity(vertex_count + 1);
    for i in 0..vertex_count {
        let angle = (i as f64 / vertex_count as f64) * std::f64::consts::TAU;
        ring.push(Position::new(
            center.latitude + radius_deg * angle.cos(),
            center.longitude + radius_deg * angle.sin(),
        ));
    }
    ring.push(ring[0]);
    ring
}

/// The three standard zones around a position: territorial waters at the
/// position itself, the international border offset north-east, and a
/// protected area offset south-west.
pub fn sample_boundaries_near(position: Position) -> Vec<Boundary> {
    vec![
        Boundary {
            id: stable_zone_id(1),
            name: "Territorial Waters Boundary".to_string(),
            category: BoundaryCategory::National,
            ring: polygon_around(position, 0.1, 8),
        },
        Boundary {
            id: stable_zone_id(2),
            name: "International Maritime Border".to_string(),
            category: BoundaryCategory::International,
            ring: polygon_around(
                Position::new(position.latitude + 0.2, position.longitude + 0.1),
                0.08,
                6,
            ),
        },
        Boundary {
            id: stable_zone_id(3),
            name: "Marine Protected Area".to_string(),
            category: BoundaryCategory::Protected,
            ring: polygon_around(
                Position::new(position.latitude - 0.1, position.longitude - 0.15),
                0.05,
                10,
            ),
        },
    ]
}

/// Stand-in for a real maritime-zone service.
#[derive(Debug, Clone, Default)]
pub struct SampleBoundaryProvider;

impl SampleBoundaryProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BoundaryProvider for SampleBoundaryProvider {
    async fn boundaries_near(&self, position: Position) -> Result<Vec<Boundary>, ProviderError> {
        Ok(sample_boundaries_near(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kadal_geo::point_in_polygon;

    #[test]
    fn zones_are_stable_across_fetches() {
        let here = Position::new(8.0883, 77.5385);
        let first = sample_boundaries_near(here);
        let second = sample_boundaries_near(here);
        assert_eq!(first.len(), 3);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.name, b.name);
            assert_eq!(a.ring, b.ring);
        }
    }

    #[test]
    fn territorial_ring_surrounds_the_query_position() {
        let here = Position::new(8.0883, 77.5385);
        let zones = sample_boundaries_near(here);
        assert!(point_in_polygon(here, &zones[0].ring));
        // The offset zones do not cover the query position itself.
        assert!(!point_in_polygon(here, &zones[1].ring));
        assert!(!point_in_polygon(here, &zones[2].ring));
    }

    #[test]
    fn rings_are_closed() {
        let zones = sample_boundaries_near(Position::new(8.0, 77.0));
        for zone in &zones {
            assert_eq!(zone.ring.first(), zone.ring.last());
            assert!(zone.ring.len() >= 4);
        }
    }

    #[test]
    fn exactly_one_protected_zone() {
        let zones = sample_boundaries_near(Position::new(8.0, 77.0));
        let protected = zones
            .iter()
            .filter(|zone| zone.category == BoundaryCategory::Protected)
            .count();
        assert_eq!(protected, 1);
    }
}
