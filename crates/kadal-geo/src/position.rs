use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Degree-range check applied at ingestion boundaries. The geometry
    /// routines themselves accept whatever they are given.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub fn contains(&self, position: Position) -> bool {
        position.latitude <= self.north
            && position.latitude >= self.south
            && position.longitude <= self.east
            && position.longitude >= self.west
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.south <= other.north
            && other.south <= self.north
            && self.west <= other.east
            && other.west <= self.east
    }

    /// Axis-aligned extent of a vertex ring. `None` for an empty ring.
    pub fn from_ring(ring: &[Position]) -> Option<Self> {
        let first = ring.first()?;
        let mut bounds = Self {
            north: first.latitude,
            south: first.latitude,
            east: first.longitude,
            west: first.longitude,
        };
        for vertex in &ring[1..] {
            bounds.north = bounds.north.max(vertex.latitude);
            bounds.south = bounds.south.min(vertex.latitude);
            bounds.east = bounds.east.max(vertex.longitude);
            bounds.west = bounds.west.min(vertex.longitude);
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_samples() {
        assert!(Position::new(8.0883, 77.5385).is_valid());
        assert!(Position::new(-90.0, 180.0).is_valid());
        assert!(!Position::new(90.5, 0.0).is_valid());
        assert!(!Position::new(0.0, -180.2).is_valid());
        assert!(!Position::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn ring_extent_covers_all_vertices() {
        let ring = [
            Position::new(0.0, 0.0),
            Position::new(0.0, 10.0),
            Position::new(10.0, 10.0),
            Position::new(10.0, 0.0),
        ];
        let bounds = BoundingBox::from_ring(&ring).unwrap();
        assert_eq!(bounds.north, 10.0);
        assert_eq!(bounds.south, 0.0);
        assert_eq!(bounds.east, 10.0);
        assert_eq!(bounds.west, 0.0);
        assert!(bounds.contains(Position::new(5.0, 5.0)));
        assert!(!bounds.contains(Position::new(11.0, 5.0)));
        assert!(BoundingBox::from_ring(&[]).is_none());
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = BoundingBox {
            north: 10.0,
            south: 0.0,
            east: 10.0,
            west: 0.0,
        };
        let b = BoundingBox {
            north: 15.0,
            south: 8.0,
            east: 15.0,
            west: 8.0,
        };
        let c = BoundingBox {
            north: 30.0,
            south: 20.0,
            east: 30.0,
            west: 20.0,
        };
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }
}
