use crate::boundary::Boundary;
use crate::crossing::{detect_crossings, CrossingEvent};
use crate::position::Position;
use kadal_core::{ErrorCode, KadalError, KadalResult};

/// Owns the single last-known position for one tracked vessel. Each
/// accepted sample triggers exactly one evaluation pass over the supplied
/// boundaries; the stored position is updated only after the pass
/// completes. The tracker holds no locks and no boundary state; callers
/// serialize access and decide which boundaries apply.
#[derive(Debug, Default)]
pub struct PositionTracker {
    last_known: Option<Position>,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self { last_known: None }
    }

    pub fn last_known(&self) -> Option<Position> {
        self.last_known
    }

    /// Runs one evaluation pass for a new sample. Out-of-range samples
    /// are rejected without touching the stored position. The first
    /// accepted sample can produce no events; it only seeds the history.
    pub fn observe(
        &mut self,
        sample: Position,
        boundaries: &[Boundary],
    ) -> KadalResult<Vec<CrossingEvent>> {
        if !sample.is_valid() {
            return Err(KadalError::new(
                ErrorCode::InvalidInput,
                format!(
                    "position out of range: {}, {}",
                    sample.latitude, sample.longitude
                ),
            ));
        }
        let events = detect_crossings(self.last_known, sample, boundaries);
        self.last_known = Some(sample);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryCategory;
    use crate::crossing::CrossingDirection;
    use kadal_core::BoundaryId;

    fn square_zone() -> Boundary {
        Boundary {
            id: BoundaryId::new(),
            name: "Territorial Waters".to_string(),
            category: BoundaryCategory::National,
            ring: vec![
                Position::new(0.0, 0.0),
                Position::new(0.0, 10.0),
                Position::new(10.0, 10.0),
                Position::new(10.0, 0.0),
            ],
        }
    }

    #[test]
    fn first_sample_seeds_without_events() {
        let mut tracker = PositionTracker::new();
        let events = tracker
            .observe(Position::new(5.0, 5.0), &[square_zone()])
            .unwrap();
        assert!(events.is_empty());
        assert_eq!(tracker.last_known(), Some(Position::new(5.0, 5.0)));
    }

    #[test]
    fn second_sample_detects_the_transition() {
        let mut tracker = PositionTracker::new();
        let boundaries = [square_zone()];
        tracker.observe(Position::new(-5.0, 5.0), &boundaries).unwrap();
        let events = tracker.observe(Position::new(5.0, 5.0), &boundaries).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].direction, CrossingDirection::Entered);
    }

    #[test]
    fn rejected_sample_leaves_history_untouched() {
        let mut tracker = PositionTracker::new();
        let boundaries = [square_zone()];
        tracker.observe(Position::new(-5.0, 5.0), &boundaries).unwrap();
        let err = tracker
            .observe(Position::new(120.0, 5.0), &boundaries)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(tracker.last_known(), Some(Position::new(-5.0, 5.0)));

        // The next valid sample still evaluates against the retained
        // position, so the crossing is not lost.
        let events = tracker.observe(Position::new(5.0, 5.0), &boundaries).unwrap();
        assert_eq!(events.len(), 1);
    }
}
