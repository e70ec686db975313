use crate::position::{BoundingBox, Position};
use kadal_core::{AlertSeverity, BoundaryId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCategory {
    National,
    International,
    Protected,
}

impl BoundaryCategory {
    /// Protected zones alert at high priority in both crossing directions.
    pub fn alert_severity(&self) -> AlertSeverity {
        match self {
            Self::Protected => AlertSeverity::Destructive,
            Self::National | Self::International => AlertSeverity::Default,
        }
    }
}

impl fmt::Display for BoundaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::National => "national",
            Self::International => "international",
            Self::Protected => "protected",
        };
        write!(f, "{}", value)
    }
}

/// A named maritime zone. The ring is an ordered vertex list; closure is
/// optional and rings with fewer than three vertices never contain
/// anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boundary {
    pub id: BoundaryId,
    pub name: String,
    pub category: BoundaryCategory,
    pub ring: Vec<Position>,
}

impl Boundary {
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_ring(&self.ring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_protected_zones_escalate() {
        assert_eq!(
            BoundaryCategory::Protected.alert_severity(),
            AlertSeverity::Destructive
        );
        assert_eq!(
            BoundaryCategory::National.alert_severity(),
            AlertSeverity::Default
        );
        assert_eq!(
            BoundaryCategory::International.alert_severity(),
            AlertSeverity::Default
        );
    }
}
