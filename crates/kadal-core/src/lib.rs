pub mod alert;
pub mod domain;
pub mod error;
pub mod ids;
pub mod time;

pub use alert::{AlertSeverity, Notice, NotificationSink};
pub use domain::{
    CatchReport, EmergencyContact, FuelReport, Route, RouteSummary, SavedSpot, SosBeacon,
    Waypoint,
};
pub use error::{ErrorCode, KadalError, KadalResult};
pub use ids::{BoundaryId, CatchReportId, ContactId, FuelReportId, RouteId, SpotId};
pub use time::{now_epoch_millis, EpochMillis};
