use kadal_config::{ServiceConfig, TrackerConfig};
use kadal_core::{now_epoch_millis, AlertSeverity};
use kadal_geo::{Position, PositionTracker};
use kadal_observability::{init, log_startup, ObservabilityConfig};
use kadal_providers::{BoundaryProvider, SampleBoundaryProvider};
use std::time::Duration;

/// Synthesized drifting track around the home position: a slow Lissajous
/// loop that repeatedly wanders across the sampled zone rings.
fn simulated_position(origin: Position, now_ms: u64) -> Position {
    let t = (now_ms as f64 / 1000.0) / 180.0;
    Position::new(
        origin.latitude + 0.14 * t.sin(),
        origin.longitude + 0.14 * (t * 0.7).cos(),
    )
}

#[tokio::main]
async fn main() {
    let config = ServiceConfig::from_env("kadal-tracker");
    let obs_config = ObservabilityConfig {
        service_name: config.service_name.clone(),
        environment: config.environment.to_string(),
        log_level: config.log_level.clone(),
        metrics_addr: config.metrics_addr.clone(),
    };
    let handle = init(&obs_config);
    log_startup(&handle, &obs_config.environment);

    let tracker_config = TrackerConfig::from_env();
    let origin = Position::new(
        tracker_config.default_latitude,
        tracker_config.default_longitude,
    );

    let provider = SampleBoundaryProvider::new();
    let boundaries = match provider.boundaries_near(origin).await {
        Ok(boundaries) => boundaries,
        Err(err) => {
            tracing::error!(error = %err, "failed to load boundary set");
            return;
        }
    };
    tracing::info!(
        zones = boundaries.len(),
        latitude = origin.latitude,
        longitude = origin.longitude,
        interval_ms = tracker_config.sample_interval_ms,
        "tracking simulated vessel"
    );

    let mut tracker = PositionTracker::new();
    let mut ticker =
        tokio::time::interval(Duration::from_millis(tracker_config.sample_interval_ms.max(1)));

    // One evaluation pass per tick; the loop exits on the first shutdown
    // signal and no further passes run.
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutdown signal received, stopping track evaluation");
                break;
            }
            _ = ticker.tick() => {
                let sample = simulated_position(origin, now_epoch_millis());
                match tracker.observe(sample, &boundaries) {
                    Ok(events) => {
                        metrics::counter!("kadal_position_samples_total").increment(1);
                        for event in &events {
                            metrics::counter!(
                                "kadal_boundary_crossings_total",
                                "category" => event.category.to_string()
                            )
                            .increment(1);
                            let notice = event.to_notice();
                            match notice.severity {
                                AlertSeverity::Destructive => tracing::warn!(
                                    title = %notice.title,
                                    message = %notice.message,
                                    latitude = sample.latitude,
                                    longitude = sample.longitude,
                                    "boundary alert"
                                ),
                                AlertSeverity::Default => tracing::info!(
                                    title = %notice.title,
                                    message = %notice.message,
                                    latitude = sample.latitude,
                                    longitude = sample.longitude,
                                    "boundary alert"
                                ),
                            }
                        }
                    }
                    Err(err) => tracing::warn!(error = %err, "sample rejected"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kadal_geo::CrossingDirection;

    #[test]
    fn simulated_track_stays_in_range() {
        let origin = Position::new(8.0883, 77.5385);
        for step in 0..720u64 {
            assert!(simulated_position(origin, step * 5_000).is_valid());
        }
    }

    #[test]
    fn simulated_track_crosses_the_territorial_ring() {
        let origin = Position::new(8.0883, 77.5385);
        let boundaries =
            kadal_providers::sample_boundaries_near(origin);
        let mut tracker = PositionTracker::new();
        let mut entered = 0usize;
        let mut exited = 0usize;

        // Two simulated hours at a five-second cadence.
        for step in 0..1_440u64 {
            let sample = simulated_position(origin, step * 5_000);
            for event in tracker.observe(sample, &boundaries).unwrap() {
                match event.direction {
                    CrossingDirection::Entered => entered += 1,
                    CrossingDirection::Exited => exited += 1,
                }
            }
        }

        assert!(entered > 0, "track never entered a zone");
        assert!(exited > 0, "track never left a zone");
    }
}
