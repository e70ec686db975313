use crate::alerts::AlertHub;
use kadal_config::{EstimateConfig, ServiceConfig, TrackerConfig};
use kadal_core::SosBeacon;
use kadal_geo::{Boundary, Position, PositionTracker};
use kadal_providers::{
    BoundaryProvider, FishForecastSpot, MarketQuote, ProviderError, SampleBoundaryProvider,
    SampleFishForecastProvider, SampleMarketProvider, SampleWeatherProvider, WeatherReport,
};
use kadal_storage_memory::MemoryStore;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Single-slot cache in front of a provider, refreshed when older than
/// the configured TTL.
#[derive(Debug)]
pub struct ProviderCache<T> {
    pub last_fetch: Option<Instant>,
    pub payload: Option<T>,
}

impl<T: Clone> ProviderCache<T> {
    pub fn new() -> Self {
        Self {
            last_fetch: None,
            payload: None,
        }
    }

    pub fn fresh(&self, ttl: Duration, now: Instant) -> Option<T> {
        let age = now.duration_since(self.last_fetch?);
        if age < ttl {
            self.payload.clone()
        } else {
            None
        }
    }

    pub fn store(&mut self, payload: T, now: Instant) {
        self.last_fetch = Some(now);
        self.payload = Some(payload);
    }
}

impl<T: Clone> Default for ProviderCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AppState {
    pub config: ServiceConfig,
    pub tracker_config: TrackerConfig,
    pub estimates: EstimateConfig,
    pub store: MemoryStore,
    pub boundary_provider: SampleBoundaryProvider,
    pub weather_provider: SampleWeatherProvider,
    pub fish_provider: SampleFishForecastProvider,
    pub market_provider: SampleMarketProvider,
    pub tracker: Mutex<PositionTracker>,
    /// Zones the crossing detector runs against, anchored at the first
    /// accepted fix the way the client anchors its map.
    pub tracked_boundaries: Mutex<Option<Vec<Boundary>>>,
    pub alerts: AlertHub,
    pub sos: Mutex<Option<SosBeacon>>,
    pub cache_ttl: Duration,
    pub weather_cache: Mutex<ProviderCache<WeatherReport>>,
    pub fish_cache: Mutex<ProviderCache<Vec<FishForecastSpot>>>,
    pub market_cache: Mutex<ProviderCache<Vec<MarketQuote>>>,
}

impl AppState {
    pub fn new(
        config: ServiceConfig,
        tracker_config: TrackerConfig,
        estimates: EstimateConfig,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            config,
            tracker_config,
            estimates,
            store: MemoryStore::new(),
            boundary_provider: SampleBoundaryProvider::new(),
            weather_provider: SampleWeatherProvider::new(),
            fish_provider: SampleFishForecastProvider::new(),
            market_provider: SampleMarketProvider::new(),
            tracker: Mutex::new(PositionTracker::new()),
            tracked_boundaries: Mutex::new(None),
            alerts: AlertHub::new(),
            sos: Mutex::new(None),
            cache_ttl,
            weather_cache: Mutex::new(ProviderCache::new()),
            fish_cache: Mutex::new(ProviderCache::new()),
            market_cache: Mutex::new(ProviderCache::new()),
        }
    }

    /// Fallback chain for endpoints that accept an optional position:
    /// explicit query, then the last accepted fix, then the configured
    /// default coast position.
    pub fn resolve_position(&self, latitude: Option<f64>, longitude: Option<f64>) -> Position {
        if let (Some(latitude), Some(longitude)) = (latitude, longitude) {
            return Position::new(latitude, longitude);
        }
        if let Ok(tracker) = self.tracker.lock() {
            if let Some(last) = tracker.last_known() {
                return last;
            }
        }
        Position::new(
            self.tracker_config.default_latitude,
            self.tracker_config.default_longitude,
        )
    }

    /// The boundary set the detector evaluates, fetched once around the
    /// anchor position and reused for every later sample.
    pub async fn boundaries_for_tracking(
        &self,
        anchor: Position,
    ) -> Result<Vec<Boundary>, ProviderError> {
        {
            let tracked = self
                .tracked_boundaries
                .lock()
                .map_err(|_| ProviderError::new("tracked boundary lock poisoned"))?;
            if let Some(boundaries) = tracked.as_ref() {
                return Ok(boundaries.clone());
            }
        }
        let fetched = self.boundary_provider.boundaries_near(anchor).await?;
        let mut tracked = self
            .tracked_boundaries
            .lock()
            .map_err(|_| ProviderError::new("tracked boundary lock poisoned"))?;
        Ok(tracked.get_or_insert(fetched).clone())
    }
}
