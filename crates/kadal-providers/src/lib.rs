//! Environmental data providers. Every trait is narrow enough that the
//! in-process sample implementation and a real geospatial or forecast
//! service are interchangeable from the caller's point of view. The
//! sample implementations are deterministic: the same timestamp and
//! query position always produce the same payload.

use async_trait::async_trait;
use kadal_geo::{Boundary, Position};
use std::fmt;

mod bait;
mod boundaries;
mod fish;
mod market;
mod weather;

pub use bait::{bait_advice, BaitAdvice};
pub use boundaries::{sample_boundaries_near, SampleBoundaryProvider};
pub use fish::{
    sample_forecast_near, ConfidenceBand, FishForecastSpot, SampleFishForecastProvider,
    TimeOfDay,
};
pub use market::{sample_market_quotes, MarketQuote, SampleMarketProvider};
pub use weather::{
    sample_weather, SampleWeatherProvider, TideEntry, TideType, WeatherConditions,
    WeatherReport,
};

#[derive(Debug, Clone)]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ProviderError {}

#[async_trait]
pub trait BoundaryProvider: Send + Sync {
    async fn boundaries_near(&self, position: Position) -> Result<Vec<Boundary>, ProviderError>;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, position: Position) -> Result<WeatherReport, ProviderError>;
}

#[async_trait]
pub trait FishForecastProvider: Send + Sync {
    async fn forecast_near(
        &self,
        position: Position,
    ) -> Result<Vec<FishForecastSpot>, ProviderError>;
}

#[async_trait]
pub trait MarketProvider: Send + Sync {
    async fn latest_prices(&self) -> Result<Vec<MarketQuote>, ProviderError>;
}
