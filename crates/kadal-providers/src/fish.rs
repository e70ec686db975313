use crate::{FishForecastProvider, ProviderError};
use async_trait::async_trait;
use kadal_core::now_epoch_millis;
use kadal_geo::Position;
use serde::{Deserialize, Serialize};

const SPECIES: [&str; 8] = [
    "Tuna",
    "Mackerel",
    "Swordfish",
    "Sardines",
    "Red Snapper",
    "Grouper",
    "Barracuda",
    "Kingfish",
];

const GEAR: [&str; 8] = [
    "Gill nets",
    "Hook and line",
    "Trawl nets",
    "Purse seine",
    "Long lines",
    "Traps",
    "Cast nets",
    "Trolling",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    EarlyMorning,
    LateMorning,
    Midday,
    Afternoon,
    Evening,
    Night,
}

const TIMES: [TimeOfDay; 6] = [
    TimeOfDay::EarlyMorning,
    TimeOfDay::LateMorning,
    TimeOfDay::Midday,
    TimeOfDay::Afternoon,
    TimeOfDay::Evening,
    TimeOfDay::Night,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence_pct: u8) -> Self {
        if confidence_pct > 80 {
            Self::High
        } else if confidence_pct > 70 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishForecastSpot {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub species: String,
    pub confidence_pct: u8,
    pub band: ConfidenceBand,
    pub best_time: TimeOfDay,
    pub recommended_gear: Vec<String>,
    pub estimated_catch_min_kg: u32,
    pub estimated_catch_max_kg: u32,
}

/// Deterministic forecast: 5-10 spots within ±0.1° of the query
/// position, species and times rotating daily, confidence 60-95 %.
pub fn sample_forecast_near(now_ms: u64, position: Position) -> Vec<FishForecastSpot> {
    let t = (now_ms as f64 / 1000.0) / 900.0;
    let day_seed = (now_ms / 86_400_000) as usize;
    let count = 5 + (((t.sin() + 1.0) / 2.0) * 5.0).round() as usize;

    (0..count)
        .map(|i| {
            let drift = i as f64;
            let latitude = position.latitude + 0.1 * (t + drift * 0.8).sin();
            let longitude = position.longitude + 0.1 * (t * 1.3 + drift * 0.6).cos();
            let confidence_pct =
                60 + ((((t * 0.9 + drift * 0.45).cos() + 1.0) / 2.0) * 35.0).round() as u8;
            let gear_count = 2 + i % 2;
            let recommended_gear = (0..gear_count)
                .map(|j| GEAR[(i * 3 + j * 5) % GEAR.len()].to_string())
                .collect();
            let estimated_catch_min_kg = 10 + (i as u32 * 7) % 20;
            let estimated_catch_max_kg = estimated_catch_min_kg + 10 + (i as u32 * 11) % 30;

            FishForecastSpot {
                id: format!("forecast-{i}"),
                latitude,
                longitude,
                species: SPECIES[(i + day_seed) % SPECIES.len()].to_string(),
                confidence_pct,
                band: ConfidenceBand::from_confidence(confidence_pct),
                best_time: TIMES[(i + day_seed) % TIMES.len()],
                recommended_gear,
                estimated_catch_min_kg,
                estimated_catch_max_kg,
            }
        })
        .collect()
}

/// Stand-in for a fish-movement prediction service.
#[derive(Debug, Clone, Default)]
pub struct SampleFishForecastProvider;

impl SampleFishForecastProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FishForecastProvider for SampleFishForecastProvider {
    async fn forecast_near(
        &self,
        position: Position,
    ) -> Result<Vec<FishForecastSpot>, ProviderError> {
        Ok(sample_forecast_near(now_epoch_millis(), position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_is_deterministic() {
        let here = Position::new(8.0883, 77.5385);
        let a = sample_forecast_near(1_700_000_000_000, here);
        let b = sample_forecast_near(1_700_000_000_000, here);
        assert_eq!(a.len(), b.len());
        assert_eq!(a[0].species, b[0].species);
        assert_eq!(a[0].confidence_pct, b[0].confidence_pct);
    }

    #[test]
    fn spots_stay_near_the_query_position() {
        let here = Position::new(8.0883, 77.5385);
        for now_ms in [0u64, 1_700_000_000_000, 1_800_000_000_000] {
            let spots = sample_forecast_near(now_ms, here);
            assert!((5..=10).contains(&spots.len()));
            for spot in &spots {
                assert!((spot.latitude - here.latitude).abs() <= 0.1 + 1e-9);
                assert!((spot.longitude - here.longitude).abs() <= 0.1 + 1e-9);
                assert!((60..=95).contains(&spot.confidence_pct));
                assert!((2..=3).contains(&spot.recommended_gear.len()));
                assert!(spot.estimated_catch_max_kg > spot.estimated_catch_min_kg);
            }
        }
    }

    #[test]
    fn confidence_bands_split_at_70_and_80() {
        assert_eq!(ConfidenceBand::from_confidence(95), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(81), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(80), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_confidence(71), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_confidence(70), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_confidence(60), ConfidenceBand::Low);
    }
}
