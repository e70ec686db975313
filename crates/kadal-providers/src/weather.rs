use crate::{ProviderError, WeatherProvider};
use async_trait::async_trait;
use kadal_core::now_epoch_millis;
use kadal_geo::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherConditions {
    Sunny,
    PartlyCloudy,
    Cloudy,
    LightRain,
    Thunderstorm,
}

impl fmt::Display for WeatherConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Sunny => "Sunny",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::LightRain => "Light Rain",
            Self::Thunderstorm => "Thunderstorm",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TideType {
    High,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TideEntry {
    pub time: String,
    pub height_m: f64,
    pub tide: TideType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub conditions: WeatherConditions,
    pub wind_speed_kmh: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub wave_height_m: f64,
    pub wave_period_s: f64,
    pub water_temperature_c: f64,
    pub salinity_ppt: f64,
    pub tides: Vec<TideEntry>,
}

impl WeatherReport {
    /// Conditions worth an unprompted alert: storms, strong wind, or
    /// waves a small fishing vessel should not be out in.
    pub fn is_severe(&self) -> bool {
        self.conditions == WeatherConditions::Thunderstorm
            || self.wind_speed_kmh > 15.0
            || self.wave_height_m > 1.5
    }
}

fn conditions_from(swing: f64) -> WeatherConditions {
    let index = (((swing + 1.0) / 2.0) * 4.0).round() as i64;
    match index {
        0 => WeatherConditions::Sunny,
        1 => WeatherConditions::PartlyCloudy,
        2 => WeatherConditions::Cloudy,
        3 => WeatherConditions::LightRain,
        _ => WeatherConditions::Thunderstorm,
    }
}

/// Deterministic coastal Bay of Bengal conditions: smooth drift over
/// time, phase-shifted by position so nearby ports differ.
pub fn sample_weather(now_ms: u64, position: Position) -> WeatherReport {
    let t = (now_ms as f64 / 1000.0) / 600.0;
    let phase = position.latitude * 0.7 + position.longitude * 0.3;
    let swing = (t + phase).sin();
    let wobble = (t * 1.7 + phase).cos();

    WeatherReport {
        temperature_c: 30.0 + swing * 5.0,
        conditions: conditions_from((t * 0.6 + phase).sin()),
        wind_speed_kmh: 10.0 + wobble * 10.0,
        humidity_pct: 75.0 + swing * 15.0,
        pressure_hpa: 1015.0 + wobble * 15.0,
        wave_height_m: 1.05 + swing * 0.95,
        wave_period_s: 7.5 + wobble * 4.5,
        water_temperature_c: 26.0 + swing * 4.0,
        salinity_ppt: 32.5 + wobble * 2.5,
        tides: vec![
            TideEntry {
                time: "04:12".to_string(),
                height_m: 0.8,
                tide: TideType::Low,
            },
            TideEntry {
                time: "10:36".to_string(),
                height_m: 2.3,
                tide: TideType::High,
            },
            TideEntry {
                time: "16:48".to_string(),
                height_m: 0.7,
                tide: TideType::Low,
            },
            TideEntry {
                time: "23:00".to_string(),
                height_m: 2.1,
                tide: TideType::High,
            },
        ],
    }
}

/// Stand-in for a marine weather service.
#[derive(Debug, Clone, Default)]
pub struct SampleWeatherProvider;

impl SampleWeatherProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WeatherProvider for SampleWeatherProvider {
    async fn current(&self, position: Position) -> Result<WeatherReport, ProviderError> {
        Ok(sample_weather(now_epoch_millis(), position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_are_deterministic() {
        let here = Position::new(8.0883, 77.5385);
        let a = sample_weather(1_700_000_000_000, here);
        let b = sample_weather(1_700_000_000_000, here);
        assert_eq!(a.temperature_c, b.temperature_c);
        assert_eq!(a.conditions, b.conditions);
        assert_eq!(a.wind_speed_kmh, b.wind_speed_kmh);
    }

    #[test]
    fn values_stay_in_coastal_ranges() {
        let here = Position::new(8.0883, 77.5385);
        for step in 0..48u64 {
            let report = sample_weather(step * 1_800_000, here);
            assert!((25.0..=35.0).contains(&report.temperature_c));
            assert!((0.0..=20.0).contains(&report.wind_speed_kmh));
            assert!((60.0..=90.0).contains(&report.humidity_pct));
            assert!((1000.0..=1030.0).contains(&report.pressure_hpa));
            assert!((0.1..=2.0).contains(&report.wave_height_m));
            assert!((3.0..=12.0).contains(&report.wave_period_s));
            assert!((22.0..=30.0).contains(&report.water_temperature_c));
            assert!((30.0..=35.0).contains(&report.salinity_ppt));
            assert_eq!(report.tides.len(), 4);
        }
    }

    #[test]
    fn storms_and_heavy_seas_are_severe() {
        let mut report = sample_weather(0, Position::new(8.0, 77.0));
        report.conditions = WeatherConditions::Sunny;
        report.wind_speed_kmh = 5.0;
        report.wave_height_m = 0.5;
        assert!(!report.is_severe());

        report.conditions = WeatherConditions::Thunderstorm;
        assert!(report.is_severe());

        report.conditions = WeatherConditions::Sunny;
        report.wind_speed_kmh = 18.0;
        assert!(report.is_severe());

        report.wind_speed_kmh = 5.0;
        report.wave_height_m = 1.8;
        assert!(report.is_severe());
    }
}
