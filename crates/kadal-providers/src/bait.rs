use crate::weather::{WeatherConditions, WeatherReport};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaitAdvice {
    pub lures: Vec<String>,
    pub live_bait: Vec<String>,
    pub techniques: Vec<String>,
}

impl BaitAdvice {
    fn add(&mut self, lures: &[&str], live_bait: &[&str], techniques: &[&str]) {
        self.lures.extend(lures.iter().map(|s| s.to_string()));
        self.live_bait.extend(live_bait.iter().map(|s| s.to_string()));
        self.techniques
            .extend(techniques.iter().map(|s| s.to_string()));
    }
}

/// Rule-of-thumb tackle guidance derived from current conditions. A
/// thunderstorm contributes no base set of its own; only the temperature
/// and wind adjustments apply then.
pub fn bait_advice(weather: &WeatherReport) -> BaitAdvice {
    let mut advice = BaitAdvice::default();

    match weather.conditions {
        WeatherConditions::Sunny => advice.add(
            &["Reflective spoons", "Crankbaits", "Topwater plugs"],
            &["Minnows", "Worms", "Crickets"],
            &[
                "Cast into shaded areas",
                "Fish deeper water",
                "Early morning/late evening fishing",
            ],
        ),
        WeatherConditions::PartlyCloudy | WeatherConditions::Cloudy => advice.add(
            &["Spinners", "Jigs", "Soft plastic worms"],
            &["Nightcrawlers", "Leeches", "Crayfish"],
            &["Cover more water", "Vary retrieve speeds", "Focus on structure"],
        ),
        WeatherConditions::LightRain => advice.add(
            &["Dark-colored jigs", "Spinnerbaits", "Plastic worms"],
            &["Worms", "Cut bait", "Stinkbait"],
            &["Fish near runoff areas", "Slow presentation", "Focus on cover"],
        ),
        WeatherConditions::Thunderstorm => {}
    }

    if weather.temperature_c < 15.0 {
        advice.add(
            &["Small jigs", "Slow-moving baits"],
            &["Mealworms", "Small minnows"],
            &["Slow retrieves", "Fish deeper water"],
        );
    } else if weather.temperature_c > 25.0 {
        advice.add(
            &["Topwater lures", "Fast-moving spinners"],
            &["Larger minnows", "Crayfish"],
            &["Early morning/late evening fishing", "Target shaded areas"],
        );
    }

    if weather.wind_speed_kmh > 15.0 {
        advice.add(
            &["Heavier jigs", "Spinnerbaits"],
            &[],
            &["Cast into the wind", "Fish windward shorelines"],
        );
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::sample_weather;
    use kadal_geo::Position;

    fn report(
        conditions: WeatherConditions,
        temperature_c: f64,
        wind_speed_kmh: f64,
    ) -> WeatherReport {
        WeatherReport {
            temperature_c,
            conditions,
            wind_speed_kmh,
            humidity_pct: 70.0,
            pressure_hpa: 1013.0,
            wave_height_m: 0.8,
            wave_period_s: 6.0,
            water_temperature_c: 26.0,
            salinity_ppt: 33.0,
            tides: Vec::new(),
        }
    }

    #[test]
    fn sunny_mild_calm_gets_the_base_set_only() {
        let advice = bait_advice(&report(WeatherConditions::Sunny, 20.0, 5.0));
        assert_eq!(
            advice.lures,
            vec!["Reflective spoons", "Crankbaits", "Topwater plugs"]
        );
        assert_eq!(advice.live_bait, vec!["Minnows", "Worms", "Crickets"]);
        assert_eq!(advice.techniques.len(), 3);
    }

    #[test]
    fn partly_cloudy_shares_the_cloudy_set() {
        let partly = bait_advice(&report(WeatherConditions::PartlyCloudy, 20.0, 5.0));
        let cloudy = bait_advice(&report(WeatherConditions::Cloudy, 20.0, 5.0));
        assert_eq!(partly.lures, cloudy.lures);
        assert_eq!(partly.live_bait, cloudy.live_bait);
    }

    #[test]
    fn heat_and_wind_append_adjustments() {
        let advice = bait_advice(&report(WeatherConditions::Sunny, 30.0, 18.0));
        assert!(advice.lures.iter().any(|l| l == "Topwater lures"));
        assert!(advice.lures.iter().any(|l| l == "Heavier jigs"));
        assert!(advice.techniques.iter().any(|t| t == "Cast into the wind"));
    }

    #[test]
    fn cold_snap_slows_the_presentation() {
        let advice = bait_advice(&report(WeatherConditions::Cloudy, 12.0, 5.0));
        assert!(advice.lures.iter().any(|l| l == "Small jigs"));
        assert!(advice.techniques.iter().any(|t| t == "Slow retrieves"));
    }

    #[test]
    fn thunderstorm_leaves_only_adjustments() {
        let advice = bait_advice(&report(WeatherConditions::Thunderstorm, 20.0, 5.0));
        assert!(advice.lures.is_empty());
        assert!(advice.live_bait.is_empty());
        assert!(advice.techniques.is_empty());
    }

    #[test]
    fn sampled_weather_always_yields_some_guidance() {
        // Sampled temperatures never drop below 25 °C, so the warm-water
        // adjustment guarantees a non-empty answer even in a storm.
        let here = Position::new(8.0883, 77.5385);
        for step in 0..24u64 {
            let advice = bait_advice(&sample_weather(step * 3_600_000, here));
            assert!(!advice.lures.is_empty());
        }
    }
}
