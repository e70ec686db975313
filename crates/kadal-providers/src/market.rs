use crate::{MarketProvider, ProviderError};
use async_trait::async_trait;
use kadal_core::{now_epoch_millis, EpochMillis};
use serde::{Deserialize, Serialize};

const MARKETS: [(&str, &str); 4] = [
    ("Chennai Harbor Fish Market", "Chennai"),
    ("Kanyakumari Port Market", "Kanyakumari"),
    ("Rameshwaram Seafood Exchange", "Rameshwaram"),
    ("Tuticorin Fisheries Hub", "Thoothukudi"),
];

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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketQuote {
    pub id: String,
    pub market_name: String,
    pub location: String,
    pub species: String,
    pub price_inr_per_kg: u32,
    pub quoted_at_ms: EpochMillis,
}

/// Three quotes per landing centre, prices drifting smoothly in the
/// 100-1000 INR/kg band and species rotating daily.
pub fn sample_market_quotes(now_ms: u64) -> Vec<MarketQuote> {
    let t = (now_ms as f64 / 1000.0) / 1_800.0;
    let day_seed = (now_ms / 86_400_000) as usize;
    let mut quotes = Vec::with_capacity(MARKETS.len() * 3);

    for (market_index, (market_name, location)) in MARKETS.iter().enumerate() {
        for slot in 0..3 {
            let species_index = (market_index * 3 + slot + day_seed) % SPECIES.len();
            let swing = (t + (market_index * 3 + slot) as f64 * 0.7).sin();
            let price_inr_per_kg = 100 + (((swing + 1.0) / 2.0) * 900.0).round() as u32;
            quotes.push(MarketQuote {
                id: format!("quote-{market_index}-{slot}"),
                market_name: market_name.to_string(),
                location: location.to_string(),
                species: SPECIES[species_index].to_string(),
                price_inr_per_kg,
                quoted_at_ms: now_ms,
            });
        }
    }

    quotes
}

/// Stand-in for a landing-centre price feed.
#[derive(Debug, Clone, Default)]
pub struct SampleMarketProvider;

impl SampleMarketProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MarketProvider for SampleMarketProvider {
    async fn latest_prices(&self) -> Result<Vec<MarketQuote>, ProviderError> {
        Ok(sample_market_quotes(now_epoch_millis()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_market_quotes_three_species() {
        let quotes = sample_market_quotes(1_700_000_000_000);
        assert_eq!(quotes.len(), 12);
        for (market_name, _) in MARKETS {
            assert_eq!(
                quotes
                    .iter()
                    .filter(|quote| quote.market_name == market_name)
                    .count(),
                3
            );
        }
    }

    #[test]
    fn prices_stay_in_band_and_repeat_deterministically() {
        let a = sample_market_quotes(1_700_000_000_000);
        let b = sample_market_quotes(1_700_000_000_000);
        for (quote_a, quote_b) in a.iter().zip(&b) {
            assert_eq!(quote_a.price_inr_per_kg, quote_b.price_inr_per_kg);
            assert!((100..=1000).contains(&quote_a.price_inr_per_kg));
        }
    }
}
