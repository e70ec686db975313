use actix_web::{get, web, HttpResponse};
use kadal_providers::MarketProvider;
use std::time::Instant;

use crate::routes::common::{internal_error, unavailable};
use crate::state::AppState;

#[get("/v1/market-prices")]
pub async fn market_prices(state: web::Data<AppState>) -> HttpResponse {
    let now = Instant::now();
    {
        let cache = match state.market_cache.lock() {
            Ok(cache) => cache,
            Err(_) => return internal_error("market cache lock poisoned"),
        };
        if let Some(quotes) = cache.fresh(state.cache_ttl, now) {
            return HttpResponse::Ok().json(quotes);
        }
    }

    match state.market_provider.latest_prices().await {
        Ok(quotes) => {
            if let Ok(mut cache) = state.market_cache.lock() {
                cache.store(quotes.clone(), now);
            }
            HttpResponse::Ok().json(quotes)
        }
        Err(err) => unavailable(err.message),
    }
}
