pub mod alerts;
pub mod bait;
pub mod boundaries;
pub mod common;
pub mod contacts;
pub mod fish;
pub mod health;
pub mod market;
pub mod plans;
pub mod position;
pub mod reports;
pub mod sos;
pub mod spots;
pub mod status;
pub mod weather;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(status::status)
        .service(position::ingest_position)
        .service(position::last_position)
        .service(alerts::list_alerts)
        .service(alerts::stream_alerts)
        .service(sos::activate_sos)
        .service(sos::cancel_sos)
        .service(sos::sos_status)
        .service(weather::weather)
        .service(boundaries::boundaries)
        .service(fish::fish_forecast)
        .service(market::market_prices)
        .service(bait::bait)
        .service(spots::list_spots)
        .service(spots::get_spot)
        .service(spots::upsert_spot)
        .service(spots::delete_spot)
        .service(plans::list_routes)
        .service(plans::get_route)
        .service(plans::upsert_route)
        .service(plans::delete_route)
        .service(plans::route_summary)
        .service(reports::list_catch_reports)
        .service(reports::get_catch_report)
        .service(reports::upsert_catch_report)
        .service(reports::delete_catch_report)
        .service(reports::list_fuel_reports)
        .service(reports::get_fuel_report)
        .service(reports::upsert_fuel_report)
        .service(reports::delete_fuel_report)
        .service(reports::sustainability)
        .service(contacts::list_contacts)
        .service(contacts::get_contact)
        .service(contacts::upsert_contact)
        .service(contacts::delete_contact);
}
