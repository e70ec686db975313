use actix_web::{delete, get, post, web, HttpResponse};
use kadal_core::{ContactId, EmergencyContact};
use kadal_storage::ContactRepository;

use crate::routes::common::{bad_request, internal_error, not_found, parse_uuid};
use crate::routes::spots::ListQuery;
use crate::state::AppState;

#[get("/v1/contacts")]
pub async fn list_contacts(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let limit = query.limit.unwrap_or(100);
    let offset = query.offset.unwrap_or(0);

    match ContactRepository::list(&state.store, limit, offset).await {
        Ok(contacts) => HttpResponse::Ok().json(contacts),
        Err(err) => internal_error(err.message),
    }
}

#[get("/v1/contacts/{id}")]
pub async fn get_contact(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    let uuid = match parse_uuid(&id) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let contact_id = ContactId::from_uuid(uuid);

    match ContactRepository::get(&state.store, contact_id).await {
        Ok(Some(contact)) => HttpResponse::Ok().json(contact),
        Ok(None) => not_found("contact not found"),
        Err(err) => internal_error(err.message),
    }
}

#[post("/v1/contacts")]
pub async fn upsert_contact(
    state: web::Data<AppState>,
    payload: web::Json<EmergencyContact>,
) -> HttpResponse {
    let contact = payload.into_inner();
    if contact.name.trim().is_empty() {
        return bad_request("contact name is required");
    }
    if contact.phone.trim().is_empty() {
        return bad_request("contact phone is required");
    }

    match ContactRepository::upsert(&state.store, contact.clone()).await {
        Ok(()) => HttpResponse::Ok().json(contact),
        Err(err) => internal_error(err.message),
    }
}

#[delete("/v1/contacts/{id}")]
pub async fn delete_contact(state: web::Data<AppState>, id: web::Path<String>) -> HttpResponse {
    let uuid = match parse_uuid(&id) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let contact_id = ContactId::from_uuid(uuid);

    match ContactRepository::delete(&state.store, contact_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => internal_error(err.message),
    }
}
