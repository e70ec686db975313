use actix_web::web::Bytes;
use actix_web::{get, web, HttpResponse};
use futures_util::stream::unfold;
use tokio::sync::broadcast;

use crate::state::AppState;

#[get("/v1/alerts")]
pub async fn list_alerts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.alerts.recent())
}

/// Live alert feed. Lagging subscribers skip whatever they missed; the
/// bounded history endpoint exists for catch-up.
#[get("/v1/stream/alerts")]
pub async fn stream_alerts(state: web::Data<AppState>) -> HttpResponse {
    let receiver = state.alerts.subscribe();
    let stream = unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(alert) => {
                    let Ok(json) = serde_json::to_string(&alert) else {
                        continue;
                    };
                    let payload = format!("event: alert\ndata: {}\n\n", json);
                    return Some((Ok::<Bytes, actix_web::Error>(Bytes::from(payload)), receiver));
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });

    HttpResponse::Ok()
        .insert_header(("Content-Type", "text/event-stream"))
        .insert_header(("Cache-Control", "no-cache"))
        .insert_header(("Connection", "keep-alive"))
        .streaming(stream)
}
