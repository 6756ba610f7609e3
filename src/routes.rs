//! HTTP routes: liveness probe plus the single lookup endpoint.

use crate::catalog::matcher;
use crate::model::MatchResult;
use crate::server::AppState;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

type AppStateArc = Arc<AppState>;

pub fn routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(health))
        .route("/check-book", post(check_book))
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
struct CheckRequest {
    #[serde(default)]
    query: String,
}

async fn check_book(
    State(state): State<AppStateArc>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let result = state
        .catalog
        .find(&req.query)
        .await
        .map_err(|e| (StatusCode::SERVICE_UNAVAILABLE, e.to_string()))?;

    match result {
        MatchResult::Found {
            title,
            price,
            stock_note,
            sku,
        } => {
            let message = matcher::stock_message(&title, &stock_note, price);
            Ok(Json(json!({
                "found": true,
                "title": title,
                "price": price_value(price),
                "stock_note": stock_note,
                "sku": sku,
                "message": message,
            })))
        }
        MatchResult::NotFound => Ok(Json(json!({ "found": false }))),
    }
}

/// Whole prices go out as JSON integers, mirroring the rendered message.
fn price_value(price: f64) -> Value {
    if price.fract() == 0.0 {
        Value::from(price as i64)
    } else {
        Value::from(price)
    }
}
