pub mod auth;
pub mod health;
pub mod reservation;
pub mod resource;
pub mod room;
pub mod site;
pub mod user;

use axum::Json;
use serde_json::{json, Value};

pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the meeting room booking API" }))
}
