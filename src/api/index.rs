use axum::response::Json;
use serde_json::{Value, json};

pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Hello World!"
    }))
}
