use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "Product Transparency AI Service";

/// GET / and GET /health
/// Returns the static service descriptor.
pub async fn service_info_handler() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational"
    }))
}
