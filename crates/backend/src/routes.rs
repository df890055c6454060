use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::api::handlers;

/// Route table of the public API.
pub fn configurar_rutas() -> Router {
    Router::new()
        .route(
            "/",
            get(|| async {
                Json(json!({
                    "mensaje": "API E-commerce Mayorista funcionando correctamente"
                }))
            }),
        )
        .route("/health", get(|| async { "ok" }))
        // Catálogo
        .route("/productos", get(handlers::catalogo::listar))
        // Pedidos
        .route(
            "/pedidos",
            get(handlers::pedidos::listar).post(handlers::pedidos::crear),
        )
}
