use axum::Json;
use contracts::Producto;

use crate::domain::catalogo;

/// GET /productos
pub async fn listar() -> Result<Json<Vec<Producto>>, axum::http::StatusCode> {
    match catalogo::service::listar().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
