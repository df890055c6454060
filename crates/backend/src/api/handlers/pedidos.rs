use axum::{http::HeaderMap, Json};
use contracts::{ListaPedidos, PedidoRequest, PedidoResponse, CLAVE_IDEMPOTENCIA_HEADER};

use crate::domain::pedidos;

/// POST /pedidos
pub async fn crear(
    headers: HeaderMap,
    Json(req): Json<PedidoRequest>,
) -> Result<Json<PedidoResponse>, axum::http::StatusCode> {
    if req.validar().is_err() {
        return Err(axum::http::StatusCode::BAD_REQUEST);
    }
    let clave = clave_de_idempotencia(&headers);
    match pedidos::service::crear(req, clave).await {
        Ok(respuesta) => Ok(Json(respuesta)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /pedidos
pub async fn listar() -> Result<Json<ListaPedidos>, axum::http::StatusCode> {
    match pedidos::service::listar().await {
        Ok(lista) => Ok(Json(lista)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// A malformed or absent key disables deduplication for that request
/// instead of rejecting it. Parsing through Uuid also normalizes casing.
fn clave_de_idempotencia(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CLAVE_IDEMPOTENCIA_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| uuid::Uuid::parse_str(s.trim()).ok())
        .map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_la_clave_se_normaliza_a_minusculas() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CLAVE_IDEMPOTENCIA_HEADER,
            HeaderValue::from_static("  6FA459EA-EE8A-3CA4-894E-DB77E160355E "),
        );
        assert_eq!(
            clave_de_idempotencia(&headers),
            Some("6fa459ea-ee8a-3ca4-894e-db77e160355e".to_string())
        );
    }

    #[test]
    fn test_claves_invalidas_se_ignoran() {
        let mut headers = HeaderMap::new();
        headers.insert(CLAVE_IDEMPOTENCIA_HEADER, HeaderValue::from_static("abc"));
        assert_eq!(clave_de_idempotencia(&headers), None);
        assert_eq!(clave_de_idempotencia(&HeaderMap::new()), None);
    }
}
