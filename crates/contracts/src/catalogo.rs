use serde::{Deserialize, Serialize};

/// Catalog item as served by `GET /productos`.
///
/// Immutable on the client once fetched; the list is replaced wholesale on
/// every retry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id: i32,
    pub nombre: String,
    pub precio: f64,
    pub descripcion: String,
    pub imagen_url: String,
    pub categoria: String,
}
