use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalogo::Producto;

/// Sentinel product id submitted when no product is selected.
pub const PRODUCTO_PERSONALIZADO_ID: i32 = 0;
/// Product name submitted alongside the sentinel id.
pub const PRODUCTO_PERSONALIZADO_NOMBRE: &str = "Pedido personalizado";

pub const CANTIDAD_MIN: u32 = 1;
pub const CANTIDAD_MAX: u32 = 100;

/// Header carrying the per-attempt idempotency key of `POST /pedidos`.
pub const CLAVE_IDEMPOTENCIA_HEADER: &str = "x-idempotency-key";

/// Validation outcome for an order. Display strings are the user-facing
/// messages shown verbatim in the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PedidoInvalido {
    #[error("Por favor completa todos los campos obligatorios")]
    CamposObligatorios,
    #[error("La cantidad debe estar entre {} y {}", CANTIDAD_MIN, CANTIDAD_MAX)]
    CantidadFueraDeRango,
}

/// Order draft held by the form while it is open. Discarded on close and
/// reset to defaults on a successful submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoDto {
    pub nombre: String,
    pub telefono: String,
    pub cantidad: u32,
    pub comentarios: String,
}

impl Default for PedidoDto {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            telefono: String::new(),
            cantidad: CANTIDAD_MIN,
            comentarios: String::new(),
        }
    }
}

impl PedidoDto {
    /// Gate before any network call: trimmed name and phone must be
    /// non-empty.
    pub fn validar(&self) -> Result<(), PedidoInvalido> {
        if self.nombre.trim().is_empty() || self.telefono.trim().is_empty() {
            return Err(PedidoInvalido::CamposObligatorios);
        }
        Ok(())
    }

    /// Wire payload for `POST /pedidos`. Text fields are trimmed, quantity
    /// is clamped into range, and a missing product maps to the sentinel.
    pub fn a_request(&self, producto: Option<&Producto>) -> PedidoRequest {
        PedidoRequest {
            nombre: self.nombre.trim().to_string(),
            telefono: self.telefono.trim().to_string(),
            producto_id: producto.map_or(PRODUCTO_PERSONALIZADO_ID, |p| p.id),
            producto_nombre: producto
                .map_or_else(|| PRODUCTO_PERSONALIZADO_NOMBRE.to_string(), |p| p.nombre.clone()),
            cantidad: acotar_cantidad(self.cantidad),
            comentarios: self.comentarios.trim().to_string(),
        }
    }

    /// Display-only total for a selected product. Never sent to the backend.
    pub fn total(&self, producto: &Producto) -> f64 {
        producto.precio * f64::from(acotar_cantidad(self.cantidad))
    }
}

/// Clamp a quantity into `[CANTIDAD_MIN, CANTIDAD_MAX]`.
pub fn acotar_cantidad(cantidad: u32) -> u32 {
    cantidad.clamp(CANTIDAD_MIN, CANTIDAD_MAX)
}

/// Body of `POST /pedidos`. Field names are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoRequest {
    pub nombre: String,
    pub telefono: String,
    pub producto_id: i32,
    pub producto_nombre: String,
    pub cantidad: u32,
    #[serde(default)]
    pub comentarios: String,
}

impl PedidoRequest {
    /// Server-side gate: same required fields as the client plus the
    /// quantity range.
    pub fn validar(&self) -> Result<(), PedidoInvalido> {
        if self.nombre.trim().is_empty() || self.telefono.trim().is_empty() {
            return Err(PedidoInvalido::CamposObligatorios);
        }
        if self.cantidad < CANTIDAD_MIN || self.cantidad > CANTIDAD_MAX {
            return Err(PedidoInvalido::CantidadFueraDeRango);
        }
        Ok(())
    }
}

/// Body of a successful `POST /pedidos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PedidoResponse {
    pub id: i32,
    pub mensaje: String,
}

/// Recorded order as returned by the back-office listing `GET /pedidos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PedidoRegistrado {
    pub id: i32,
    pub nombre: String,
    pub telefono: String,
    pub producto_nombre: String,
    pub cantidad: u32,
    pub comentarios: String,
    pub fecha_pedido: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListaPedidos {
    pub pedidos: Vec<PedidoRegistrado>,
}

/// Client-generated key identifying one submission attempt. A replayed key
/// must not record a second order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClaveIdempotencia(Uuid);

impl ClaveIdempotencia {
    pub fn nueva() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn valor(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ClaveIdempotencia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn producto_de_prueba() -> Producto {
        Producto {
            id: 7,
            nombre: "Gorro Polar Dinosaurio".to_string(),
            precio: 1000.0,
            descripcion: "Gorro polar con diseño de dinosaurio".to_string(),
            imagen_url: "https://example.com/gorro.jpg".to_string(),
            categoria: "Gorros".to_string(),
        }
    }

    fn dto_valido() -> PedidoDto {
        PedidoDto {
            nombre: "Ana García".to_string(),
            telefono: "+54 9 11 1234-5678".to_string(),
            cantidad: 3,
            comentarios: "Colores surtidos".to_string(),
        }
    }

    #[test]
    fn test_dto_por_defecto() {
        let dto = PedidoDto::default();
        assert_eq!(dto.nombre, "");
        assert_eq!(dto.telefono, "");
        assert_eq!(dto.cantidad, 1);
        assert_eq!(dto.comentarios, "");
    }

    #[test]
    fn test_validar_rechaza_campos_vacios() {
        let mut dto = dto_valido();
        dto.nombre = String::new();
        assert_eq!(dto.validar(), Err(PedidoInvalido::CamposObligatorios));

        let mut dto = dto_valido();
        dto.telefono = "   ".to_string();
        assert_eq!(dto.validar(), Err(PedidoInvalido::CamposObligatorios));

        assert!(dto_valido().validar().is_ok());
    }

    #[test]
    fn test_mensaje_de_validacion_es_el_texto_visible() {
        assert_eq!(
            PedidoInvalido::CamposObligatorios.to_string(),
            "Por favor completa todos los campos obligatorios"
        );
        assert_eq!(
            PedidoInvalido::CantidadFueraDeRango.to_string(),
            "La cantidad debe estar entre 1 y 100"
        );
    }

    #[test]
    fn test_request_con_producto_seleccionado() {
        let mut dto = dto_valido();
        dto.nombre = "  Ana García  ".to_string();
        dto.comentarios = " Colores surtidos ".to_string();

        let req = dto.a_request(Some(&producto_de_prueba()));
        assert_eq!(req.nombre, "Ana García");
        assert_eq!(req.telefono, "+54 9 11 1234-5678");
        assert_eq!(req.producto_id, 7);
        assert_eq!(req.producto_nombre, "Gorro Polar Dinosaurio");
        assert_eq!(req.cantidad, 3);
        assert_eq!(req.comentarios, "Colores surtidos");
    }

    #[test]
    fn test_request_sin_producto_usa_el_centinela() {
        let req = dto_valido().a_request(None);
        assert_eq!(req.producto_id, 0);
        assert_eq!(req.producto_nombre, "Pedido personalizado");
    }

    #[test]
    fn test_cantidad_se_acota_al_rango() {
        assert_eq!(acotar_cantidad(0), 1);
        assert_eq!(acotar_cantidad(1), 1);
        assert_eq!(acotar_cantidad(55), 55);
        assert_eq!(acotar_cantidad(100), 100);
        assert_eq!(acotar_cantidad(250), 100);

        let mut dto = dto_valido();
        dto.cantidad = 250;
        assert_eq!(dto.a_request(None).cantidad, 100);
    }

    #[test]
    fn test_total_es_precio_por_cantidad() {
        let dto = dto_valido();
        assert_eq!(dto.total(&producto_de_prueba()), 3000.0);
    }

    #[test]
    fn test_forma_del_payload() {
        let valor = serde_json::to_value(dto_valido().a_request(None)).unwrap();
        let objeto = valor.as_object().unwrap();
        let claves: Vec<&str> = objeto.keys().map(String::as_str).collect();
        for clave in [
            "nombre",
            "telefono",
            "producto_id",
            "producto_nombre",
            "cantidad",
            "comentarios",
        ] {
            assert!(claves.contains(&clave), "falta la clave {clave}");
        }
        assert_eq!(objeto.len(), 6);
        assert_eq!(valor["cantidad"], 3);
    }

    #[test]
    fn test_validacion_del_lado_servidor() {
        let mut req = dto_valido().a_request(None);
        assert!(req.validar().is_ok());

        req.cantidad = 0;
        assert_eq!(req.validar(), Err(PedidoInvalido::CantidadFueraDeRango));
        req.cantidad = 101;
        assert_eq!(req.validar(), Err(PedidoInvalido::CantidadFueraDeRango));

        let mut req = dto_valido().a_request(None);
        req.telefono = "  ".to_string();
        assert_eq!(req.validar(), Err(PedidoInvalido::CamposObligatorios));
    }

    #[test]
    fn test_claves_de_idempotencia_distintas_por_intento() {
        assert_ne!(ClaveIdempotencia::nueva(), ClaveIdempotencia::nueva());
    }
}
