//! Outbound deep links. Static string construction only, no API calls.

use contracts::Producto;

use crate::shared::money::formatear_precio;

/// WhatsApp business line, international format without `+`.
pub const WHATSAPP_NUMERO: &str = "5491123456789";
/// Shared payment page for the whole catalog.
pub const PAGO_BASE: &str = "https://mpago.la/1A2B3C4D5E";

pub const CORREO_VENTAS: &str = "ventas@jugueteriamayorista.com";
pub const TELEFONO_VENTAS: &str = "+5491123456789";

/// Chat link prefilled with an inquiry about one product.
pub fn url_whatsapp_producto(producto: &Producto) -> String {
    let mensaje = format!(
        "Hola! Me interesa el producto: {} - {}. ¿Podrías darme más información?",
        producto.nombre,
        formatear_precio(producto.precio)
    );
    url_whatsapp(&mensaje)
}

/// Chat link for the hero call-to-action.
pub fn url_whatsapp_general() -> String {
    url_whatsapp("Hola, quiero información sobre precios mayoristas")
}

fn url_whatsapp(mensaje: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMERO,
        urlencoding::encode(mensaje)
    )
}

/// Payment link parameterized by product id and raw price.
pub fn url_pago(producto: &Producto) -> String {
    format!("{}?product={}&amount={}", PAGO_BASE, producto.id, producto.precio)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn producto() -> Producto {
        Producto {
            id: 3,
            nombre: "Gorro Navideño Reno".to_string(),
            precio: 1800.0,
            descripcion: String::new(),
            imagen_url: String::new(),
            categoria: "Gorros".to_string(),
        }
    }

    #[test]
    fn test_url_de_pago() {
        assert_eq!(
            url_pago(&producto()),
            "https://mpago.la/1A2B3C4D5E?product=3&amount=1800"
        );
    }

    #[test]
    fn test_url_whatsapp_incluye_nombre_y_precio() {
        let url = url_whatsapp_producto(&producto());
        assert!(url.starts_with("https://wa.me/5491123456789?text="));
        assert!(url.contains("Gorro%20Navide%C3%B1o%20Reno"));
        assert!(url.contains("%24%201.800"));
    }

    #[test]
    fn test_url_whatsapp_general() {
        let url = url_whatsapp_general();
        assert!(url.contains("precios%20mayoristas"));
    }
}
