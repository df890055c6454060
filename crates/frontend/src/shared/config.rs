use wasm_bindgen::JsValue;

/// Backend address used when the hosting page injects nothing.
pub const API_URL_POR_DEFECTO: &str = "http://localhost:8000";

/// Runtime configuration, resolved once at startup and passed down by value.
/// Components that issue requests receive it as an explicit parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
}

impl AppConfig {
    /// Reads `window.API_URL`, which the hosting page may define to point the
    /// app at a non-local backend.
    pub fn desde_window() -> Self {
        let inyectada = web_sys::window()
            .map(JsValue::from)
            .and_then(|ventana| js_sys::Reflect::get(&ventana, &JsValue::from_str("API_URL")).ok())
            .and_then(|valor| valor.as_string());
        Self::resolver(inyectada)
    }

    /// Resolution rule: a non-blank injected value wins, otherwise the local
    /// development default. Trailing slashes are stripped so paths can be
    /// appended with a single `/`.
    pub fn resolver(inyectada: Option<String>) -> Self {
        let api_url = match inyectada {
            Some(valor) if !valor.trim().is_empty() => {
                valor.trim().trim_end_matches('/').to_string()
            }
            _ => API_URL_POR_DEFECTO.to_string(),
        };
        Self { api_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sin_valor_usa_el_defecto() {
        assert_eq!(AppConfig::resolver(None).api_url, "http://localhost:8000");
        assert_eq!(
            AppConfig::resolver(Some("   ".to_string())).api_url,
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_valor_inyectado_gana() {
        let config = AppConfig::resolver(Some("https://api.jugueteria.com".to_string()));
        assert_eq!(config.api_url, "https://api.jugueteria.com");
    }

    #[test]
    fn test_se_recorta_la_barra_final() {
        let config = AppConfig::resolver(Some("https://api.jugueteria.com/".to_string()));
        assert_eq!(config.api_url, "https://api.jugueteria.com");
    }
}
