use contracts::Producto;
use gloo_net::http::Request;

/// Fetches the whole catalog. Retries re-issue this identical request; there
/// is no pagination and no caching.
pub async fn obtener_productos(api_url: &str) -> Result<Vec<Producto>, String> {
    let response = Request::get(&format!("{}/productos", api_url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Catalog request failed: {}", response.status()));
    }

    response
        .json::<Vec<Producto>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
