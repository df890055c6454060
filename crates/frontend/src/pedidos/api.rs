use contracts::pedidos::{ClaveIdempotencia, PedidoRequest, CLAVE_IDEMPOTENCIA_HEADER};
use gloo_net::http::Request;

/// Posts one order. Any 2xx means accepted; the response body is not
/// consumed. The idempotency key lets the backend ignore a duplicate of this
/// same attempt.
pub async fn enviar_pedido(
    api_url: &str,
    pedido: &PedidoRequest,
    clave: ClaveIdempotencia,
) -> Result<(), String> {
    let response = Request::post(&format!("{}/pedidos", api_url))
        .header(CLAVE_IDEMPOTENCIA_HEADER, &clave.to_string())
        .json(pedido)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Order request failed: {}", response.status()));
    }

    Ok(())
}
