use super::repository;
use contracts::{ListaPedidos, PedidoRequest, PedidoResponse};

/// Records an order. When an idempotency key is given and a pedido with
/// that key already exists, the original pedido is returned instead of
/// recording a second one.
pub async fn crear(req: PedidoRequest, clave: Option<String>) -> anyhow::Result<PedidoResponse> {
    if let Some(clave) = clave.as_deref() {
        if let Some(existente) = repository::buscar_por_clave(clave).await? {
            tracing::info!("Reintento detectado, se devuelve el pedido #{}", existente.id);
            return Ok(respuesta(existente.id));
        }
    }

    match repository::insertar(&req, clave.as_deref()).await {
        Ok(modelo) => Ok(respuesta(modelo.id)),
        Err(err) => {
            // Two attempts with the same key can race past the lookup; the
            // UNIQUE column rejects the loser, so re-read before failing.
            if let Some(clave) = clave.as_deref() {
                if let Some(existente) = repository::buscar_por_clave(clave).await? {
                    return Ok(respuesta(existente.id));
                }
            }
            Err(err)
        }
    }
}

/// Back-office listing, newest order first.
pub async fn listar() -> anyhow::Result<ListaPedidos> {
    Ok(ListaPedidos {
        pedidos: repository::listar().await?,
    })
}

fn respuesta(id: i32) -> PedidoResponse {
    PedidoResponse {
        id,
        mensaje: format!(
            "Pedido #{} registrado correctamente. Nos contactaremos pronto!",
            id
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{ClaveIdempotencia, PedidoDto};

    fn solicitud(nombre: &str, cantidad: u32) -> PedidoRequest {
        let dto = PedidoDto {
            nombre: nombre.to_string(),
            telefono: "+54 9 11 5555-0000".to_string(),
            cantidad,
            comentarios: String::new(),
        };
        dto.a_request(None)
    }

    // Single flow test: the connection is a process-wide singleton, so the
    // database scenarios share one throwaway sqlite file.
    #[tokio::test]
    async fn test_flujo_de_pedidos_contra_sqlite() {
        let ruta = std::env::temp_dir().join(format!("catalogo-test-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&ruta);
        let ruta_str = ruta.to_string_lossy().into_owned();

        crate::shared::data::db::initialize_database(Some(&ruta_str))
            .await
            .unwrap();
        crate::shared::data::db::initialize_database(Some(&ruta_str))
            .await
            .unwrap();

        crate::domain::catalogo::service::sembrar_si_vacio()
            .await
            .unwrap();
        crate::domain::catalogo::service::sembrar_si_vacio()
            .await
            .unwrap();

        let productos = crate::domain::catalogo::service::listar().await.unwrap();
        assert_eq!(productos.len(), 5);
        assert_eq!(productos[0].nombre, "Gorro de Invierno Unicornio");
        assert_eq!(productos[0].precio, 2500.0);
        assert!(productos.iter().all(|p| p.categoria == "Gorros"));

        let clave = ClaveIdempotencia::nueva().to_string();
        let primera = crear(solicitud("Ana García", 3), Some(clave.clone()))
            .await
            .unwrap();
        assert_eq!(
            primera.mensaje,
            format!(
                "Pedido #{} registrado correctamente. Nos contactaremos pronto!",
                primera.id
            )
        );

        // Replaying the same key must not record a second pedido
        let repetida = crear(solicitud("Ana García", 3), Some(clave)).await.unwrap();
        assert_eq!(repetida.id, primera.id);

        // A fresh key records a new pedido
        let segunda = crear(
            solicitud("Benito Díaz", 10),
            Some(ClaveIdempotencia::nueva().to_string()),
        )
        .await
        .unwrap();
        assert_ne!(segunda.id, primera.id);

        // No key at all still records
        let tercera = crear(solicitud("Carla Paz", 1), None).await.unwrap();

        let lista = listar().await.unwrap();
        assert_eq!(lista.pedidos.len(), 3);
        assert_eq!(lista.pedidos[0].id, tercera.id);
        assert_eq!(lista.pedidos[0].nombre, "Carla Paz");
        assert_eq!(lista.pedidos[2].cantidad, 3);
    }
}
