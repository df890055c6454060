use super::repository;
use super::repository::ProductoNuevo;
use contracts::Producto;

/// Full catalog, oldest product first.
pub async fn listar() -> anyhow::Result<Vec<Producto>> {
    repository::listar().await
}

/// Seeds the launch catalog once, on an empty products table.
pub async fn sembrar_si_vacio() -> anyhow::Result<()> {
    if repository::contar().await? > 0 {
        return Ok(());
    }

    tracing::info!("Empty catalog, seeding initial products");
    let semillas = vec![
        ProductoNuevo {
            nombre: "Gorro de Invierno Unicornio".into(),
            precio: 2500.00,
            descripcion: "Gorro térmico para niñas con diseño de unicornio. Tallas 2-8 años. Material: acrílico suave.".into(),
            imagen_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=400&fit=crop".into(),
            categoria: "Gorros".into(),
        },
        ProductoNuevo {
            nombre: "Gorro Polar Dinosaurio".into(),
            precio: 2200.00,
            descripcion: "Gorro polar con orejas de dinosaurio. Perfecto para niños aventureros. Tallas 3-10 años.".into(),
            imagen_url: "https://images.unsplash.com/photo-1607083206869-4c7672e72a8a?w=400&h=400&fit=crop".into(),
            categoria: "Gorros".into(),
        },
        ProductoNuevo {
            nombre: "Gorro Navideño Reno".into(),
            precio: 1800.00,
            descripcion: "Gorro festivo con diseño de reno navideño. Ideal para las fiestas. Talla única.".into(),
            imagen_url: "https://images.unsplash.com/photo-1544473244-f6895e69ad8b?w=400&h=400&fit=crop".into(),
            categoria: "Gorros".into(),
        },
        ProductoNuevo {
            nombre: "Gorro Térmico Oso Panda".into(),
            precio: 2300.00,
            descripcion: "Gorro de invierno súper suave con diseño de oso panda. Material hipoalergénico.".into(),
            imagen_url: "https://images.unsplash.com/photo-1578761499019-d9d4b2a9c18e?w=400&h=400&fit=crop".into(),
            categoria: "Gorros".into(),
        },
        ProductoNuevo {
            nombre: "Gorro Reversible Astronauta".into(),
            precio: 2800.00,
            descripcion: "Gorro reversible con diseño espacial. Un lado astronauta, otro lado galaxia. Novedad!".into(),
            imagen_url: "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?w=400&h=400&fit=crop".into(),
            categoria: "Gorros".into(),
        },
    ];

    for semilla in semillas {
        repository::insertar(semilla).await?;
    }
    Ok(())
}
