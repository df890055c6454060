use contracts::Producto;

/// Catalog loading lifecycle: `Cargando → {Listo, Error}`, and `Error →
/// Cargando` again via the retry control. Loaded products keep the
/// server-provided order.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogoEstado {
    Cargando,
    Listo(Vec<Producto>),
    Error(String),
}

impl CatalogoEstado {
    pub fn desde_resultado(resultado: Result<Vec<Producto>, String>) -> Self {
        match resultado {
            Ok(productos) => CatalogoEstado::Listo(productos),
            Err(mensaje) => CatalogoEstado::Error(mensaje),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resultado_exitoso_conserva_el_orden() {
        let productos: Vec<Producto> = [("B", 2), ("A", 1), ("C", 3)]
            .into_iter()
            .map(|(nombre, id)| Producto {
                id,
                nombre: nombre.to_string(),
                precio: 100.0,
                descripcion: String::new(),
                imagen_url: String::new(),
                categoria: String::new(),
            })
            .collect();

        match CatalogoEstado::desde_resultado(Ok(productos.clone())) {
            CatalogoEstado::Listo(cargados) => assert_eq!(cargados, productos),
            otro => panic!("estado inesperado: {otro:?}"),
        }
    }

    #[test]
    fn test_fallo_conserva_el_mensaje() {
        let estado = CatalogoEstado::desde_resultado(Err("sin red".to_string()));
        assert_eq!(estado, CatalogoEstado::Error("sin red".to_string()));
    }
}
