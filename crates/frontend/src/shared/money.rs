//! Price formatting in the es-AR style used across the storefront.

/// Formats a price as `$ 2.500`: dot-grouped thousands, no decimals.
pub fn formatear_precio(valor: f64) -> String {
    format!("$ {}", agrupar_miles(valor))
}

fn agrupar_miles(valor: f64) -> String {
    let redondeado = format!("{:.0}", valor);

    // Insert a dot every 3 digits, walking from the end
    let mut invertido = String::new();
    for (i, c) in redondeado.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            invertido.push('.');
        }
        invertido.push(c);
    }

    invertido.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatear_precio() {
        assert_eq!(formatear_precio(2500.0), "$ 2.500");
        assert_eq!(formatear_precio(1800.0), "$ 1.800");
        assert_eq!(formatear_precio(950.0), "$ 950");
        assert_eq!(formatear_precio(0.0), "$ 0");
        assert_eq!(formatear_precio(1000000.0), "$ 1.000.000");
    }

    #[test]
    fn test_totales_derivados() {
        // 3 unidades a $ 1.000
        assert_eq!(formatear_precio(3.0 * 1000.0), "$ 3.000");
    }
}
