use contracts::Producto;
use leptos::prelude::*;

use crate::shared::links;
use crate::shared::money::formatear_precio;

/// Substituted when a product image fails to load.
pub const IMAGEN_RESPALDO: &str =
    "https://via.placeholder.com/400x400/e5e7eb/6b7280?text=Sin+Imagen";

/// One catalog card: image with category badge, description, unit price and
/// three actions. The outbound links open in a new context; the order button
/// hands the product back to the page as the event value.
#[component]
pub fn ProductoCard(producto: Producto, on_pedido: Callback<Producto>) -> impl IntoView {
    let url_whatsapp = links::url_whatsapp_producto(&producto);
    let url_compra = links::url_pago(&producto);
    let precio = formatear_precio(producto.precio);

    let (imagen, set_imagen) = signal(producto.imagen_url.clone());
    let para_pedido = producto.clone();

    view! {
        <div class="product-card">
            <div class="product-image">
                <img
                    src=move || imagen.get()
                    alt=producto.nombre.clone()
                    on:error=move |_| set_imagen.set(IMAGEN_RESPALDO.to_string())
                />
                <span class="product-category">{producto.categoria.clone()}</span>
            </div>

            <div class="product-info">
                <h4>{producto.nombre.clone()}</h4>
                <p class="product-description">{producto.descripcion.clone()}</p>

                <div class="product-price">
                    <span class="price">{precio}</span>
                    <span class="price-unit">{"x unidad"}</span>
                </div>

                <div class="product-actions">
                    <a
                        href=url_whatsapp
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-whatsapp"
                    >
                        {"💬 Consultar por WhatsApp"}
                    </a>
                    <a
                        href=url_compra
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-secondary"
                    >
                        {"🛒 Comprar Ahora"}
                    </a>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| on_pedido.run(para_pedido.clone())
                    >
                        {"📋 Hacer Pedido"}
                    </button>
                </div>
            </div>
        </div>
    }
}
