use contracts::Producto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::card::ProductoCard;
use crate::catalogo::api;
use crate::catalogo::estado::CatalogoEstado;
use crate::pedidos::ui::PedidoForm;
use crate::shared::config::AppConfig;
use crate::shared::links;

/// Storefront page: hero, product grid, contact block and the order modal.
/// Owns the catalog state, the current selection and the form visibility;
/// children get values and hand events back, never writable state.
#[component]
pub fn PaginaCatalogo(config: AppConfig) -> impl IntoView {
    let (estado, set_estado) = signal(CatalogoEstado::Cargando);
    let (seleccion, set_seleccion) = signal::<Option<Producto>>(None);
    let (form_visible, set_form_visible) = signal(false);

    let api_url = config.api_url;

    let cargar = {
        let api_url = api_url.clone();
        move || {
            let api_url = api_url.clone();
            set_estado.set(CatalogoEstado::Cargando);
            spawn_local(async move {
                let resultado = api::obtener_productos(&api_url).await;
                if let Err(e) = &resultado {
                    log::error!("Error fetching productos: {}", e);
                }
                // try_set: the page may have been disposed while the request ran
                _ = set_estado.try_set(CatalogoEstado::desde_resultado(resultado));
            });
        }
    };
    cargar();

    let abrir_pedido = Callback::new(move |producto: Producto| {
        set_seleccion.set(Some(producto));
        set_form_visible.set(true);
    });
    let abrir_personalizado = Callback::new(move |_: ()| {
        set_seleccion.set(None);
        set_form_visible.set(true);
    });
    let cerrar_pedido = Callback::new(move |_: ()| {
        set_form_visible.set(false);
        set_seleccion.set(None);
    });

    let reintentar = cargar.clone();
    let api_url_pedido = api_url.clone();

    view! {
        {move || match estado.get() {
            CatalogoEstado::Cargando => {
                view! {
                    <div class="container page-section">
                        <div class="loading">
                            <div class="spinner"></div>
                            <span>{"Cargando productos..."}</span>
                        </div>
                    </div>
                }
                    .into_any()
            }
            CatalogoEstado::Error(mensaje) => {
                let reintentar = reintentar.clone();
                view! {
                    <div class="container page-section">
                        <div class="error-box">
                            <h3>{"Error al cargar productos"}</h3>
                            <p>{mensaje}</p>
                            <button class="btn btn-primary" on:click=move |_| reintentar()>
                                {"Reintentar"}
                            </button>
                        </div>
                    </div>
                }
                    .into_any()
            }
            CatalogoEstado::Listo(productos) => {
                view! {
                    <div class="container page-section">
                        <HeroSeccion on_pedido_personalizado=abrir_personalizado />

                        <section>
                            <h3 class="section-title">{"Nuestros Productos"}</h3>
                            {if productos.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <p>{"No hay productos disponibles"}</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="product-grid">
                                        {productos
                                            .into_iter()
                                            .map(|producto| {
                                                view! {
                                                    <ProductoCard producto=producto on_pedido=abrir_pedido />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }}
                        </section>

                        <SeccionContacto />
                    </div>
                }
                    .into_any()
            }
        }}

        {move || {
            form_visible
                .get()
                .then(|| {
                    view! {
                        <PedidoForm
                            producto=seleccion.get()
                            api_url=api_url_pedido.clone()
                            on_close=cerrar_pedido
                        />
                    }
                })
        }}
    }
}

#[component]
fn HeroSeccion(on_pedido_personalizado: Callback<()>) -> impl IntoView {
    view! {
        <section class="hero">
            <h2>{"Catálogo Mayorista 2025"}</h2>
            <p>
                {"Descubre nuestra selección de productos de temporada. Precios especiales para revendedores."}
            </p>
            <div class="hero-actions">
                <a
                    href=links::url_whatsapp_general()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-whatsapp"
                >
                    {"📱 Consultar por WhatsApp"}
                </a>
                <button class="btn btn-secondary" on:click=move |_| on_pedido_personalizado.run(())>
                    {"📋 Hacer Pedido Personalizado"}
                </button>
            </div>
        </section>
    }
}

#[component]
fn SeccionContacto() -> impl IntoView {
    view! {
        <section class="contact-cta">
            <h3>{"¿Necesitas más información?"}</h3>
            <p>
                {"Somos mayoristas con más de 10 años de experiencia. Ofrecemos precios competitivos y entregas rápidas en todo el país."}
            </p>
            <div class="contact-actions">
                <a href=format!("mailto:{}", links::CORREO_VENTAS) class="btn btn-primary">
                    {"📧 Contactar por Email"}
                </a>
                <a href=format!("tel:{}", links::TELEFONO_VENTAS) class="btn btn-secondary">
                    {"📞 Llamar Ahora"}
                </a>
            </div>
        </section>
    }
}
