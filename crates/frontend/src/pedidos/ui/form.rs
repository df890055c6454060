use contracts::pedidos::{acotar_cantidad, CANTIDAD_MIN};
use contracts::Producto;
use leptos::prelude::*;

use super::view_model::{FaseEnvio, PedidoFormViewModel};
use crate::shared::money::formatear_precio;

/// Modal order form. The product (if any), the backend address and the close
/// callback arrive by value; the draft lives in the view model and is gone
/// once the modal closes.
#[component]
pub fn PedidoForm(
    producto: Option<Producto>,
    api_url: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = PedidoFormViewModel::new();
    let fase = vm.fase;

    let titulo = if producto.is_some() {
        "Hacer Pedido"
    } else {
        "Pedido Personalizado"
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{titulo}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        {"×"}
                    </button>
                </div>

                <Show
                    when=move || fase.get() == FaseEnvio::Enviado
                    fallback=move || {
                        view! {
                            <CuerpoFormulario
                                vm=vm.clone()
                                producto=producto.clone()
                                api_url=api_url.clone()
                                on_close=on_close
                            />
                        }
                    }
                >
                    <PedidoEnviado on_close=on_close />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn CuerpoFormulario(
    vm: PedidoFormViewModel,
    producto: Option<Producto>,
    api_url: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = vm.form;
    let fase = vm.fase;
    let error = vm.error;

    let producto_total = producto.clone();
    let enviar = {
        let vm = vm.clone();
        let producto = producto.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.enviar_command(producto.clone(), api_url.clone());
        }
    };

    view! {
        <form class="order-form" on:submit=enviar>
            {producto
                .as_ref()
                .map(|p| {
                    view! {
                        <div class="selected-product">
                            <img src=p.imagen_url.clone() alt=p.nombre.clone() />
                            <div>
                                <h4>{p.nombre.clone()}</h4>
                                <p class="price">{formatear_precio(p.precio)}</p>
                            </div>
                        </div>
                    }
                })}

            {move || error.get().map(|mensaje| view! { <div class="form-error">{mensaje}</div> })}

            <div class="form-group">
                <label>{"Nombre completo *"}</label>
                <input
                    type="text"
                    prop:value=move || form.get().nombre
                    on:input=move |ev| form.update(|f| f.nombre = event_target_value(&ev))
                    placeholder="Tu nombre y apellido"
                />
            </div>

            <div class="form-group">
                <label>{"Teléfono *"}</label>
                <input
                    type="tel"
                    prop:value=move || form.get().telefono
                    on:input=move |ev| form.update(|f| f.telefono = event_target_value(&ev))
                    placeholder="Ej: +54 9 11 1234-5678"
                />
            </div>

            <div class="form-group">
                <label>{"Cantidad"}</label>
                <input
                    type="number"
                    min="1"
                    max="100"
                    prop:value=move || form.get().cantidad.to_string()
                    on:input=move |ev| {
                        form.update(|f| {
                            f.cantidad = event_target_value(&ev)
                                .parse()
                                .map(acotar_cantidad)
                                .unwrap_or(CANTIDAD_MIN);
                        })
                    }
                />
            </div>

            {producto_total
                .map(|p| {
                    view! {
                        <div class="total-box">
                            <span>{"Total:"}</span>
                            <span class="total-amount">
                                {move || formatear_precio(form.get().total(&p))}
                            </span>
                        </div>
                    }
                })}

            <div class="form-group">
                <label>{"Comentarios adicionales"}</label>
                <textarea
                    prop:value=move || form.get().comentarios
                    on:input=move |ev| form.update(|f| f.comentarios = event_target_value(&ev))
                    rows="3"
                    placeholder="Información adicional, colores preferidos, etc."
                ></textarea>
            </div>

            <div class="form-buttons">
                <button type="button" class="btn btn-cancel" on:click=move |_| on_close.run(())>
                    {"Cancelar"}
                </button>
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || fase.get() == FaseEnvio::Enviando
                >
                    {move || {
                        if fase.get() == FaseEnvio::Enviando { "Enviando..." } else { "Enviar Pedido" }
                    }}
                </button>
            </div>

            <p class="form-note">
                {"* Campos obligatorios. Nos contactaremos contigo para confirmar el pedido."}
            </p>
        </form>
    }
}

#[component]
fn PedidoEnviado(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="order-success">
            <div class="order-success__icon">{"✅"}</div>
            <h4>{"¡Pedido Enviado!"}</h4>
            <p>{"Hemos recibido tu pedido correctamente. Nos pondremos en contacto contigo pronto."}</p>
            <button class="btn btn-primary" on:click=move |_| on_close.run(())>
                {"Cerrar"}
            </button>
        </div>
    }
}
