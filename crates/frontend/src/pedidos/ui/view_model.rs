use contracts::pedidos::{ClaveIdempotencia, PedidoDto};
use contracts::Producto;
use leptos::prelude::*;

use crate::pedidos::api;

/// Form lifecycle. A failed submit returns to `Editando` with the draft
/// intact; a successful one moves to `Enviado` after resetting the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaseEnvio {
    Editando,
    Enviando,
    Enviado,
}

/// ViewModel for the order form.
#[derive(Clone)]
pub struct PedidoFormViewModel {
    pub form: RwSignal<PedidoDto>,
    pub fase: RwSignal<FaseEnvio>,
    pub error: RwSignal<Option<String>>,
    intento: RwSignal<u32>,
}

impl PedidoFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PedidoDto::default()),
            fase: RwSignal::new(FaseEnvio::Editando),
            error: RwSignal::new(None),
            intento: RwSignal::new(0),
        }
    }

    /// Validates the draft and, if it passes, posts it. Validation failures
    /// never reach the network. A completion belonging to a superseded
    /// attempt, or arriving after the form was disposed, is dropped.
    pub fn enviar_command(&self, producto: Option<Producto>, api_url: String) {
        let actual = self.form.get_untracked();
        if let Err(motivo) = actual.validar() {
            self.error.set(Some(motivo.to_string()));
            return;
        }

        self.error.set(None);
        self.fase.set(FaseEnvio::Enviando);

        // Each attempt gets its own number and idempotency key
        let numero = self.intento.get_untracked() + 1;
        self.intento.set(numero);
        let clave = ClaveIdempotencia::nueva();
        let request = actual.a_request(producto.as_ref());

        let form = self.form;
        let fase = self.fase;
        let error = self.error;
        let intento = self.intento;
        wasm_bindgen_futures::spawn_local(async move {
            let resultado = api::enviar_pedido(&api_url, &request, clave).await;
            if intento.try_get_untracked() != Some(numero) {
                return;
            }
            match resultado {
                Ok(()) => {
                    _ = form.try_set(PedidoDto::default());
                    _ = fase.try_set(FaseEnvio::Enviado);
                }
                Err(_) => {
                    _ = error.try_set(Some("Error al enviar el pedido".to_string()));
                    _ = fase.try_set(FaseEnvio::Editando);
                }
            }
        });
    }
}
