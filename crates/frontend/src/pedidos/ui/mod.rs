mod form;
mod view_model;

pub use form::PedidoForm;
pub use view_model::{FaseEnvio, PedidoFormViewModel};
