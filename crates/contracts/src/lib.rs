pub mod catalogo;
pub mod pedidos;

pub use catalogo::Producto;
pub use pedidos::{
    ClaveIdempotencia, ListaPedidos, PedidoDto, PedidoInvalido, PedidoRegistrado, PedidoRequest,
    PedidoResponse, CLAVE_IDEMPOTENCIA_HEADER,
};
