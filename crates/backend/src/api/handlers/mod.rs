pub mod catalogo;
pub mod pedidos;
