pub mod api;
pub mod estado;
pub mod ui;
