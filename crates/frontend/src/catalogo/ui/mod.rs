mod card;
mod page;

pub use card::ProductoCard;
pub use page::PaginaCatalogo;
