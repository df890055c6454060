use contracts::Producto;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "productos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub precio: f64,
    pub descripcion: String,
    pub imagen_url: String,
    pub categoria: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Producto {
    fn from(m: Model) -> Self {
        Producto {
            id: m.id,
            nombre: m.nombre,
            precio: m.precio,
            descripcion: m.descripcion,
            imagen_url: m.imagen_url,
            categoria: m.categoria,
        }
    }
}

/// Row inserted by the catalog seed. Products have no write endpoint, so
/// this is the only insert path.
#[derive(Debug, Clone)]
pub struct ProductoNuevo {
    pub nombre: String,
    pub precio: f64,
    pub descripcion: String,
    pub imagen_url: String,
    pub categoria: String,
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn listar() -> anyhow::Result<Vec<Producto>> {
    let filas = Entity::find()
        .order_by_asc(Column::Id)
        .all(conn())
        .await?;
    Ok(filas.into_iter().map(Into::into).collect())
}

pub async fn contar() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insertar(nuevo: ProductoNuevo) -> anyhow::Result<i32> {
    let activo = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        nombre: Set(nuevo.nombre),
        precio: Set(nuevo.precio),
        descripcion: Set(nuevo.descripcion),
        imagen_url: Set(nuevo.imagen_url),
        categoria: Set(nuevo.categoria),
    };
    let modelo = activo.insert(conn()).await?;
    Ok(modelo.id)
}
