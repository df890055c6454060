use chrono::Utc;
use contracts::{PedidoRegistrado, PedidoRequest};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pedidos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub telefono: String,
    pub producto_id: i32,
    pub producto_nombre: String,
    pub cantidad: i32,
    pub comentarios: String,
    pub clave_idempotencia: Option<String>,
    pub fecha_pedido: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PedidoRegistrado {
    fn from(m: Model) -> Self {
        PedidoRegistrado {
            id: m.id,
            nombre: m.nombre,
            telefono: m.telefono,
            producto_nombre: m.producto_nombre,
            cantidad: u32::try_from(m.cantidad).unwrap_or(0),
            comentarios: m.comentarios,
            fecha_pedido: m.fecha_pedido,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn insertar(req: &PedidoRequest, clave: Option<&str>) -> anyhow::Result<Model> {
    let activo = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        nombre: Set(req.nombre.clone()),
        telefono: Set(req.telefono.clone()),
        producto_id: Set(req.producto_id),
        producto_nombre: Set(req.producto_nombre.clone()),
        cantidad: Set(req.cantidad as i32),
        comentarios: Set(req.comentarios.clone()),
        clave_idempotencia: Set(clave.map(str::to_string)),
        fecha_pedido: Set(Utc::now()),
    };
    Ok(activo.insert(conn()).await?)
}

pub async fn buscar_por_clave(clave: &str) -> anyhow::Result<Option<Model>> {
    let resultado = Entity::find()
        .filter(Column::ClaveIdempotencia.eq(clave))
        .one(conn())
        .await?;
    Ok(resultado)
}

/// Newest order first; id breaks ties within the same timestamp.
pub async fn listar() -> anyhow::Result<Vec<PedidoRegistrado>> {
    let filas = Entity::find()
        .order_by_desc(Column::FechaPedido)
        .order_by_desc(Column::Id)
        .all(conn())
        .await?;
    Ok(filas.into_iter().map(Into::into).collect())
}
