use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Association object between orders and products. Unlike
/// `products_countries` the link carries its own columns.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: Uuid,

    #[sea_orm(belongs_to, from = "product_id", to = "id")]
    pub product: HasOne<super::product::Entity>,
    #[sea_orm(belongs_to, from = "order_id", to = "id")]
    pub order: HasOne<super::order::Entity>,

    pub unit_price: f64,
    pub quantity: i32,
}

impl ActiveModelBehavior for ActiveModel {}
