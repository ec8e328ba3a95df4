use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::prelude::StringLen;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(64))", unique, indexed)]
    pub name: String,

    #[sea_orm(indexed)]
    pub manufacturer_id: i32,
    #[sea_orm(belongs_to, from = "manufacturer_id", to = "id", on_delete = "Cascade")]
    pub manufacturer: HasOne<super::manufacturer::Entity>,

    #[sea_orm(indexed)]
    pub year: i32,

    #[sea_orm(column_type = "String(StringLen::N(32))", nullable)]
    pub cpu: Option<String>,

    #[sea_orm(has_many, via = "product_country")]
    pub countries: HasMany<super::country::Entity>,

    /// Association objects carrying price and quantity per order.
    #[sea_orm(has_many)]
    pub order_items: HasMany<super::order_item::Entity>,

    #[sea_orm(has_many)]
    pub reviews: HasMany<super::product_review::Entity>,

    #[sea_orm(has_many)]
    pub blog_articles: HasMany<super::blog_article::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product({}, \"{}\")", self.id, self.name)
    }
}
