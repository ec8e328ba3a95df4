use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::prelude::StringLen;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(64))", unique, indexed)]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(128))", nullable)]
    pub address: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(32))", nullable)]
    pub phone: Option<String>,

    #[sea_orm(has_many)]
    pub orders: HasMany<super::order::Entity>,

    #[sea_orm(has_many)]
    pub product_reviews: HasMany<super::product_review::Entity>,

    #[sea_orm(has_many)]
    pub blog_users: HasMany<super::blog_user::Entity>,
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            ..ActiveModelTrait::default()
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer({}, \"{}\")", self.id.simple(), self.name)
    }
}
