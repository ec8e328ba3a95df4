use std::fmt;

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::StringLen;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(128))", indexed)]
    pub title: String,

    #[sea_orm(indexed)]
    pub author_id: i32,
    #[sea_orm(belongs_to, from = "author_id", to = "id")]
    pub author: HasOne<super::blog_author::Entity>,

    /// NULL when the article is not about a known product.
    #[sea_orm(indexed)]
    pub product_id: Option<i32>,
    #[sea_orm(belongs_to, from = "product_id", to = "id")]
    pub product: HasOne<super::product::Entity>,

    #[sea_orm(indexed)]
    pub timestamp: DateTimeUtc,

    #[sea_orm(has_many)]
    pub views: HasMany<super::blog_view::Entity>,
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            timestamp: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlogArticle({}, \"{}\")", self.id, self.title)
    }
}
