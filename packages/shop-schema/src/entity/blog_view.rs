use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde::{Deserialize, Serialize};

/// A single read of an article within a session.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_views")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub article_id: i32,
    #[sea_orm(belongs_to, from = "article_id", to = "id")]
    pub article: HasOne<super::blog_article::Entity>,

    pub session_id: Uuid,
    #[sea_orm(belongs_to, from = "session_id", to = "id")]
    pub session: HasOne<super::blog_session::Entity>,

    #[sea_orm(indexed)]
    pub timestamp: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            timestamp: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}
