use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::prelude::StringLen;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Not unique in the database; the importer deduplicates per run.
    #[sea_orm(column_type = "String(StringLen::N(64))", indexed)]
    pub name: String,

    #[sea_orm(has_many)]
    pub articles: HasMany<super::blog_article::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlogAuthor({}, \"{}\")", self.id, self.name)
    }
}
