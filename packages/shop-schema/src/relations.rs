//! Reverse views of the relationships declared in [`crate::entity`].
//!
//! Only the child side of a relationship stores a foreign key, so the parent
//! side is always answered with a query here.

use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use uuid::Uuid;

use crate::entity::{
    blog_article, country, manufacturer, order_item, product, product_country, product_review,
};

pub async fn find_product_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<product::Model>, DbErr> {
    product::Entity::find()
        .filter(product::Column::Name.eq(name))
        .one(db)
        .await
}

pub async fn products_of_manufacturer<C: ConnectionTrait>(
    db: &C,
    manufacturer_id: i32,
) -> Result<Vec<product::Model>, DbErr> {
    product::Entity::find()
        .filter(product::Column::ManufacturerId.eq(manufacturer_id))
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
}

/// Countries a product was developed in, ordered by name.
pub async fn countries_of_product<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
) -> Result<Vec<country::Model>, DbErr> {
    let rows = product_country::Entity::find()
        .filter(product_country::Column::ProductId.eq(product_id))
        .find_also_related(country::Entity)
        .all(db)
        .await?;

    let mut countries: Vec<_> = rows.into_iter().filter_map(|(_, c)| c).collect();
    countries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(countries)
}

/// Products developed in a country, ordered by name.
pub async fn products_of_country<C: ConnectionTrait>(
    db: &C,
    country_id: i32,
) -> Result<Vec<product::Model>, DbErr> {
    let rows = product_country::Entity::find()
        .filter(product_country::Column::CountryId.eq(country_id))
        .find_also_related(product::Entity)
        .all(db)
        .await?;

    let mut products: Vec<_> = rows.into_iter().filter_map(|(_, p)| p).collect();
    products.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(products)
}

/// Link a product to a country. Returns `false` if the pair already existed.
pub async fn link_product_country<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
    country_id: i32,
) -> Result<bool, DbErr> {
    let model = product_country::ActiveModel {
        product_id: Set(product_id),
        country_id: Set(country_id),
    };

    let result = product_country::Entity::insert(model)
        .on_conflict(
            OnConflict::columns([
                product_country::Column::ProductId,
                product_country::Column::CountryId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(db)
        .await;

    match result {
        Ok(rows) => Ok(rows > 0),
        Err(DbErr::RecordNotInserted) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Items of an order together with the product each one refers to.
pub async fn items_of_order<C: ConnectionTrait>(
    db: &C,
    order_id: Uuid,
) -> Result<Vec<(order_item::Model, Option<product::Model>)>, DbErr> {
    order_item::Entity::find()
        .filter(order_item::Column::OrderId.eq(order_id))
        .find_also_related(product::Entity)
        .order_by_asc(order_item::Column::ProductId)
        .all(db)
        .await
}

/// Reviews of a product, newest first.
pub async fn reviews_of_product<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
) -> Result<Vec<product_review::Model>, DbErr> {
    product_review::Entity::find()
        .filter(product_review::Column::ProductId.eq(product_id))
        .order_by_desc(product_review::Column::Timestamp)
        .all(db)
        .await
}

pub async fn articles_of_author<C: ConnectionTrait>(
    db: &C,
    author_id: i32,
) -> Result<Vec<blog_article::Model>, DbErr> {
    blog_article::Entity::find()
        .filter(blog_article::Column::AuthorId.eq(author_id))
        .order_by_asc(blog_article::Column::Timestamp)
        .all(db)
        .await
}

/// Delete a manufacturer. Its products are removed by the database through
/// `ON DELETE CASCADE`. Returns the number of manufacturers deleted.
pub async fn delete_manufacturer<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, DbErr> {
    let result = manufacturer::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}
