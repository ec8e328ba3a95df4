use std::collections::HashMap;
use std::path::Path;

use sea_orm::*;
use shop_schema::entity::{blog_article, blog_author, blog_session, blog_user, blog_view};
use shop_schema::relations::find_product_by_name;
use tracing::{debug, info};

use crate::error::ImportError;
use crate::record::{ArticleRecord, parse_timestamp};

/// Counts of what one import run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub authors: usize,
    pub articles: usize,
    pub articles_without_product: usize,
}

/// Delete every row of the blog tables, children before parents, in one
/// transaction.
pub async fn clear_blog_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let txn = db.begin().await?;

    let views = blog_view::Entity::delete_many().exec(&txn).await?;
    let sessions = blog_session::Entity::delete_many().exec(&txn).await?;
    let users = blog_user::Entity::delete_many().exec(&txn).await?;
    let articles = blog_article::Entity::delete_many().exec(&txn).await?;
    let authors = blog_author::Entity::delete_many().exec(&txn).await?;

    txn.commit().await?;

    info!(
        views = views.rows_affected,
        sessions = sessions.rows_affected,
        users = users.rows_affected,
        articles = articles.rows_affected,
        authors = authors.rows_affected,
        "Cleared blog tables"
    );

    Ok(())
}

/// Replace the blog contents with the articles listed in the CSV at `path`.
///
/// The file is opened before anything is deleted. Articles are written in a
/// second transaction that is only committed once every row has been read,
/// so a bad row leaves the blog tables empty rather than half-filled.
pub async fn import_articles(
    db: &DatabaseConnection,
    path: &Path,
) -> Result<ImportReport, ImportError> {
    let csv_error = |source| ImportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
    let headers = reader.headers().map_err(csv_error)?.clone();

    clear_blog_tables(db).await?;

    let txn = db.begin().await?;

    let mut authors: HashMap<String, i32> = HashMap::new();
    let mut products: HashMap<String, i32> = HashMap::new();
    let mut report = ImportReport::default();

    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let line = row.position().map_or(0, |p| p.line());
        let record: ArticleRecord = row.deserialize(Some(&headers)).map_err(csv_error)?;

        let author_id = match authors.get(&record.author) {
            Some(&id) => id,
            None => {
                let author = blog_author::ActiveModel {
                    name: Set(record.author.clone()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                debug!(%author, "Created author");
                authors.insert(author.name, author.id);
                author.id
            }
        };

        let product_id = match record.product() {
            Some(name) => match products.get(name) {
                Some(&id) => Some(id),
                None => {
                    let found = find_product_by_name(&txn, name).await?;
                    if let Some(product) = &found {
                        products.insert(product.name.clone(), product.id);
                    }
                    found.map(|p| p.id)
                }
            },
            None => None,
        };

        if product_id.is_none() && let Some(name) = record.product() {
            debug!(line, product = name, "Unknown product, article left unlinked");
        }
        if product_id.is_none() {
            report.articles_without_product += 1;
        }

        let timestamp = parse_timestamp(&record.timestamp).map_err(|source| {
            ImportError::Timestamp {
                line,
                value: record.timestamp.clone(),
                source,
            }
        })?;

        blog_article::ActiveModel {
            title: Set(record.title),
            author_id: Set(author_id),
            product_id: Set(product_id),
            timestamp: Set(timestamp),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        report.articles += 1;
    }

    txn.commit().await?;

    report.authors = authors.len();
    info!(
        authors = report.authors,
        articles = report.articles,
        articles_without_product = report.articles_without_product,
        "Imported articles"
    );

    Ok(report)
}
