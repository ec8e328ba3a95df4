use anyhow::Context;
use article_import::config::AppConfig;
use article_import::import_articles;
use shop_schema::init_db;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Before the subscriber, so RUST_LOG may come from .env.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::load().context("Failed to load config")?;
    info!(url = %config.database.url, "Database URL");

    let db = init_db(&config.database)
        .await
        .context("Failed to initialize database")?;

    let csv_path = &config.import.csv_path;
    import_articles(&db, csv_path)
        .await
        .with_context(|| format!("Failed to import {}", csv_path.display()))?;

    db.close().await.context("Failed to close database")?;

    Ok(())
}
