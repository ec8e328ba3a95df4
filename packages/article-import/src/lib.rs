pub mod config;
pub mod error;
pub mod import;
pub mod record;

pub use error::ImportError;
pub use import::{ImportReport, clear_blog_tables, import_articles};
