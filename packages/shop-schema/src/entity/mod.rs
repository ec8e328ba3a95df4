//! Table declarations for the shop and its blog.
//!
//! Every relationship is declared on both ends. Only the `belongs_to` side
//! owns a foreign key column; the `has_many` side is resolved by query.

pub mod blog_article;
pub mod blog_author;
pub mod blog_session;
pub mod blog_user;
pub mod blog_view;
pub mod country;
pub mod customer;
pub mod manufacturer;
pub mod order;
pub mod order_item;
pub mod product;
pub mod product_country;
pub mod product_review;
