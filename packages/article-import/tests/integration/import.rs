use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

use article_import::{ImportError, ImportReport, import_articles};
use shop_schema::entity::{blog_article, blog_author, blog_session, blog_user, blog_view};

use crate::common::TestEnv;

mod happy_path {
    use super::*;

    #[tokio::test]
    async fn imported_titles_match_the_csv() {
        let env = TestEnv::spawn().await;
        let path = env.write_csv(&[
            "Jane,,Welcome,2024-01-01 08:00:00",
            "John,,Retro corner,2024-01-02 09:30:00",
            "Jane,,Part two,2024-01-03 10:45:00",
        ]);

        import_articles(&env.db, &path).await.unwrap();

        let titles: BTreeSet<_> = env.articles().await.into_iter().map(|a| a.title).collect();
        let expected: BTreeSet<_> = ["Welcome", "Retro corner", "Part two"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(titles, expected);
    }

    #[tokio::test]
    async fn authors_are_created_once_per_name() {
        let env = TestEnv::spawn().await;
        let path = env.write_csv(&[
            "Jane,,One,2024-01-01 08:00:00",
            "Jane,,Two,2024-01-02 08:00:00",
            "Jane,,Three,2024-01-03 08:00:00",
            "John,,Four,2024-01-04 08:00:00",
        ]);

        let report = import_articles(&env.db, &path).await.unwrap();

        let authors = env.authors().await;
        let names: Vec<_> = authors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Jane", "John"]);
        assert_eq!(report.authors, 2);

        let jane = authors[0].id;
        let by_jane = env
            .articles()
            .await
            .into_iter()
            .filter(|a| a.author_id == jane)
            .count();
        assert_eq!(by_jane, 3);
    }

    #[tokio::test]
    async fn known_products_are_linked_and_others_left_null() {
        let env = TestEnv::spawn().await;
        let amiga = env.seed_product("Commodore", "Amiga 500").await;
        let path = env.write_csv(&[
            "Jane,Amiga 500,Amiga review,2024-01-01 08:00:00",
            "Jane,,General news,2024-01-02 08:00:00",
            "John,Amiga 500,Amiga tips,2024-01-03 08:00:00",
            "John,Atari Jaguar,Jaguar review,2024-01-04 08:00:00",
        ]);

        let report = import_articles(&env.db, &path).await.unwrap();

        let products: Vec<_> = env.articles().await.into_iter().map(|a| a.product_id).collect();
        assert_eq!(products, [Some(amiga.id), None, Some(amiga.id), None]);
        assert_eq!(
            report,
            ImportReport {
                authors: 2,
                articles: 4,
                articles_without_product: 2,
            }
        );
    }

    #[tokio::test]
    async fn timestamps_are_stored_as_utc() {
        let env = TestEnv::spawn().await;
        let path = env.write_csv(&["Jane,,Launch,2023-12-31 23:59:59"]);

        import_articles(&env.db, &path).await.unwrap();

        let articles = env.articles().await;
        assert_eq!(
            articles[0].timestamp,
            Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap()
        );
    }

    #[tokio::test]
    async fn titles_with_commas_survive_quoting() {
        let env = TestEnv::spawn().await;
        let path = env.write_csv(&[r#"Jane,,"Bits, bytes, and nibbles",2024-01-01 08:00:00"#]);

        import_articles(&env.db, &path).await.unwrap();

        assert_eq!(env.articles().await[0].title, "Bits, bytes, and nibbles");
    }
}

mod reruns {
    use super::*;

    #[tokio::test]
    async fn running_twice_gives_the_same_counts_as_once() {
        let env = TestEnv::spawn().await;
        env.seed_product("Sinclair", "ZX Spectrum").await;
        let path = env.write_csv(&[
            "Jane,ZX Spectrum,Speccy at 40,2024-01-01 08:00:00",
            "John,,Hello,2024-01-02 08:00:00",
        ]);

        let first = import_articles(&env.db, &path).await.unwrap();
        let articles_after_first = blog_article::Entity::find().count(&env.db).await.unwrap();
        let authors_after_first = blog_author::Entity::find().count(&env.db).await.unwrap();

        let second = import_articles(&env.db, &path).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            blog_article::Entity::find().count(&env.db).await.unwrap(),
            articles_after_first
        );
        assert_eq!(
            blog_author::Entity::find().count(&env.db).await.unwrap(),
            authors_after_first
        );
    }

    #[tokio::test]
    async fn existing_views_sessions_and_users_are_cleared() {
        let env = TestEnv::spawn().await;
        let path = env.write_csv(&["Jane,,Hello,2024-01-01 08:00:00"]);
        import_articles(&env.db, &path).await.unwrap();
        let article = env.articles().await.remove(0);

        let user = blog_user::ActiveModel {
            customer_id: Set(None),
            ..blog_user::ActiveModel::new()
        }
        .insert(&env.db)
        .await
        .unwrap();
        let session = blog_session::ActiveModel {
            user_id: Set(user.id),
            ..blog_session::ActiveModel::new()
        }
        .insert(&env.db)
        .await
        .unwrap();
        blog_view::ActiveModel {
            article_id: Set(article.id),
            session_id: Set(session.id),
            ..blog_view::ActiveModel::new()
        }
        .insert(&env.db)
        .await
        .unwrap();

        import_articles(&env.db, &path).await.unwrap();

        assert_eq!(blog_view::Entity::find().count(&env.db).await.unwrap(), 0);
        assert_eq!(blog_session::Entity::find().count(&env.db).await.unwrap(), 0);
        assert_eq!(blog_user::Entity::find().count(&env.db).await.unwrap(), 0);
        assert_eq!(env.articles().await.len(), 1);
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn invalid_timestamp_fails_and_commits_no_articles() {
        let env = TestEnv::spawn().await;
        let path = env.write_csv(&[
            "Jane,,Fine,2024-01-01 08:00:00",
            "Jane,,Broken,2024-13-40 99:99:99",
        ]);

        let err = import_articles(&env.db, &path).await.unwrap_err();

        match err {
            ImportError::Timestamp { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "2024-13-40 99:99:99");
            }
            other => panic!("expected timestamp error, got {other:?}"),
        }
        assert!(env.articles().await.is_empty());
        assert!(env.authors().await.is_empty());
    }

    #[tokio::test]
    async fn missing_file_fails_before_anything_is_deleted() {
        let env = TestEnv::spawn().await;
        let path = env.write_csv(&["Jane,,Keep me,2024-01-01 08:00:00"]);
        import_articles(&env.db, &path).await.unwrap();

        let err = import_articles(&env.db, &env.missing_csv()).await.unwrap_err();

        assert!(matches!(err, ImportError::Csv { .. }), "got {err:?}");
        let titles: Vec<_> = env.articles().await.into_iter().map(|a| a.title).collect();
        assert_eq!(titles, ["Keep me"]);
    }

    #[tokio::test]
    async fn rows_with_missing_columns_are_rejected() {
        let env = TestEnv::spawn().await;
        let path = env.write_csv(&["Jane,,Short row"]);

        let err = import_articles(&env.db, &path).await.unwrap_err();

        assert!(matches!(err, ImportError::Csv { .. }), "got {err:?}");
        assert!(env.articles().await.is_empty());
    }
}
