use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostStore;
use postdex_core::domain::{NewPost, Post};
use postdex_core::error::RepoError;
use postdex_core::ports::PostStore;

fn post_row(id: i64, title: &str, content: &str) -> post::Model {
    let at = Utc.with_ymd_and_hms(2024, 5, 20, 8, 0, 0).unwrap();
    post::Model {
        id,
        title: title.to_owned(),
        content: content.to_owned(),
        created_at: at.into(),
        updated_at: at.into(),
    }
}

#[tokio::test]
async fn test_save_returns_assigned_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_row(17, "Hello", "World")]])
        .into_connection();

    let store = PostgresPostStore::new(db);

    let saved: Post = store
        .save(NewPost::new("Hello".to_owned(), "World".to_owned()))
        .await
        .unwrap();

    assert_eq!(saved.id, 17);
    assert_eq!(saved.title, "Hello");
    assert_eq!(saved.content, "World");
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_row(3, "Test Post", "Content")]])
        .into_connection();

    let store = PostgresPostStore::new(db);

    let post = store.find_by_id(3).await.unwrap().unwrap();

    assert_eq!(post.id, 3);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.created_at, post.updated_at);
}

#[tokio::test]
async fn test_find_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let store = PostgresPostStore::new(db);

    assert!(store.find_by_id(404).await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_maps_connection_errors() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Conn(RuntimeErr::Internal(
            "connection refused".to_owned(),
        ))])
        .into_connection();

    let store = PostgresPostStore::new(db);

    let err = store
        .save(NewPost::new("Hello".to_owned(), "World".to_owned()))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Connection(_)));
}
