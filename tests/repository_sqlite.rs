use sqlx::SqlitePool;
use std::sync::Arc;
use tinylink::domain::repositories::LinkRepository;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::SqliteLinkRepository;

fn repo(pool: SqlitePool) -> SqliteLinkRepository {
    SqliteLinkRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_insert_returns_fresh_record(pool: SqlitePool) {
    let repo = repo(pool);

    let link = repo.insert("abc123", "https://example.com").await.unwrap();

    assert_eq!(link.code, "abc123");
    assert_eq!(link.target_url, "https://example.com");
    assert_eq!(link.total_clicks, 0);
    assert!(link.last_clicked.is_none());
}

#[sqlx::test]
async fn test_insert_duplicate_code_conflicts(pool: SqlitePool) {
    let repo = repo(pool);

    repo.insert("abc123", "https://first.com").await.unwrap();
    let result = repo.insert("abc123", "https://second.com").await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));

    // The original record is untouched.
    let link = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(link.target_url, "https://first.com");
}

#[sqlx::test]
async fn test_find_by_code(pool: SqlitePool) {
    let repo = repo(pool);

    repo.insert("abc123", "https://example.com").await.unwrap();

    let found = repo.find_by_code("abc123").await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().target_url, "https://example.com");

    let missing = repo.find_by_code("nosuch1").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_list_orders_newest_first(pool: SqlitePool) {
    let repo = repo(pool);

    repo.insert("codeAA", "https://a.com").await.unwrap();
    repo.insert("codeBB", "https://b.com").await.unwrap();
    repo.insert("codeCC", "https://c.com").await.unwrap();

    let links = repo.list().await.unwrap();
    let codes: Vec<&str> = links.iter().map(|l| l.code.as_str()).collect();

    assert_eq!(codes, vec!["codeCC", "codeBB", "codeAA"]);
}

#[sqlx::test]
async fn test_increment_clicks(pool: SqlitePool) {
    let repo = repo(pool);

    repo.insert("abc123", "https://example.com").await.unwrap();

    let target = repo.increment_clicks("abc123").await.unwrap();
    assert_eq!(target.as_deref(), Some("https://example.com"));

    let link = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, 1);
    assert!(link.last_clicked.is_some());
}

#[sqlx::test]
async fn test_increment_clicks_is_cumulative(pool: SqlitePool) {
    let repo = repo(pool);

    repo.insert("abc123", "https://example.com").await.unwrap();

    for _ in 0..5 {
        repo.increment_clicks("abc123").await.unwrap();
    }

    let link = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, 5);
}

#[sqlx::test]
async fn test_increment_clicks_unknown_code(pool: SqlitePool) {
    let repo = repo(pool);

    repo.insert("abc123", "https://example.com").await.unwrap();

    let target = repo.increment_clicks("nosuch1").await.unwrap();
    assert!(target.is_none());

    // Nothing changed anywhere.
    let link = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, 0);
}

#[sqlx::test]
async fn test_delete(pool: SqlitePool) {
    let repo = repo(pool);

    repo.insert("abc123", "https://example.com").await.unwrap();

    assert!(repo.delete("abc123").await.unwrap());
    assert!(repo.find_by_code("abc123").await.unwrap().is_none());

    assert!(!repo.delete("abc123").await.unwrap());
}

#[sqlx::test]
async fn test_code_reusable_after_delete(pool: SqlitePool) {
    let repo = repo(pool);

    repo.insert("reuse12", "https://old.com").await.unwrap();
    repo.increment_clicks("reuse12").await.unwrap();
    repo.delete("reuse12").await.unwrap();

    let link = repo.insert("reuse12", "https://new.com").await.unwrap();
    assert_eq!(link.target_url, "https://new.com");
    assert_eq!(link.total_clicks, 0);
    assert!(link.last_clicked.is_none());
}
