use std::sync::Arc;
use tempfile::TempDir;
use tinylink::domain::repositories::LinkRepository;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::JsonFileRepository;

async fn repo() -> (JsonFileRepository, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::open(dir.path().join("links.json"))
        .await
        .unwrap();
    (repo, dir)
}

#[tokio::test]
async fn test_insert_returns_fresh_record() {
    let (repo, _dir) = repo().await;

    let link = repo.insert("abc123", "https://example.com").await.unwrap();

    assert_eq!(link.code, "abc123");
    assert_eq!(link.target_url, "https://example.com");
    assert_eq!(link.total_clicks, 0);
    assert!(link.last_clicked.is_none());
}

#[tokio::test]
async fn test_insert_duplicate_code_conflicts() {
    let (repo, _dir) = repo().await;

    repo.insert("abc123", "https://first.com").await.unwrap();
    let result = repo.insert("abc123", "https://second.com").await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));

    let link = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(link.target_url, "https://first.com");
}

#[tokio::test]
async fn test_missing_file_reads_as_empty() {
    let (repo, _dir) = repo().await;

    assert!(repo.list().await.unwrap().is_empty());
    assert!(repo.find_by_code("abc123").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_orders_newest_first() {
    let (repo, _dir) = repo().await;

    repo.insert("codeAA", "https://a.com").await.unwrap();
    repo.insert("codeBB", "https://b.com").await.unwrap();
    repo.insert("codeCC", "https://c.com").await.unwrap();

    let links = repo.list().await.unwrap();
    let codes: Vec<&str> = links.iter().map(|l| l.code.as_str()).collect();

    assert_eq!(codes, vec!["codeCC", "codeBB", "codeAA"]);
}

#[tokio::test]
async fn test_increment_clicks() {
    let (repo, _dir) = repo().await;

    repo.insert("abc123", "https://example.com").await.unwrap();

    let target = repo.increment_clicks("abc123").await.unwrap();
    assert_eq!(target.as_deref(), Some("https://example.com"));

    let link = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, 1);
    assert!(link.last_clicked.is_some());
}

#[tokio::test]
async fn test_increment_clicks_unknown_code() {
    let (repo, _dir) = repo().await;

    repo.insert("abc123", "https://example.com").await.unwrap();

    assert!(repo.increment_clicks("nosuch1").await.unwrap().is_none());

    let link = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, 0);
}

#[tokio::test]
async fn test_delete() {
    let (repo, _dir) = repo().await;

    repo.insert("abc123", "https://example.com").await.unwrap();

    assert!(repo.delete("abc123").await.unwrap());
    assert!(repo.find_by_code("abc123").await.unwrap().is_none());

    assert!(!repo.delete("abc123").await.unwrap());
}

#[tokio::test]
async fn test_code_reusable_after_delete() {
    let (repo, _dir) = repo().await;

    repo.insert("reuse12", "https://old.com").await.unwrap();
    repo.increment_clicks("reuse12").await.unwrap();
    repo.delete("reuse12").await.unwrap();

    let link = repo.insert("reuse12", "https://new.com").await.unwrap();
    assert_eq!(link.target_url, "https://new.com");
    assert_eq!(link.total_clicks, 0);
    assert!(link.last_clicked.is_none());
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.json");

    {
        let repo = JsonFileRepository::open(path.clone()).await.unwrap();
        repo.insert("abc123", "https://example.com").await.unwrap();
        repo.increment_clicks("abc123").await.unwrap();
    }

    let reopened = JsonFileRepository::open(path).await.unwrap();
    let link = reopened.find_by_code("abc123").await.unwrap().unwrap();

    assert_eq!(link.target_url, "https://example.com");
    assert_eq!(link.total_clicks, 1);
}

#[tokio::test]
async fn test_concurrent_increments_are_not_lost() {
    let (repo, _dir) = repo().await;
    let repo = Arc::new(repo);

    repo.insert("abc123", "https://example.com").await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.increment_clicks("abc123").await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let link = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(link.total_clicks, 20);
}

#[tokio::test]
async fn test_corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.json");
    tokio::fs::write(&path, "{ not json").await.unwrap();

    let repo = JsonFileRepository::open(path).await.unwrap();
    let result = repo.list().await;

    assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
}
