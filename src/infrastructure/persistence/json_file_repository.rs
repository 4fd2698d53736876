//! File-backed implementation of the link repository.
//!
//! The whole record set lives in one JSON file. Every operation reads the
//! file in full, mutates in memory, and rewrites the file in full. That is a
//! deliberate simplicity/throughput trade-off for small record counts, and
//! it is what makes each mutation atomic: the entire read-mutate-persist
//! sequence runs under a single mutex, and the file is replaced with a
//! rename so a crash mid-write never leaves a torn snapshot.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// One persisted record.
///
/// `id` is a monotonic insertion counter used only as the listing tie-break;
/// it is never exposed through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredLink {
    id: i64,
    code: String,
    target_url: String,
    total_clicks: i64,
    created_at: DateTime<Utc>,
    last_clicked: Option<DateTime<Utc>>,
}

impl From<StoredLink> for Link {
    fn from(stored: StoredLink) -> Self {
        Link {
            code: stored.code,
            target_url: stored.target_url,
            total_clicks: stored.total_clicks,
            created_at: stored.created_at,
            last_clicked: stored.last_clicked,
        }
    }
}

/// Snapshot-file backend for development and small deployments.
pub struct JsonFileRepository {
    path: PathBuf,
    // Serializes every operation; reads get a consistent snapshot for free.
    lock: Mutex<()>,
}

impl JsonFileRepository {
    /// Opens a repository at `path`, creating the parent directory if needed.
    ///
    /// A missing file is an empty store; it is created on first mutation.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("create data directory", &path, e))?;
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    async fn load(&self) -> Result<Vec<StoredLink>, AppError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_error("read", &self.path, e)),
        };

        serde_json::from_slice(&raw).map_err(|e| {
            tracing::error!("Corrupt link store at {}: {e}", self.path.display());
            AppError::internal("Link store is corrupt", json!({}))
        })
    }

    async fn persist(&self, records: &[StoredLink]) -> Result<(), AppError> {
        let raw = serde_json::to_vec_pretty(records)
            .map_err(|e| AppError::internal("Failed to serialize link store", json!({ "reason": e.to_string() })))?;

        // Write a sibling temp file, then rename over the snapshot.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|e| storage_error("write", &tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| storage_error("replace", &self.path, e))?;

        Ok(())
    }
}

fn storage_error(action: &str, path: &Path, e: std::io::Error) -> AppError {
    tracing::error!("Failed to {action} link store at {}: {e}", path.display());
    AppError::internal("Link store I/O error", json!({}))
}

#[async_trait]
impl LinkRepository for JsonFileRepository {
    async fn insert(&self, code: &str, target_url: &str) -> Result<Link, AppError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        if records.iter().any(|r| r.code == code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": code }),
            ));
        }

        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let record = StoredLink {
            id,
            code: code.to_string(),
            target_url: target_url.to_string(),
            total_clicks: 0,
            created_at: Utc::now(),
            last_clicked: None,
        };

        records.push(record.clone());
        self.persist(&records).await?;

        Ok(record.into())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(records.into_iter().map(Link::from).collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let _guard = self.lock.lock().await;
        let records = self.load().await?;

        Ok(records
            .into_iter()
            .find(|r| r.code == code)
            .map(Link::from))
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let Some(record) = records.iter_mut().find(|r| r.code == code) else {
            return Ok(None);
        };

        record.total_clicks += 1;
        record.last_clicked = Some(Utc::now());
        let target_url = record.target_url.clone();

        self.persist(&records).await?;

        Ok(Some(target_url))
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;

        let Some(idx) = records.iter().position(|r| r.code == code) else {
            return Ok(false);
        };

        records.remove(idx);
        self.persist(&records).await?;

        Ok(true)
    }
}
