//! Object storage the dispatcher talks to
//!
//! The dispatcher only needs three capabilities: presign an upload, list a
//! prefix and presign a download. [`S3`](crate::s3::S3) implements them against
//! a real bucket; tests swap in their own implementation.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

mod s3;

/// An entry of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedObject {
    pub key: String,
    pub last_modified: DateTime<Utc>,
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Time limited URL allowing a single `PUT` of `key`
    async fn presign_put(&self, key: &str, content_type: &str, expire: u64) -> Result<String>;

    /// Every object under `prefix`, in the order the backend returns them
    async fn list_objects(&self, prefix: &str) -> Result<Vec<ListedObject>>;

    /// Time limited URL allowing a `GET` of `key`
    async fn presign_get(&self, key: &str, expire: u64) -> Result<String>;
}
