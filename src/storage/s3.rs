use crate::{
    s3::{
        S3,
        actions::{Action, GetObject, ListObjectsV2, PutObject},
        responses::Object,
    },
    storage::{ListedObject, ObjectStorage},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
impl ObjectStorage for S3 {
    async fn presign_put(&self, key: &str, content_type: &str, expire: u64) -> Result<String> {
        let url = PutObject::new(key)
            .content_type(content_type)
            .presign(self, expire)
            .with_context(|| format!("unable to presign upload of {key}"))?;
        Ok(url.into())
    }

    async fn list_objects(&self, prefix: &str) -> Result<Vec<ListedObject>> {
        let objects = ListObjectsV2::new(Some(prefix.to_string()))
            .request_all(self)
            .await
            .with_context(|| format!("unable to list s3://{}/{prefix}", self.bucket()))?;

        objects.into_iter().map(listed_object).collect()
    }

    async fn presign_get(&self, key: &str, expire: u64) -> Result<String> {
        let url = GetObject::new(key)
            .presign(self, expire)
            .with_context(|| format!("unable to presign download of {key}"))?;
        Ok(url.into())
    }
}

fn listed_object(object: Object) -> Result<ListedObject> {
    let last_modified = DateTime::parse_from_rfc3339(&object.last_modified)
        .with_context(|| {
            format!(
                "invalid LastModified for {}: {}",
                object.key, object.last_modified
            )
        })?
        .with_timezone(&Utc);

    Ok(ListedObject {
        key: object.key,
        last_modified,
    })
}
