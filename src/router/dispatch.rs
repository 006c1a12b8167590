use crate::{
    router::{ImageKeys, Request, Response, Route},
    storage::ObjectStorage,
};
use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use futures::stream::{self, StreamExt, TryStreamExt};
use http::{Method, StatusCode};
use serde::{Serialize, Serializer};
use serde_json::json;
use std::sync::Arc;

// namespace of the uploaded images within the bucket
pub const IMAGES_PREFIX: &str = "images/";
pub const IMAGE_EXTENSION: &str = ".jpg";
pub const UPLOAD_CONTENT_TYPE: &str = "image/*";

const STATUS_MESSAGE: &str = "Hello from Lambda!";
const ERROR_MESSAGE: &str = "Error in Lambda";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    // seconds a presigned PUT stays valid
    pub upload_expire: u64,
    // seconds a presigned GET stays valid
    pub download_expire: u64,
    // presigned GETs computed at the same time while listing
    pub sign_concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upload_expire: 300,
            download_expire: 3600,
            sign_concurrency: 16,
        }
    }
}

/// Returned by `/getUploadUrl`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadGrant {
    pub upload_url: String,
    pub image_key: String,
}

/// One element of the `/images` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredObject {
    #[serde(rename = "url")]
    pub download_url: String,
    #[serde(rename = "timestamp", serialize_with = "serialize_timestamp")]
    pub last_modified: DateTime<Utc>,
    pub key: String,
}

fn serialize_timestamp<S: Serializer>(
    datetime: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Built once per process; holds the storage handle shared by all invocations
pub struct Dispatcher {
    storage: Arc<dyn ObjectStorage>,
    keys: ImageKeys,
    settings: Settings,
}

impl Dispatcher {
    #[must_use]
    pub fn new(storage: Arc<dyn ObjectStorage>, settings: Settings) -> Self {
        Self {
            storage,
            keys: ImageKeys::new(IMAGES_PREFIX, IMAGE_EXTENSION),
            settings,
        }
    }

    /// Never fails, errors become a 500 response
    pub async fn handle(&self, request: &Request) -> Response {
        log::info!("{} {}", request.method, request.path);

        match self.dispatch(request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("{} {}: {e:#}", request.method, request.path);
                Response::json(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &json!({
                        "message": ERROR_MESSAGE,
                        "error": format!("{e:#}"),
                    }),
                )
            }
        }
    }

    async fn dispatch(&self, request: &Request) -> Result<Response> {
        // preflight, whatever the path
        if request.method == Method::OPTIONS {
            return Ok(Response::json(
                StatusCode::OK,
                &json!({ "message": "CORS enabled" }),
            ));
        }

        match Route::from_path(&request.path) {
            Route::Projects => Ok(Response::json(StatusCode::OK, &status())),
            Route::GetUploadUrl => Response::encode(StatusCode::OK, &self.upload_grant().await?),
            Route::Images => Response::encode(StatusCode::OK, &self.images().await?),
            Route::NotFound => Ok(Response::json(
                StatusCode::NOT_FOUND,
                &json!({
                    "message": "Route not found",
                    "path": request.path,
                }),
            )),
        }
    }

    /// New object key plus a presigned PUT for it
    ///
    /// # Errors
    ///
    /// Will return `Err` if the URL can not be signed
    pub async fn upload_grant(&self) -> Result<UploadGrant> {
        let image_key = self.keys.next();

        let upload_url = self
            .storage
            .presign_put(&image_key, UPLOAD_CONTENT_TYPE, self.settings.upload_expire)
            .await?;

        log::debug!("upload grant: {image_key}");

        Ok(UploadGrant {
            upload_url,
            image_key,
        })
    }

    /// Every image with a presigned GET, in listing order. The GETs are signed
    /// concurrently (at most `sign_concurrency` at a time); the first failure
    /// fails the whole listing.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the listing or any signature fails
    pub async fn images(&self) -> Result<Vec<StoredObject>> {
        let objects = self.storage.list_objects(IMAGES_PREFIX).await?;

        log::debug!("signing {} objects", objects.len());

        let expire = self.settings.download_expire;

        stream::iter(objects)
            .map(|object| async move {
                let download_url = self.storage.presign_get(&object.key, expire).await?;
                Ok::<_, anyhow::Error>(StoredObject {
                    download_url,
                    last_modified: object.last_modified,
                    key: object.key,
                })
            })
            .buffered(self.settings.sign_concurrency.max(1))
            .try_collect()
            .await
    }
}

fn status() -> serde_json::Value {
    json!({
        "message": STATUS_MESSAGE,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
