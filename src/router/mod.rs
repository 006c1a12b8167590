//! Request routing
//!
//! A [`Request`] is reduced to its method and path; the [`Dispatcher`] always
//! answers with a JSON [`Response`] carrying the same CORS headers, whatever
//! branch produced it.

mod dispatch;
pub use self::dispatch::{
    Dispatcher, IMAGE_EXTENSION, IMAGES_PREFIX, Settings, StoredObject, UPLOAD_CONTENT_TYPE,
    UploadGrant,
};

mod keys;
pub use self::keys::ImageKeys;

mod route;
pub use self::route::Route;

use anyhow::Result;
use http::{Method, StatusCode};
use serde::Serialize;
use std::collections::BTreeMap;

pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET,POST,OPTIONS"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
    ),
    ("Content-Type", "application/json"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
}

impl Request {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

/// Same shape as an API Gateway proxy integration response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Response {
    #[must_use]
    pub fn json(status: StatusCode, body: &serde_json::Value) -> Self {
        Self {
            status_code: status.as_u16(),
            headers: cors_headers(),
            body: body.to_string(),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if `body` can not be serialized
    pub fn encode<T: Serialize>(status: StatusCode, body: &T) -> Result<Self> {
        Ok(Self {
            status_code: status.as_u16(),
            headers: cors_headers(),
            body: serde_json::to_string(body)?,
        })
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[must_use]
pub fn cors_headers() -> BTreeMap<String, String> {
    CORS_HEADERS
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_json() {
        let response = Response::json(StatusCode::NOT_FOUND, &json!({"path": "/x"}));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body, r#"{"path":"/x"}"#);
        assert_eq!(response.headers, cors_headers());
    }

    #[test]
    fn test_cors_headers() {
        let headers = cors_headers();
        assert_eq!(headers.len(), 4);
        assert_eq!(
            headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("*")
        );
        assert_eq!(
            headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_response_shape() {
        let response = Response::json(StatusCode::OK, &json!([]));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], "[]");
        assert_eq!(value["headers"]["Access-Control-Allow-Methods"], "GET,POST,OPTIONS");
    }
}
