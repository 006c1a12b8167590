use serde::Deserialize;

/// An individual object in a `ListBucketResult`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Object {
    #[serde(rename = "Key")]
    /// The object's key
    pub key: String,
    #[serde(rename = "LastModified")]
    /// Date and time the object was last modified (RFC 3339).
    pub last_modified: String,
    #[serde(rename = "ETag", default)]
    pub e_tag: Option<String>,
    #[serde(rename = "Size", default)]
    /// Size in bytes of the object.
    pub size: u64,
    #[serde(rename = "StorageClass", default)]
    pub storage_class: Option<String>,
}

/// The parsed result of a `ListObjectsV2` page
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ListBucketResult {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Prefix", default)]
    pub prefix: Option<String>,
    #[serde(rename = "KeyCount", default)]
    pub key_count: Option<u32>,
    #[serde(rename = "MaxKeys", default)]
    pub max_keys: Option<u32>,
    #[serde(rename = "IsTruncated", default)]
    ///  Specifies whether (true) or not (false) all of the results were returned.
    pub is_truncated: bool,
    #[serde(rename = "ContinuationToken", default)]
    pub continuation_token: Option<String>,
    #[serde(rename = "NextContinuationToken", default)]
    /// Token for the next page, present when `is_truncated`
    pub next_continuation_token: Option<String>,
    #[serde(rename = "Contents", default)]
    /// Metadata about each object returned.
    pub contents: Vec<Object>,
}

#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "RequestId", default)]
    pub request_id: Option<String>,
}
