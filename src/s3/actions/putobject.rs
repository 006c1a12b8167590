use crate::s3::actions::Action;
use http::Method;
use std::collections::BTreeMap;

/// Only ever presigned, the browser uploads the body itself
#[derive(Debug)]
pub struct PutObject<'a> {
    key: &'a str,
    content_type: Option<&'a str>,
}

impl<'a> PutObject<'a> {
    #[must_use]
    pub const fn new(key: &'a str) -> Self {
        Self {
            key,
            content_type: None,
        }
    }

    /// A concrete media type becomes a signed header the uploader must send.
    /// Wildcards (`image/*`) can never match the header of a real upload, so
    /// they are left unsigned and the bucket accepts any content type.
    #[must_use]
    pub fn content_type(mut self, content_type: &'a str) -> Self {
        if content_type.is_empty() || content_type.contains('*') {
            log::debug!("content type hint not signed: {content_type}");
            self.content_type = None;
        } else {
            self.content_type = Some(content_type);
        }
        self
    }
}

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html>
impl Action for PutObject<'_> {
    fn http_method(&self) -> Method {
        Method::PUT
    }

    fn headers(&self) -> Option<BTreeMap<&str, &str>> {
        self.content_type
            .map(|content_type| BTreeMap::from([("content-type", content_type)]))
    }

    fn query_pairs(&self) -> Option<BTreeMap<&str, &str>> {
        None
    }

    fn key(&self) -> Option<&str> {
        Some(self.key)
    }
}
