use crate::s3::actions::Action;
use http::Method;
use std::collections::BTreeMap;

/// Only ever presigned, the browser downloads the object itself
#[derive(Debug)]
pub struct GetObject<'a> {
    key: &'a str,
}

impl<'a> GetObject<'a> {
    #[must_use]
    pub const fn new(key: &'a str) -> Self {
        Self { key }
    }
}

// https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObject.html
impl Action for GetObject<'_> {
    fn http_method(&self) -> Method {
        Method::GET
    }

    fn headers(&self) -> Option<BTreeMap<&str, &str>> {
        None
    }

    fn key(&self) -> Option<&str> {
        Some(self.key)
    }

    fn query_pairs(&self) -> Option<BTreeMap<&str, &str>> {
        None
    }
}
