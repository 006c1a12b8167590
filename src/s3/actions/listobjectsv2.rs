use crate::{
    s3::actions::{Action, response_error},
    s3::responses::{ListBucketResult, Object},
    s3::{S3, request, tools},
};
use anyhow::{Context, Result, anyhow};
use http::Method;
use quick_xml::de::from_str;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct ListObjectsV2 {
    pub continuation_token: Option<String>,
    pub prefix: Option<String>,
}

impl ListObjectsV2 {
    #[must_use]
    pub fn new(prefix: Option<String>) -> Self {
        Self {
            prefix,
            ..Self::default()
        }
    }

    /// One page of the listing
    ///
    /// # Errors
    ///
    /// Will return `Err` if can not make the request
    pub async fn request(&self, s3: &S3) -> Result<ListBucketResult> {
        let (url, headers) = self.sign(s3, tools::EMPTY_PAYLOAD_SHA256)?;

        let response = request::request(s3.client(), url, self.http_method(), &headers).await?;

        if response.status().is_success() {
            let body = response.text().await?;
            from_str(&body).context("unable to parse ListObjectsV2 response")
        } else {
            Err(anyhow!(response_error(response).await?))
        }
    }

    /// Every page, following `NextContinuationToken` until the listing is no
    /// longer truncated
    ///
    /// # Errors
    ///
    /// Will return `Err` if any page fails
    pub async fn request_all(mut self, s3: &S3) -> Result<Vec<Object>> {
        let mut objects = Vec::new();

        loop {
            let page = self.request(s3).await?;

            log::debug!(
                "listed {} objects, truncated: {}",
                page.contents.len(),
                page.is_truncated
            );

            objects.extend(page.contents);

            match page.next_continuation_token {
                Some(token) if page.is_truncated => self.continuation_token = Some(token),
                _ => break,
            }
        }

        Ok(objects)
    }
}

// https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjectsV2.html
impl Action for ListObjectsV2 {
    fn http_method(&self) -> Method {
        Method::GET
    }

    fn headers(&self) -> Option<BTreeMap<&str, &str>> {
        None
    }

    fn key(&self) -> Option<&str> {
        None
    }

    // URL query pairs
    fn query_pairs(&self) -> Option<BTreeMap<&str, &str>> {
        let mut map: BTreeMap<&str, &str> = BTreeMap::new();

        // list-type parameter that indicates version 2 of the API
        map.insert("list-type", "2");

        if let Some(token) = &self.continuation_token {
            map.insert("continuation-token", token);
        }

        if let Some(prefix) = &self.prefix {
            map.insert("prefix", prefix);
        }

        Some(map)
    }
}
