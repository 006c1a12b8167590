pub mod actions;
pub mod credentials;
pub mod region;
pub mod request;
pub mod responses;
pub mod signature;
pub mod tools;
pub use self::{credentials::Credentials, region::Region, signature::Signature};

use anyhow::{Context, Result};
use std::fmt;
use url::Url;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Handle to one bucket, created once per process and shared by every request.
#[derive(Debug)]
pub struct S3 {
    // bucket name
    bucket: String,
    // AWS Credentials
    credentials: Credentials,
    // AWS Region
    region: Region,
    // pooled HTTP client
    client: reqwest::Client,
}

// Amazon S3 API Reference
// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations.html>
impl S3 {
    /// # Errors
    ///
    /// Will return `Err` if the HTTP client can not be built
    pub fn new(credentials: Credentials, region: &Region, bucket: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .context("unable to build the HTTP client")?;

        Ok(Self {
            bucket: bucket.to_string(),
            credentials,
            region: region.clone(),
            client,
        })
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    #[must_use]
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Path-style bucket URL, `https://s3.<region>.amazonaws.com/<bucket>`
    ///
    /// # Errors
    ///
    /// Will return `Err` if the endpoint is not a valid URL
    pub fn endpoint(&self) -> Result<Url> {
        let endpoint = self.region.endpoint();
        let base = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint
        } else {
            format!("https://{endpoint}")
        };

        let mut url =
            Url::parse(&base).with_context(|| format!("invalid S3 endpoint: {base}"))?;
        url.set_path(&format!("/{}", signature::uri_encode(&self.bucket)));
        url.set_query(None);

        Ok(url)
    }

    /// URL of an object, every key segment URI-encoded the way `SigV4` expects
    ///
    /// # Errors
    ///
    /// Will return `Err` if the endpoint is not a valid URL
    pub fn object_url(&self, key: &str) -> Result<Url> {
        let mut url = self.endpoint()?;
        let path = format!(
            "{}/{}",
            url.path(),
            key.split('/')
                .map(signature::uri_encode)
                .collect::<Vec<String>>()
                .join("/")
        );
        url.set_path(&path);

        Ok(url)
    }
}

impl fmt::Display for S3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "bucket: {}", self.bucket)?;
        writeln!(f, "region: {}", self.region)?;
        write!(f, "access key: {}", self.credentials.aws_access_key_id())
    }
}
