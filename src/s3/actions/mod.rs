//! Actions
//! <https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations.html>

use crate::s3::{
    S3,
    responses::ErrorResponse,
    signature::{Signature, canonical_query},
};
use anyhow::Result;
use http::Method;
use quick_xml::de::from_str;
use reqwest::Response;
use std::collections::BTreeMap;
use url::Url;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjectsV2.html>
mod listobjectsv2;
pub use self::listobjectsv2::ListObjectsV2;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObject.html>
mod getobject;
pub use self::getobject::GetObject;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html>
mod putobject;
pub use self::putobject::PutObject;

pub trait Action {
    // headers to send in the request
    fn headers(&self) -> Option<BTreeMap<&str, &str>>;

    // method to use GET/PUT...
    fn http_method(&self) -> Method;

    // URL query pairs
    fn query_pairs(&self) -> Option<BTreeMap<&str, &str>>;

    // object key, None for bucket level actions
    fn key(&self) -> Option<&str>;

    /// # Errors
    ///
    /// Will return `Err` if the endpoint is not a valid URL
    fn url(&self, s3: &S3) -> Result<Url> {
        let mut url = match self.key() {
            Some(key) => s3.object_url(key)?,
            None => s3.endpoint()?,
        };

        // the query is sent exactly as it is signed
        if let Some(pairs) = self.query_pairs().filter(|pairs| !pairs.is_empty()) {
            let query = canonical_query(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string())),
            );
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    /// Header signed request
    ///
    /// # Errors
    ///
    /// Will return `Err` if the signature can not be created
    fn sign(&self, s3: &S3, hash_payload: &str) -> Result<(Url, BTreeMap<String, String>)> {
        let url = self.url(s3)?;
        let headers = Signature::new(s3.credentials(), s3.region(), "s3", self.http_method())
            .sign(&url, hash_payload, self.headers())?;
        Ok((url, headers))
    }

    /// Presigned URL valid for `expire` seconds
    ///
    /// # Errors
    ///
    /// Will return `Err` if the signature can not be created
    fn presign(&self, s3: &S3, expire: u64) -> Result<Url> {
        let url = self.url(s3)?;
        Signature::new(s3.credentials(), s3.region(), "s3", self.http_method()).presign(
            &url,
            expire,
            self.headers(),
        )
    }
}

/// Turn a non 2xx S3 response into a readable error message
///
/// # Errors
///
/// Will return `Err` if the response body can not be read
pub async fn response_error(response: Response) -> Result<String> {
    let mut error: BTreeMap<&str, String> = BTreeMap::new();
    error.insert("HTTP Status Code", response.status().to_string());

    if let Some(x_amz_id_2) = response.headers().get("x-amz-id-2") {
        error.insert("x-amz-id-2", x_amz_id_2.to_str()?.to_string());
    }

    if let Some(rid) = response.headers().get("x-amz-request-id") {
        error.insert("Request ID", rid.to_str()?.to_string());
    }

    let body = response.text().await?;

    if let Ok(e) = from_str::<ErrorResponse>(&body) {
        error.insert("Code", e.code);
        error.insert("Message", e.message);
    } else if !body.is_empty() {
        error.insert("Response", body);
    }

    Ok(error
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<String>>()
        .join(", "))
}
