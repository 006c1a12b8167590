use anyhow::Result;
use http::Method;
use reqwest::{
    Client, Response,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use std::collections::BTreeMap;
use url::Url;

/// Send a signed, body-less request
///
/// # Errors
///
/// Will return `Err` if the headers are invalid or the request fails
pub async fn request(
    client: &Client,
    url: Url,
    method: Method,
    headers: &BTreeMap<String, String>,
) -> Result<Response> {
    // host is derived from the URL by the client
    let headers = headers
        .iter()
        .filter(|(k, _)| k.as_str() != "host")
        .map(|(k, v)| Ok((k.parse::<HeaderName>()?, v.parse::<HeaderValue>()?)))
        .collect::<Result<HeaderMap>>()?;

    log::debug!("{method} {url}");

    Ok(client.request(method, url).headers(headers).send().await?)
}
