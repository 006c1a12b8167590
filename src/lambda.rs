//! Glue between the Lambda HTTP events and the [`Dispatcher`]

use crate::router::{Dispatcher, Request, Response};
use lambda_http::{Body, Error, RequestExt};

/// API Gateway resource path without the stage, the URI path otherwise
#[must_use]
pub fn request(event: &lambda_http::Request) -> Request {
    let raw_path = event.raw_http_path().to_string();
    let path = if raw_path.is_empty() {
        event.uri().path().to_string()
    } else {
        raw_path
    };

    Request::new(event.method().clone(), path)
}

/// # Errors
///
/// Will return `Err` if a header or the status code is invalid
pub fn response(response: Response) -> Result<lambda_http::Response<Body>, http::Error> {
    let mut builder = lambda_http::Response::builder().status(response.status_code);

    for (key, value) in &response.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    builder.body(Body::from(response.body))
}

/// # Errors
///
/// Will return `Err` only if the response can not be built
pub async fn handle(
    dispatcher: &Dispatcher,
    event: lambda_http::Request,
) -> Result<lambda_http::Response<Body>, Error> {
    let reply = dispatcher.handle(&request(&event)).await;
    Ok(response(reply)?)
}
