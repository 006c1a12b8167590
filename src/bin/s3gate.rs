use lambda_http::{Error, Request, run, service_fn};
use s3gate::{
    config::Config,
    lambda,
    router::Dispatcher,
    s3::{Credentials, S3},
};
use secrecy::SecretString;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::new(std::env::args_os())?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .init();

    log::info!("bucket: {}, region: {}", config.bucket, config.region);
    log::debug!("settings: {:?}", config.settings);

    // without credentials every signature fails and is answered with a 500
    let credentials = Credentials::from_env().unwrap_or_else(|e| {
        log::warn!("{e:#}");
        Credentials::new("", &SecretString::new("".into()))
    });

    let s3 = S3::new(credentials, &config.region, &config.bucket)?;

    log::debug!("S3:\n{s3}");

    let dispatcher = Arc::new(Dispatcher::new(Arc::new(s3), config.settings));

    run(service_fn(move |event: Request| {
        let dispatcher = Arc::clone(&dispatcher);
        async move { lambda::handle(&dispatcher, event).await }
    }))
    .await
}
