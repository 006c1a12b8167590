//! Deployment time configuration
//!
//! Every option can be given as a flag or, as Lambda does, through the
//! environment.

use crate::{
    router::Settings,
    s3::{Region, signature::MAX_EXPIRE},
};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, builder::ValueParser};
use std::ffi::OsString;

pub const DEFAULT_BUCKET: &str = "renoview-images";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bucket: String,
    pub region: Region,
    pub settings: Settings,
    pub log_level: log::LevelFilter,
}

pub fn validator_expire() -> ValueParser {
    ValueParser::from(move |s: &str| -> std::result::Result<u64, String> {
        match s.parse::<u64>() {
            Ok(n) if (1..=MAX_EXPIRE).contains(&n) => Ok(n),
            _ => Err(format!("Not a valid number of seconds (1-{MAX_EXPIRE})")),
        }
    })
}

pub fn validator_concurrency() -> ValueParser {
    ValueParser::from(move |s: &str| -> std::result::Result<usize, String> {
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(String::from("Not a valid number, must be at least 1")),
        }
    })
}

#[must_use]
pub fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("bucket")
                .help("Bucket holding the images")
                .long("bucket")
                .env("BUCKET_NAME")
                .default_value(DEFAULT_BUCKET)
                .num_args(1),
        )
        .arg(
            Arg::new("region")
                .help("Region of the bucket")
                .long("region")
                .env("BUCKET_REGION")
                .default_value(DEFAULT_REGION)
                .num_args(1),
        )
        .arg(
            Arg::new("endpoint")
                .help("S3 compatible endpoint, host or URL, instead of AWS")
                .long("endpoint")
                .env("S3_ENDPOINT")
                .num_args(1),
        )
        .arg(
            Arg::new("upload-expire")
                .help("Seconds a presigned upload URL stays valid")
                .long("upload-expire")
                .env("UPLOAD_EXPIRE")
                .default_value("300")
                .num_args(1)
                .value_parser(validator_expire()),
        )
        .arg(
            Arg::new("download-expire")
                .help("Seconds a presigned download URL stays valid")
                .long("download-expire")
                .env("DOWNLOAD_EXPIRE")
                .default_value("3600")
                .num_args(1)
                .value_parser(validator_expire()),
        )
        .arg(
            Arg::new("sign-concurrency")
                .help("Download URLs signed at the same time while listing")
                .long("sign-concurrency")
                .env("SIGN_CONCURRENCY")
                .default_value("16")
                .num_args(1)
                .value_parser(validator_concurrency()),
        )
        .arg(
            Arg::new("log-level")
                .help("Log level")
                .long("log-level")
                .env("LOG_LEVEL")
                .default_value("info")
                .num_args(1)
                .value_parser(["off", "error", "warn", "info", "debug", "trace"]),
        )
}

impl Config {
    /// # Errors
    ///
    /// Will return `Err` if the arguments or the environment are not valid
    pub fn new<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Self::from_matches(&matches)
    }

    /// # Errors
    ///
    /// Will return `Err` if the region is unknown
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let bucket = matches
            .get_one::<String>("bucket")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BUCKET.to_string());

        let region_name = matches
            .get_one::<String>("region")
            .map_or(DEFAULT_REGION, String::as_str);

        // a custom endpoint accepts any region name, it only goes in the signature scope
        let region = match matches.get_one::<String>("endpoint") {
            Some(endpoint) => Region::Custom {
                name: region_name.to_string(),
                endpoint: endpoint.to_string(),
            },
            None => region_name
                .parse::<Region>()
                .with_context(|| format!("invalid region: {region_name}"))?,
        };

        let defaults = Settings::default();
        let settings = Settings {
            upload_expire: matches
                .get_one::<u64>("upload-expire")
                .copied()
                .unwrap_or(defaults.upload_expire),
            download_expire: matches
                .get_one::<u64>("download-expire")
                .copied()
                .unwrap_or(defaults.download_expire),
            sign_concurrency: matches
                .get_one::<usize>("sign-concurrency")
                .copied()
                .unwrap_or(defaults.sign_concurrency),
        };

        let log_level = matches
            .get_one::<String>("log-level")
            .map_or(Ok(log::LevelFilter::Info), |level| level.parse())
            .context("invalid log level")?;

        Ok(Self {
            bucket,
            region,
            settings,
            log_level,
        })
    }
}
