//! Serverless gateway to an S3 bucket of images.
//!
//! Three endpoints are served: a status payload, presigned upload URLs for new
//! images and the image listing with presigned download URLs. Signing is done
//! locally with AWS Signature Version 4.

pub mod config;
pub mod lambda;
pub mod router;
pub mod s3;
pub mod storage;
