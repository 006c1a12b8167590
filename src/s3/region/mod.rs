use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// https://docs.aws.amazon.com/general/latest/gr/s3.html
const AWS_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ca-central-1",
    "ca-west-1",
    "cn-north-1",
    "cn-northwest-1",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "il-central-1",
    "me-central-1",
    "me-south-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-gov-east-1",
    "us-gov-west-1",
    "us-west-1",
    "us-west-2",
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    // one of AWS_REGIONS
    Aws(String),

    // S3 compatible provider, the name is used for the credential scope
    Custom { name: String, endpoint: String },
}

impl Region {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Aws(name) | Self::Custom { name, .. } => name,
        }
    }

    /// Host (or URL when the scheme is given) serving the S3 API
    #[must_use]
    pub fn endpoint(&self) -> String {
        match self {
            Self::Aws(name) if name.starts_with("cn-") => {
                format!("s3.{name}.amazonaws.com.cn")
            }
            Self::Aws(name) => format!("s3.{name}.amazonaws.com"),
            Self::Custom { endpoint, .. } => endpoint.clone(),
        }
    }
}

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if AWS_REGIONS.contains(&name.as_str()) {
            Ok(Self::Aws(name))
        } else {
            Err(ParseRegionError::new(s))
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.endpoint())
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::Aws(String::from("us-east-1"))
    }
}

/// An error produced when attempting to convert a `str` into a `Region` fails.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseRegionError {
    message: String,
}

impl ParseRegionError {
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            message: format!("Not a valid AWS region: {input}"),
        }
    }
}

impl Error for ParseRegionError {}

impl Display for ParseRegionError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
