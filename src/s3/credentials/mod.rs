use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use std::{env, fmt};

pub struct Credentials {
    // AWS_ACCESS_KEY_ID
    key: String,
    // AWS_SECRET_ACCESS_KEY
    secret: SecretString,
    // AWS_SESSION_TOKEN, set for temporary (role) credentials
    session_token: Option<SecretString>,
}

impl Credentials {
    #[must_use]
    pub fn new(access: &str, secret: &SecretString) -> Self {
        Self {
            key: access.to_string(),
            secret: SecretString::new(secret.expose_secret().into()),
            session_token: None,
        }
    }

    /// Read the keys the Lambda runtime exports for the execution role.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the access key or the secret key is not set
    pub fn from_env() -> Result<Self> {
        let key = env::var("AWS_ACCESS_KEY_ID").context("AWS_ACCESS_KEY_ID not set")?;
        let secret = env::var("AWS_SECRET_ACCESS_KEY").context("AWS_SECRET_ACCESS_KEY not set")?;
        let credentials = Self::new(&key, &SecretString::new(secret.into()));

        Ok(match env::var("AWS_SESSION_TOKEN") {
            Ok(token) if !token.is_empty() => credentials.with_session_token(&token),
            _ => credentials,
        })
    }

    #[must_use]
    pub fn with_session_token(mut self, token: &str) -> Self {
        self.session_token = Some(SecretString::new(token.into()));
        self
    }

    /// Get a reference to the access key ID.
    #[must_use]
    pub fn aws_access_key_id(&self) -> &str {
        &self.key
    }

    /// Get a reference to the secret access key.
    #[must_use]
    pub const fn aws_secret_access_key(&self) -> &SecretString {
        &self.secret
    }

    #[must_use]
    pub const fn aws_session_token(&self) -> Option<&SecretString> {
        self.session_token.as_ref()
    }

    /// Both keys are needed to sign anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() || self.secret.expose_secret().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
