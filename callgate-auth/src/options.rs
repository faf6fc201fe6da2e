// Authentication options and configuration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum lifetime of an access key unless configured otherwise (one day).
pub const DEFAULT_ACCESSKEY_MIN_EXPIRE: Duration = Duration::from_secs(86_400);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("JWT issuer cannot be empty")]
    EmptyIssuer,
    #[error("JWT audience cannot be empty")]
    EmptyAudience,
    #[error("HMAC algorithms require a secret")]
    MissingSecret,
    #[error("access token expiration must be greater than 0")]
    ZeroTokenLifetime,
    #[error("access key minimum expiration must be greater than 0")]
    ZeroAccesskeyLifetime,
}

/// JWT signing algorithms. Only HMAC is supported: the signing key is a
/// shared secret handed to the provider at construction.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum JwtAlgorithm {
    #[default]
    HS256,
    HS384,
    HS512,
}

impl std::str::FromStr for JwtAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HS256" => Ok(Self::HS256),
            "HS384" => Ok(Self::HS384),
            "HS512" => Ok(Self::HS512),
            other => Err(format!("unsupported JWT algorithm: {other}")),
        }
    }
}

/// JWT-specific configuration options
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JwtOptions {
    pub algorithm: JwtAlgorithm,
    /// Token issuer (iss claim)
    pub issuer: String,
    /// Token audience (aud claim)
    pub audience: Vec<String>,
    /// Access token lifetime
    #[serde(with = "humantime_serde")]
    pub expires_in: Duration,
    /// Signing secret
    pub secret: Option<String>,
}

impl Default for JwtOptions {
    fn default() -> Self {
        Self {
            algorithm: JwtAlgorithm::default(),
            issuer: "callgate".to_string(),
            audience: vec!["callgate-api".to_string()],
            expires_in: Duration::from_secs(7 * 24 * 3600),
            secret: None,
        }
    }
}

// The secret stays out of logs.
impl fmt::Debug for JwtOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtOptions")
            .field("algorithm", &self.algorithm)
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expires_in", &self.expires_in)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl JwtOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.issuer.is_empty() {
            return Err(OptionsError::EmptyIssuer);
        }
        if self.audience.is_empty() {
            return Err(OptionsError::EmptyAudience);
        }
        if self.secret.as_deref().map_or(true, str::is_empty) {
            return Err(OptionsError::MissingSecret);
        }
        if self.expires_in.is_zero() {
            return Err(OptionsError::ZeroTokenLifetime);
        }
        Ok(())
    }
}

/// Access key options
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccesskeyOptions {
    /// Shortest lifetime a new access key may be given.
    #[serde(with = "humantime_serde")]
    pub min_expire: Duration,
}

impl Default for AccesskeyOptions {
    fn default() -> Self {
        Self {
            min_expire: DEFAULT_ACCESSKEY_MIN_EXPIRE,
        }
    }
}

impl AccesskeyOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.min_expire.is_zero() {
            return Err(OptionsError::ZeroAccesskeyLifetime);
        }
        Ok(())
    }
}

/// Main authentication configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthOptions {
    pub jwt: JwtOptions,
    pub accesskey: AccesskeyOptions,
}

impl AuthOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        self.jwt.validate()?;
        self.accesskey.validate()
    }

    pub fn builder() -> AuthOptionsBuilder {
        AuthOptionsBuilder::new()
    }
}

/// Builder pattern for AuthOptions configuration
#[derive(Clone, Debug, Default)]
pub struct AuthOptionsBuilder {
    jwt: JwtOptions,
    accesskey: AccesskeyOptions,
}

impl AuthOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jwt(mut self, jwt: JwtOptions) -> Self {
        self.jwt = jwt;
        self
    }

    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt.secret = Some(secret.into());
        self
    }

    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.jwt.issuer = issuer.into();
        self
    }

    pub fn audience(mut self, audience: Vec<String>) -> Self {
        self.jwt.audience = audience;
        self
    }

    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.jwt.expires_in = expires_in;
        self
    }

    pub fn accesskey_min_expire(mut self, min_expire: Duration) -> Self {
        self.accesskey.min_expire = min_expire;
        self
    }

    pub fn build(self) -> AuthOptions {
        AuthOptions {
            jwt: self.jwt,
            accesskey: self.accesskey,
        }
    }

    pub fn build_validated(self) -> Result<AuthOptions, OptionsError> {
        let options = self.build();
        options.validate()?;
        Ok(options)
    }
}
