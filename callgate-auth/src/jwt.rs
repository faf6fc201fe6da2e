// Signed access tokens.

use std::sync::Arc;

use callgate_core::{GateError, GateResult, Principal, TimeSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::options::{JwtOptions, OptionsError};

#[cfg(any(feature = "jwt-aws-lc-rs", feature = "jwt-rust-crypto"))]
use crate::options::JwtAlgorithm;

/// Claims carried by an access token. The principal travels whole under
/// `agent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub agent: Principal,
    pub iss: String,
    pub aud: Vec<String>,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// Issues and verifies access tokens.
///
/// The signing key is handed over at construction and stays read-only
/// for the provider's lifetime; rotating it means building a new
/// provider.
pub struct JwtProvider {
    options: JwtOptions,
    clock: Arc<dyn TimeSource>,
}

impl JwtProvider {
    pub fn new(options: JwtOptions, clock: Arc<dyn TimeSource>) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self { options, clock })
    }

    pub fn options(&self) -> &JwtOptions {
        &self.options
    }

    /// Claims for `principal` as of the provider's clock.
    pub fn claims_for(&self, principal: &Principal) -> Claims {
        let now = self.clock.now();
        let lifetime = chrono::Duration::from_std(self.options.expires_in)
            .unwrap_or_else(|_| chrono::Duration::days(7));
        Claims {
            agent: principal.clone(),
            iss: self.options.issuer.clone(),
            aud: self.options.audience.clone(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn issue(&self, principal: &Principal) -> GateResult<String> {
        let claims = self.claims_for(principal);
        debug!(agent_id = %principal.id, jti = %claims.jti, exp = claims.exp, "issuing access token");
        self.sign(&claims)
    }

    /// Verify signature, issuer, audience and expiry, and return the
    /// embedded principal.
    pub fn verify(&self, token: &str) -> GateResult<Principal> {
        let claims = self.decode(token)?;
        if expired(claims.exp, self.clock.now()) {
            return Err(GateError::not_authenticated("token expired").into_anyhow());
        }
        Ok(claims.agent)
    }

    fn secret(&self) -> GateResult<&[u8]> {
        self.options
            .secret
            .as_deref()
            .map(str::as_bytes)
            .ok_or_else(|| GateError::not_authenticated("JWT secret is not configured").into_anyhow())
    }
}

fn expired(exp: i64, now: DateTime<Utc>) -> bool {
    exp <= now.timestamp()
}

#[cfg(any(feature = "jwt-aws-lc-rs", feature = "jwt-rust-crypto"))]
impl JwtProvider {
    fn algorithm(alg: JwtAlgorithm) -> jsonwebtoken::Algorithm {
        match alg {
            JwtAlgorithm::HS256 => jsonwebtoken::Algorithm::HS256,
            JwtAlgorithm::HS384 => jsonwebtoken::Algorithm::HS384,
            JwtAlgorithm::HS512 => jsonwebtoken::Algorithm::HS512,
        }
    }

    fn sign(&self, claims: &Claims) -> GateResult<String> {
        use jsonwebtoken::{encode, EncodingKey, Header};

        let header = Header::new(Self::algorithm(self.options.algorithm));
        encode(&header, claims, &EncodingKey::from_secret(self.secret()?))
            .map_err(|e| GateError::not_authenticated(e.to_string()).into_anyhow())
    }

    fn decode(&self, token: &str) -> GateResult<Claims> {
        use jsonwebtoken::{decode, DecodingKey, Validation};

        let mut validation = Validation::new(Self::algorithm(self.options.algorithm));
        validation.set_issuer(&[self.options.issuer.as_str()]);
        validation.set_audience(self.options.audience.as_slice());
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        // Expiry is checked against the injected clock instead.
        validation.validate_exp = false;

        let decoded = decode::<Claims>(token, &DecodingKey::from_secret(self.secret()?), &validation)
            .map_err(|e| GateError::not_authenticated(e.to_string()).into_anyhow())?;
        Ok(decoded.claims)
    }
}

#[cfg(not(any(feature = "jwt-aws-lc-rs", feature = "jwt-rust-crypto")))]
impl JwtProvider {
    fn sign(&self, _claims: &Claims) -> GateResult<String> {
        self.secret()?;
        Err(GateError::not_implemented(
            "JWT support is disabled (enable one of: jwt-aws-lc-rs, jwt-rust-crypto)",
        )
        .into_anyhow())
    }

    fn decode(&self, _token: &str) -> GateResult<Claims> {
        self.secret()?;
        Err(GateError::not_implemented(
            "JWT support is disabled (enable one of: jwt-aws-lc-rs, jwt-rust-crypto)",
        )
        .into_anyhow())
    }
}
