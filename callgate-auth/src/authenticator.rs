// Authentication core.

use std::sync::Arc;

use async_trait::async_trait;
use callgate_core::{GateError, GateResult, Principal, RequestContext};
use tracing::debug;

use crate::accesskey::AccesskeyAuthenticator;
use crate::credentials::{Credential, Credentials};
use crate::jwt::JwtProvider;

/// Turns request credentials into a principal.
#[async_trait]
pub trait Authenticate: Send + Sync {
    async fn authenticate(&self, ctx: &RequestContext, credentials: &Credentials) -> GateResult<Principal>;
}

/// Token first, access key second.
pub struct Authenticator {
    jwt: Arc<JwtProvider>,
    accesskeys: AccesskeyAuthenticator,
}

impl Authenticator {
    pub fn new(jwt: Arc<JwtProvider>, accesskeys: AccesskeyAuthenticator) -> Self {
        Self { jwt, accesskeys }
    }

    pub fn jwt(&self) -> &JwtProvider {
        &self.jwt
    }
}

#[async_trait]
impl Authenticate for Authenticator {
    async fn authenticate(&self, ctx: &RequestContext, credentials: &Credentials) -> GateResult<Principal> {
        match credentials.resolve() {
            Some(Credential::Token(token)) => {
                debug!("authenticating with token");
                self.jwt.verify(&token)
            }
            Some(Credential::Accesskey(key)) => {
                debug!("authenticating with access key");
                self.accesskeys.authenticate(ctx, &key).await
            }
            None => Err(GateError::not_authenticated("no credentials").into_anyhow()),
        }
    }
}
