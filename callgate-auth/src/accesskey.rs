// Access key authentication.

use std::sync::Arc;

use callgate_core::{GateError, GateResult, Owned, Permission, Principal, RequestContext, TimeSource};
use callgate_rpc::models::accesskey::Accesskey;
use callgate_rpc::CustomerClient;
use tracing::{debug, warn};

/// Username carried by principals synthesized from an access key.
pub const ACCESSKEY_USERNAME: &str = "accesskey";

pub struct AccesskeyAuthenticator {
    customer: Arc<dyn CustomerClient>,
    clock: Arc<dyn TimeSource>,
}

impl AccesskeyAuthenticator {
    pub fn new(customer: Arc<dyn CustomerClient>, clock: Arc<dyn TimeSource>) -> Self {
        Self { customer, clock }
    }

    /// Look the key up and stand in a customer-admin principal for its
    /// tenant. Unknown, deleted and expired keys are all rejected the
    /// same way.
    pub async fn authenticate(&self, ctx: &RequestContext, token: &str) -> GateResult<Principal> {
        let found = ctx
            .guard(self.customer.accesskey_get_by_token(ctx, token.to_string()))
            .await?;

        let key = match found {
            Some(key) => key,
            None => {
                warn!("unknown access key");
                return Err(invalid_key());
            }
        };

        if key.is_deleted() {
            warn!(accesskey_id = %key.id, "access key is deleted");
            return Err(invalid_key());
        }
        if key.is_expired(self.clock.now()) {
            warn!(accesskey_id = %key.id, tm_expire = ?key.tm_expire, "access key expired");
            return Err(invalid_key());
        }

        debug!(accesskey_id = %key.id, customer_id = %key.customer_id, "access key accepted");
        Ok(principal_for(&key))
    }
}

pub fn principal_for(key: &Accesskey) -> Principal {
    Principal::new(key.id, key.customer_id, Permission::CUSTOMER_ADMIN)
        .with_username(ACCESSKEY_USERNAME)
        .with_name(key.name.clone())
}

fn invalid_key() -> anyhow::Error {
    GateError::not_authenticated("invalid accesskey").into_anyhow()
}
