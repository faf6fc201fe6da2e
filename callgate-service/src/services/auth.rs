use callgate_core::{ErrorKind, GateError, GateResult, Owned, Principal, RequestContext};
use serde::Serialize;
use tracing::{info, warn};

use crate::handler::ServiceHandler;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResult {
    pub username: String,
    pub token: String,
}

impl ServiceHandler {
    /// Verify the credentials with the agent manager and issue an access
    /// token for the agent.
    pub async fn login(&self, ctx: &RequestContext, username: &str, password: &str) -> GateResult<LoginResult> {
        let agent = ctx
            .guard(self.clients.agent.agent_login(ctx, username.to_string(), password.to_string()))
            .await
            .map_err(|err| match GateError::kind_of(&err) {
                ErrorKind::Upstream | ErrorKind::NotFound => {
                    warn!(username, "login rejected");
                    GateError::not_authenticated("invalid username or password")
                        .with_source(err)
                        .into_anyhow()
                }
                _ => err,
            })?;
        if agent.is_deleted() {
            warn!(username, agent_id = %agent.id, "login rejected for a deleted agent");
            return Err(GateError::not_authenticated("invalid username or password").into_anyhow());
        }

        let principal = Principal::from(&agent);
        let token = self.jwt.issue(&principal)?;
        info!(agent_id = %agent.id, customer_id = %agent.customer_id, "agent logged in");

        Ok(LoginResult {
            username: agent.username,
            token,
        })
    }
}
