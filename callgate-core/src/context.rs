//! Request-scoped context: cancellation and deadline.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::errors::{GateError, GateResult};

/// Carried into every handler and every RPC client call.
///
/// Cloning shares the cancellation token; [`RequestContext::child`]
/// derives a token that is cancelled with its parent but can also be
/// cancelled on its own.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: Uuid,
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            cancellation: CancellationToken::new(),
            deadline: None,
        }
    }

    /// Use a token owned by the front end (e.g. tied to the connection).
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = request_id;
        self
    }

    /// Sets a deadline `timeout` from now. An earlier existing deadline wins.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let at = Instant::now() + timeout;
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < at => existing,
            _ => at,
        });
        self
    }

    pub fn child(&self) -> Self {
        Self {
            request_id: self.request_id,
            cancellation: self.cancellation.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Run `fut` until it completes, the request is cancelled, or the
    /// deadline passes. On cancellation the future is dropped, which
    /// aborts any in-flight RPC it owns.
    pub async fn guard<F, T>(&self, fut: F) -> GateResult<T>
    where
        F: Future<Output = GateResult<T>>,
    {
        if self.is_cancelled() {
            return Err(GateError::cancelled("request cancelled").into_anyhow());
        }

        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.cancellation.cancelled() => {
                        Err(GateError::cancelled("request cancelled").into_anyhow())
                    }
                    _ = tokio::time::sleep_until(deadline) => {
                        Err(GateError::deadline_exceeded("request deadline exceeded").into_anyhow())
                    }
                    res = fut => res,
                }
            }
            None => {
                tokio::select! {
                    biased;
                    _ = self.cancellation.cancelled() => {
                        Err(GateError::cancelled("request cancelled").into_anyhow())
                    }
                    res = fut => res,
                }
            }
        }
    }
}
