//! # Errors
//!
//! callgate uses a small, transport-agnostic error taxonomy.
//! Core goals:
//! - every handler returns `anyhow::Result`, so upstream RPC errors pass
//!   through `?` untouched and keep their original text
//! - errors raised by this layer carry a [`ErrorKind`] that the front end
//!   can map to a status code (no status codes are assigned here)
//! - `data` may hold a JSON payload with extra detail for clients

use std::fmt;

use anyhow::Error as AnyError;
use serde_json::Value;

/// A convenience result type for callgate APIs.
pub type GateResult<T> = std::result::Result<T, AnyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller-supplied parameter failed a local precondition.
    InvalidArgument,
    /// No usable credentials were presented.
    NotAuthenticated,
    /// The evaluator or an ownership check refused the principal.
    PermissionDenied,
    /// The resource does not exist or is soft-deleted.
    NotFound,
    /// The request's cancellation token fired.
    Cancelled,
    /// The request's deadline passed before the call finished.
    DeadlineExceeded,
    NotImplemented,
    /// A downstream service failed. Foreign errors classify as this kind.
    Upstream,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::NotAuthenticated => "NotAuthenticated",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Cancelled => "Cancelled",
            ErrorKind::DeadlineExceeded => "DeadlineExceeded",
            ErrorKind::NotImplemented => "NotImplemented",
            ErrorKind::Upstream => "Upstream",
        }
    }

    /// Kebab-cased class name, e.g. "permission-denied".
    pub fn class_name(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid-argument",
            ErrorKind::NotAuthenticated => "not-authenticated",
            ErrorKind::PermissionDenied => "permission-denied",
            ErrorKind::NotFound => "not-found",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::DeadlineExceeded => "deadline-exceeded",
            ErrorKind::NotImplemented => "not-implemented",
            ErrorKind::Upstream => "upstream",
        }
    }
}

/// A structured callgate error that can live inside `anyhow::Error`.
#[derive(Debug)]
pub struct GateError {
    pub kind: ErrorKind,
    pub message: String,
    pub data: Option<Value>,
    pub source: Option<AnyError>,
}

impl GateError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            data: None,
            source: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_source(mut self, source: AnyError) -> Self {
        self.source = Some(source);
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    /// Convert into `anyhow::Error` so it flows through handler results.
    pub fn into_anyhow(self) -> AnyError {
        AnyError::new(self)
    }

    /// Downcast an `anyhow::Error` to a `GateError` if possible.
    pub fn from_anyhow(err: &AnyError) -> Option<&GateError> {
        err.downcast_ref::<GateError>()
    }

    /// Classify any error. Anything that is not a `GateError` came from
    /// a downstream service and counts as `Upstream`.
    pub fn kind_of(err: &AnyError) -> ErrorKind {
        Self::from_anyhow(err)
            .map(|e| e.kind)
            .unwrap_or(ErrorKind::Upstream)
    }

    /// Turn any error into a GateError:
    /// - if it's already a GateError, keep it (lossless)
    /// - otherwise wrap as Upstream, keeping the original text as message
    pub fn normalize(err: AnyError) -> GateError {
        match err.downcast::<GateError>() {
            Ok(gate) => gate,
            Err(other) => GateError::new(ErrorKind::Upstream, other.to_string()).with_source(other),
        }
    }

    /// Copy without the inner `source`, for returning to clients.
    pub fn sanitize_for_client(&self) -> GateError {
        GateError {
            kind: self.kind,
            message: self.message.clone(),
            data: self.data.clone(),
            source: None,
        }
    }

    pub fn to_json(&self) -> Value {
        let mut base = serde_json::json!({
            "name": self.name(),
            "message": self.message,
            "className": self.class_name(),
        });
        if let Some(d) = &self.data {
            base["data"] = d.clone();
        }
        base
    }

    // ---- Constructors ----

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, msg)
    }
    pub fn not_authenticated(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotAuthenticated, msg)
    }
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::PermissionDenied, msg)
    }
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }
    pub fn cancelled(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Cancelled, msg)
    }
    pub fn deadline_exceeded(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::DeadlineExceeded, msg)
    }
    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotImplemented, msg)
    }
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Upstream, msg)
    }
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.message)
    }
}

impl std::error::Error for GateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Convenience helper for "bail with GateError".
#[macro_export]
macro_rules! bail_gate {
    ($ctor:ident, $msg:expr) => {
        return Err($crate::errors::GateError::$ctor($msg).into_anyhow())
    };
    ($ctor:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::errors::GateError::$ctor(format!($fmt, $($arg)*)).into_anyhow())
    };
}
