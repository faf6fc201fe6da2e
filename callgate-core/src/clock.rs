//! Time source used for default page tokens.

use std::sync::Mutex;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Page tokens are creation timestamps, rendered in this format (UTC).
pub const PAGE_TOKEN_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn format_page_token(at: DateTime<Utc>) -> String {
    at.format(PAGE_TOKEN_FORMAT).to_string()
}

pub fn parse_page_token(token: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(token, PAGE_TOKEN_FORMAT)
        .ok()
        .map(|t| t.and_utc())
}

pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Token meaning "start from the newest item".
    fn current_page_token(&self) -> String {
        format_page_token(self.now())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A settable clock for tests and replay.
#[derive(Debug)]
pub struct FixedClock {
    at: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at: Mutex::new(at) }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        if let Ok(mut guard) = self.at.lock() {
            *guard = at;
        }
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        match self.at.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
