// Credential extraction from an inbound request.

use std::collections::HashMap;

pub const TOKEN_PARAM: &str = "token";
pub const ACCESSKEY_PARAM: &str = "accesskey";

pub fn extract_bearer_token(headers: &HashMap<String, String>) -> Option<String> {
    let v = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("authorization"))
        .map(|(_, v)| v)?;
    let (scheme, token) = v.trim().split_once(' ')?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

/// Which kind of credential a request carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Token(String),
    Accesskey(String),
}

/// Headers, query parameters and cookies as the front end parsed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub headers: HashMap<String, String>,
    pub query: HashMap<String, String>,
    pub cookies: HashMap<String, String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Pick the credential to use. Tokens win over access keys; within
    /// each kind the header beats the query string, which beats cookies.
    pub fn resolve(&self) -> Option<Credential> {
        let token = extract_bearer_token(&self.headers)
            .or_else(|| non_empty(&self.query, TOKEN_PARAM))
            .or_else(|| non_empty(&self.cookies, TOKEN_PARAM));
        if let Some(token) = token {
            return Some(Credential::Token(token));
        }

        non_empty(&self.query, ACCESSKEY_PARAM)
            .or_else(|| non_empty(&self.cookies, ACCESSKEY_PARAM))
            .map(Credential::Accesskey)
    }
}

fn non_empty(map: &HashMap<String, String>, key: &str) -> Option<String> {
    map.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
