//! callgate-auth: who is calling.
//!
//! A request carries either a signed access token or a long-lived access
//! key. [`Authenticator`] resolves whichever is present into the
//! [`callgate_core::Principal`] the handlers act for.

pub mod accesskey;
pub mod authenticator;
pub mod credentials;
pub mod jwt;
pub mod options;

pub use accesskey::{AccesskeyAuthenticator, ACCESSKEY_USERNAME};
pub use authenticator::{Authenticate, Authenticator};
pub use credentials::{extract_bearer_token, Credential, Credentials};
pub use jwt::{Claims, JwtProvider};
pub use options::{AccesskeyOptions, AuthOptions, AuthOptionsBuilder, JwtAlgorithm, JwtOptions, OptionsError};
