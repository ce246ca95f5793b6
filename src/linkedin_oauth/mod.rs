//! LinkedIn OAuth2 authorization-code flow.
//!
//! - `endpoints.rs`: stateless calls against the authorization and token endpoints
//! - `credentials.rs`: the in-memory token pair
//! - `prompt.rs`: where the authorization code comes from (console or pre-supplied)
//! - `service.rs`: composes the above into `authenticate`

pub mod credentials;
pub mod endpoints;
pub mod prompt;
pub mod service;

pub use credentials::LinkedInCredential;
pub use prompt::{CodePrompt, ConsolePrompt, StaticCode};
pub use service::LinkedInOauthService;
