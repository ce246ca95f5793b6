use crate::error::JobsError;
use crate::linkedin_oauth::endpoints::LinkedInTokenResponse;
use oauth2::{AccessToken, RefreshToken, TokenResponse};

/// Token pair obtained from the code exchange. Lives only in memory.
///
/// Both tokens are `oauth2` secret wrappers, so `Debug` output is redacted.
#[derive(Debug, Clone)]
pub struct LinkedInCredential {
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
}

impl LinkedInCredential {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: AccessToken::new(access_token.into()),
            refresh_token: RefreshToken::new(refresh_token.into()),
        }
    }

    /// Take both tokens from a token endpoint response; a missing refresh token is fatal.
    pub fn from_token_response(resp: &LinkedInTokenResponse) -> Result<Self, JobsError> {
        let refresh_token = resp
            .refresh_token()
            .cloned()
            .ok_or(JobsError::MissingRefreshToken)?;
        Ok(Self {
            access_token: resp.access_token().clone(),
            refresh_token,
        })
    }

    pub fn bearer(&self) -> &str {
        self.access_token.secret()
    }
}
