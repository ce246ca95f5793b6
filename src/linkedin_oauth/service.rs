use super::endpoints::{LinkedInOauth2Client, LinkedInOauthEndpoints, build_oauth2_client};
use crate::config::Config;
use crate::error::JobsError;
use crate::linkedin_oauth::credentials::LinkedInCredential;
use crate::linkedin_oauth::prompt::CodePrompt;

use oauth2::{AuthorizationCode, CsrfToken};
use tracing::{debug, info};
use url::Url;

/// Authenticator: composes the LinkedIn authorization-code exchange.
pub struct LinkedInOauthService {
    client: LinkedInOauth2Client,
    http: reqwest::Client,
    scopes: Vec<String>,
    state: Option<String>,
}

impl LinkedInOauthService {
    pub fn new(cfg: &Config, http: reqwest::Client) -> Result<Self, JobsError> {
        Ok(Self {
            client: build_oauth2_client(cfg)?,
            http,
            scopes: cfg.scopes.clone(),
            state: cfg.oauth_state.clone(),
        })
    }

    /// Authorization URL the operator must visit, plus the `state` it carries.
    pub fn authorize_url(&self) -> (Url, CsrfToken) {
        let state = match self.state.as_ref() {
            Some(s) => CsrfToken::new(s.clone()),
            None => CsrfToken::new_random(),
        };
        LinkedInOauthEndpoints::build_authorize_url(&self.client, state, &self.scopes)
    }

    /// Exchange an authorization code for an access/refresh token pair.
    pub async fn exchange_code(
        &self,
        code: impl Into<String>,
    ) -> Result<LinkedInCredential, JobsError> {
        let resp = LinkedInOauthEndpoints::exchange_authorization_code(
            &self.client,
            AuthorizationCode::new(code.into()),
            &self.http,
        )
        .await?;
        LinkedInCredential::from_token_response(&resp)
    }

    /// Trade the refresh token for a new pair. Not part of the default run.
    pub async fn refresh(
        &self,
        credential: &LinkedInCredential,
    ) -> Result<LinkedInCredential, JobsError> {
        let resp = LinkedInOauthEndpoints::refresh_access_token(
            &self.client,
            &credential.refresh_token,
            &self.http,
        )
        .await?;
        LinkedInCredential::from_token_response(&resp)
    }

    /// Full interactive flow: build the URL, obtain the code, exchange it.
    pub async fn authenticate<P: CodePrompt>(
        &self,
        prompt: &mut P,
    ) -> Result<LinkedInCredential, JobsError> {
        let (auth_url, _state) = self.authorize_url();
        debug!(%auth_url, "authorization URL built");
        let code = prompt.authorization_code(&auth_url).await?;
        let credential = self.exchange_code(code).await?;
        info!("LinkedIn authentication completed");
        Ok(credential)
    }
}
