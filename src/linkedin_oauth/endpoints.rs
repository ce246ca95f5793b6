use crate::config::Config;
use crate::error::JobsError;

use oauth2::{
    AccessToken, AuthType, AuthUrl, AuthorizationCode, Client as OAuth2Client, ClientId,
    ClientSecret, CsrfToken, EndpointNotSet, EndpointSet, RedirectUrl, RefreshToken, Scope,
    StandardRevocableToken, TokenResponse, TokenUrl,
    basic::{
        BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
        BasicTokenType,
    },
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Stateless LinkedIn OAuth endpoints.
pub(super) struct LinkedInOauthEndpoints;

impl LinkedInOauthEndpoints {
    /// Authorization URL carrying `response_type=code`, `client_id`, `redirect_uri` and `state`.
    pub(super) fn build_authorize_url(
        client: &LinkedInOauth2Client,
        state: CsrfToken,
        scopes: &[String],
    ) -> (Url, CsrfToken) {
        client
            .authorize_url(|| state)
            .add_scopes(scopes.iter().cloned().map(Scope::new))
            .url()
    }

    /// POST `grant_type`, `code`, `redirect_uri`, `client_id` and `client_secret` to the token URL.
    pub(super) async fn exchange_authorization_code(
        client: &LinkedInOauth2Client,
        code: AuthorizationCode,
        http_client: &reqwest::Client,
    ) -> Result<LinkedInTokenResponse, JobsError> {
        let token_result: LinkedInTokenResponse =
            client.exchange_code(code).request_async(http_client).await?;
        debug!(
            refresh_token_expires_in = ?token_result.refresh_token_expires_in(),
            "authorization code exchanged"
        );
        info!("Access token obtained successfully");
        Ok(token_result)
    }

    /// POST `grant_type=refresh_token` with the client credentials.
    pub(super) async fn refresh_access_token(
        client: &LinkedInOauth2Client,
        refresh_token: &RefreshToken,
        http_client: &reqwest::Client,
    ) -> Result<LinkedInTokenResponse, JobsError> {
        let token_result: LinkedInTokenResponse = client
            .exchange_refresh_token(refresh_token)
            .request_async(http_client)
            .await?;
        info!("Access token refreshed successfully");
        Ok(token_result)
    }
}

/// Build the LinkedIn OAuth2 client. Client credentials travel in the request body.
pub(super) fn build_oauth2_client(cfg: &Config) -> Result<LinkedInOauth2Client, JobsError> {
    let client = OAuth2Client::new(ClientId::new(cfg.client_id.clone()))
        .set_client_secret(ClientSecret::new(cfg.client_secret.clone()))
        .set_auth_uri(AuthUrl::new(cfg.auth_url.as_str().to_string())?)
        .set_token_uri(TokenUrl::new(cfg.token_url.as_str().to_string())?)
        .set_redirect_uri(RedirectUrl::new(cfg.redirect_uri.clone())?)
        .set_auth_type(AuthType::RequestBody);
    Ok(client)
}

/// Token endpoint payload as LinkedIn sends it.
///
/// LinkedIn omits `token_type`, so it defaults to `bearer`. `scope` arrives
/// comma separated.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkedInTokenResponse {
    access_token: AccessToken,
    #[serde(default = "bearer", deserialize_with = "token_type_or_bearer")]
    token_type: BasicTokenType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<RefreshToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token_expires_in: Option<u64>,
    #[serde(
        rename = "scope",
        default,
        deserialize_with = "split_scopes",
        serialize_with = "join_scopes",
        skip_serializing_if = "Option::is_none"
    )]
    scopes: Option<Vec<Scope>>,
}

impl LinkedInTokenResponse {
    pub fn refresh_token_expires_in(&self) -> Option<Duration> {
        self.refresh_token_expires_in.map(Duration::from_secs)
    }
}

impl TokenResponse for LinkedInTokenResponse {
    type TokenType = BasicTokenType;

    fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    fn token_type(&self) -> &BasicTokenType {
        &self.token_type
    }

    fn expires_in(&self) -> Option<Duration> {
        self.expires_in.map(Duration::from_secs)
    }

    fn refresh_token(&self) -> Option<&RefreshToken> {
        self.refresh_token.as_ref()
    }

    fn scopes(&self) -> Option<&Vec<Scope>> {
        self.scopes.as_ref()
    }
}

fn bearer() -> BasicTokenType {
    BasicTokenType::Bearer
}

fn token_type_or_bearer<'de, D>(deserializer: D) -> Result<BasicTokenType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => BasicTokenType::Bearer,
        Some(s) if s.eq_ignore_ascii_case("bearer") => BasicTokenType::Bearer,
        Some(s) if s.eq_ignore_ascii_case("mac") => BasicTokenType::Mac,
        Some(s) => BasicTokenType::Extension(s),
    })
}

fn split_scopes<'de, D>(deserializer: D) -> Result<Option<Vec<Scope>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.map(|s| {
        s.split([',', ' '])
            .filter(|part| !part.is_empty())
            .map(|part| Scope::new(part.to_string()))
            .collect()
    }))
}

fn join_scopes<S>(scopes: &Option<Vec<Scope>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match scopes {
        Some(scopes) => {
            let joined = scopes
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            serializer.serialize_str(&joined)
        }
        None => serializer.serialize_none(),
    }
}


pub(super) type LinkedInOauth2Client = OAuth2Client<
    BasicErrorResponse,
    LinkedInTokenResponse,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;
