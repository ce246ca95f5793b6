use crate::error::JobsError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use url::Url;

pub const LINKEDIN_AUTH_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
pub const LINKEDIN_TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";
pub const LINKEDIN_JOBS_URL: &str = "https://api.linkedin.com/v2/jobs";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080";

/// Field projection requested from the jobs endpoint.
pub const DEFAULT_JOB_FIELDS: &str = "id,title,description,location,company,createdBy,createdDate,jobType,experienceLevel,experienceQualification,skills,visibility,postingStatus,postingDate,postingReason,postAndApplyEnabled,postAndApplyLink,postAndApplyText,postAndApplyImageUrls,postAndApplyButtonText,postAndApplyButtonUrl,postAndApplyDescription,contactInfo,emailAddress,phoneNumbers,name";

/// Environment prefix; `LINKEDIN_CLIENT_ID` maps to `client_id`.
pub const ENV_PREFIX: &str = "LINKEDIN_";

/// Runtime configuration: compiled defaults overlaid with `LINKEDIN_*` env vars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    /// Sent verbatim; it must match the registered redirect URI exactly.
    pub redirect_uri: String,
    pub auth_url: Url,
    pub token_url: Url,
    pub jobs_url: Url,
    pub job_fields: String,
    pub accept_language: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Fixed OAuth `state`; a random CSRF token is generated when unset.
    #[serde(default)]
    pub oauth_state: Option<String>,
    /// Pre-supplied authorization code, skips the console prompt.
    #[serde(default)]
    pub auth_code: Option<String>,
    pub database_url: String,
    #[serde(default)]
    pub proxy: Option<Url>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            auth_url: static_url(LINKEDIN_AUTH_URL),
            token_url: static_url(LINKEDIN_TOKEN_URL),
            jobs_url: static_url(LINKEDIN_JOBS_URL),
            job_fields: DEFAULT_JOB_FIELDS.to_string(),
            accept_language: "en_US".to_string(),
            scopes: Vec::new(),
            oauth_state: None,
            auth_code: None,
            database_url: "sqlite:linkedin_jobs.sqlite".to_string(),
            proxy: None,
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Provider chain: defaults, then `LINKEDIN_*` environment variables.
    ///
    /// Credential-like keys are layered last as raw strings, since the env
    /// provider would turn `0042` into the integer `42`.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(VerbatimEnv::from_env()))
    }

    pub fn load() -> Result<Self, JobsError> {
        Ok(Self::figment().extract()?)
    }
}

/// Env settings that must reach `Config` exactly as written.
#[derive(Debug, Default, Serialize)]
struct VerbatimEnv {
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    oauth_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth_code: Option<String>,
}

impl VerbatimEnv {
    fn from_env() -> Self {
        let var = |key: &str| std::env::var(format!("{ENV_PREFIX}{key}")).ok();
        Self {
            client_id: var("CLIENT_ID"),
            client_secret: var("CLIENT_SECRET"),
            oauth_state: var("OAUTH_STATE"),
            auth_code: var("AUTH_CODE"),
        }
    }
}

fn static_url(s: &'static str) -> Url {
    Url::parse(s).expect("static URL literal must parse")
}
