use crate::config::Config;
use crate::error::JobsError;
use std::time::Duration;

/// Shared HTTP client for the token and jobs endpoints.
///
/// Redirects are not followed, so a misconfigured token URL fails instead of
/// replaying the exchange elsewhere.
pub fn build_client(cfg: &Config) -> Result<reqwest::Client, JobsError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(concat!("linkedin-jobs/", env!("CARGO_PKG_VERSION")))
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .timeout(Duration::from_secs(cfg.request_timeout_secs));
    if let Some(proxy_url) = cfg.proxy.as_ref() {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
    }
    Ok(builder.build()?)
}
