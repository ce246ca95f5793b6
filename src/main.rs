use linkedin_jobs::api::JobsApi;
use linkedin_jobs::config::Config;
use linkedin_jobs::linkedin_oauth::{ConsolePrompt, StaticCode};
use linkedin_jobs::types::JobTable;
use linkedin_jobs::{JobSearch, LinkedInOauthService, db, http};
use mimalloc::MiMalloc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        redirect_uri = %cfg.redirect_uri,
        jobs_url = %cfg.jobs_url,
        proxy = %cfg.proxy.as_ref().map(|u| u.as_str()).unwrap_or("<none>"),
        loglevel = %cfg.loglevel
    );
    if cfg.client_id.is_empty() || cfg.client_secret.is_empty() {
        warn!("LINKEDIN_CLIENT_ID or LINKEDIN_CLIENT_SECRET is not set");
    }

    let storage = db::connect(&cfg.database_url).await?;
    let client = http::build_client(&cfg)?;

    let oauth = LinkedInOauthService::new(&cfg, client.clone())?;
    let credential = match cfg.auth_code.clone() {
        Some(code) => oauth.authenticate(&mut StaticCode(code)).await?,
        None => oauth.authenticate(&mut ConsolePrompt).await?,
    };

    let search = JobSearch::new(client, JobsApi::from_config(&cfg), storage);
    let records = search.search_jobs(&credential).await?;

    print!("{}", JobTable(&records));
    Ok(())
}
