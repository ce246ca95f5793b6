use crate::error::JobsError;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use url::Url;

/// Source of the authorization code the operator obtains from the browser redirect.
pub trait CodePrompt {
    fn authorization_code(
        &mut self,
        auth_url: &Url,
    ) -> impl Future<Output = Result<String, JobsError>> + Send;
}

/// Prints the authorization URL and blocks on one line of stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompt;

impl CodePrompt for ConsolePrompt {
    async fn authorization_code(&mut self, auth_url: &Url) -> Result<String, JobsError> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(
                format!("Please visit this URL to authorize the app:\n{auth_url}\n").as_bytes(),
            )
            .await?;
        stdout
            .write_all(b"Enter the authorization code here: ")
            .await?;
        stdout.flush().await?;

        let mut line = String::new();
        let read = BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await?;
        if read == 0 {
            warn!("stdin closed before an authorization code was entered");
        }
        Ok(line.trim().to_string())
    }
}

/// A code supplied ahead of time (`LINKEDIN_AUTH_CODE`); the URL is only logged.
#[derive(Debug, Clone)]
pub struct StaticCode(pub String);

impl CodePrompt for StaticCode {
    async fn authorization_code(&mut self, auth_url: &Url) -> Result<String, JobsError> {
        info!(%auth_url, "using pre-supplied authorization code");
        Ok(self.0.trim().to_string())
    }
}
