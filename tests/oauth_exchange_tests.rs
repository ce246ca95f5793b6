mod common;

use common::mock_config;
use linkedin_jobs::linkedin_oauth::StaticCode;
use linkedin_jobs::{JobsError, LinkedInCredential, LinkedInOauthService, http};
use mockito::{Matcher, Server};

const TOKEN_PATH: &str = "/oauth/v2/accessToken";

fn form_field(key: &str, value: &str) -> Matcher {
    Matcher::UrlEncoded(key.to_string(), value.to_string())
}

/// A form body with exactly `n` key/value pairs.
fn field_count(n: usize) -> Matcher {
    Matcher::Regex(format!("^[^&]+(&[^&]+){{{}}}$", n - 1))
}

#[tokio::test]
async fn code_exchange_posts_five_form_fields_and_reads_both_tokens() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", TOKEN_PATH)
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            form_field("grant_type", "authorization_code"),
            form_field("code", "auth-code-1"),
            form_field("redirect_uri", "http://localhost:8080"),
            form_field("client_id", "client-abc"),
            form_field("client_secret", "secret-xyz"),
            field_count(5),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"access_token":"at-1","token_type":"Bearer","expires_in":5184000,
                "refresh_token":"rt-1","refresh_token_expires_in":31536000}"#,
        )
        .create_async()
        .await;

    let cfg = mock_config(&server.url());
    let oauth = LinkedInOauthService::new(&cfg, http::build_client(&cfg).unwrap()).unwrap();
    let cred = oauth.exchange_code("auth-code-1").await.expect("exchange");

    assert_eq!(cred.access_token.secret(), "at-1");
    assert_eq!(cred.refresh_token.secret(), "rt-1");
    assert_eq!(cred.bearer(), "at-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn code_exchange_without_refresh_token_fails() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", TOKEN_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"at-1","token_type":"Bearer","expires_in":60}"#)
        .create_async()
        .await;

    let cfg = mock_config(&server.url());
    let oauth = LinkedInOauthService::new(&cfg, http::build_client(&cfg).unwrap()).unwrap();
    let err = oauth.exchange_code("auth-code-1").await.unwrap_err();
    assert!(matches!(err, JobsError::MissingRefreshToken), "{err:?}");
}

#[tokio::test]
async fn token_endpoint_error_surfaces_as_server_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", TOKEN_PATH)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error":"invalid_grant","error_description":"authorization code expired"}"#,
        )
        .create_async()
        .await;

    let cfg = mock_config(&server.url());
    let oauth = LinkedInOauthService::new(&cfg, http::build_client(&cfg).unwrap()).unwrap();
    match oauth.exchange_code("stale").await {
        Err(JobsError::Oauth2Server { error }) => {
            assert!(error.contains("invalid_grant"), "{error}");
        }
        other => panic!("expected Oauth2Server, got {other:?}"),
    }
}

#[tokio::test]
async fn refresh_posts_refresh_grant() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", TOKEN_PATH)
        .match_body(Matcher::AllOf(vec![
            form_field("grant_type", "refresh_token"),
            form_field("refresh_token", "rt-old"),
            form_field("client_id", "client-abc"),
            form_field("client_secret", "secret-xyz"),
            field_count(4),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"access_token":"at-new","token_type":"Bearer","expires_in":60,"refresh_token":"rt-new"}"#,
        )
        .create_async()
        .await;

    let cfg = mock_config(&server.url());
    let oauth = LinkedInOauthService::new(&cfg, http::build_client(&cfg).unwrap()).unwrap();
    let refreshed = oauth
        .refresh(&LinkedInCredential::new("at-old", "rt-old"))
        .await
        .expect("refresh");

    assert_eq!(refreshed.access_token.secret(), "at-new");
    assert_eq!(refreshed.refresh_token.secret(), "rt-new");
    mock.assert_async().await;
}

#[tokio::test]
async fn authorize_url_carries_code_request_parameters() {
    let cfg = mock_config("http://127.0.0.1:9");
    let oauth = LinkedInOauthService::new(&cfg, http::build_client(&cfg).unwrap()).unwrap();
    let (url, state) = oauth.authorize_url();

    assert_eq!(url.path(), "/oauth/v2/authorization");
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let get = |k: &str| {
        pairs
            .iter()
            .find(|(key, _)| key == k)
            .map(|(_, v)| v.as_str())
    };
    assert_eq!(get("response_type"), Some("code"));
    assert_eq!(get("client_id"), Some("client-abc"));
    assert_eq!(get("redirect_uri"), Some("http://localhost:8080"));
    assert_eq!(get("state"), Some("fixed-state"));
    assert_eq!(state.secret(), "fixed-state");
}

#[tokio::test]
async fn authenticate_uses_prompted_code() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", TOKEN_PATH)
        .match_body(form_field("code", "typed-code"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"access_token":"at-2","token_type":"Bearer","expires_in":60,"refresh_token":"rt-2"}"#,
        )
        .create_async()
        .await;

    let cfg = mock_config(&server.url());
    let oauth = LinkedInOauthService::new(&cfg, http::build_client(&cfg).unwrap()).unwrap();
    let cred = oauth
        .authenticate(&mut StaticCode("  typed-code\n".to_string()))
        .await
        .expect("authenticate");

    assert_eq!(cred.access_token.secret(), "at-2");
    mock.assert_async().await;
}

#[tokio::test]
async fn code_exchange_accepts_linkedin_body_without_token_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", TOKEN_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"access_token":"at-1","expires_in":5184000,"refresh_token":"rt-1",
                "refresh_token_expires_in":31536000,"scope":"r_liteprofile"}"#,
        )
        .create_async()
        .await;

    let cfg = mock_config(&server.url());
    let oauth = LinkedInOauthService::new(&cfg, http::build_client(&cfg).unwrap()).unwrap();
    let cred = oauth.exchange_code("c").await.expect("exchange");

    assert_eq!(cred.access_token.secret(), "at-1");
    assert_eq!(cred.refresh_token.secret(), "rt-1");
    mock.assert_async().await;
}
