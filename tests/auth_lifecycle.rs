//! Full-stack lifecycle test: login, issuance, refresh, and codec
//! validation wired together the way the service composes them.

use std::sync::Arc;

use serde_json::json;

use authgate_auth::{
    AuthMetrics, Authenticator, CredentialDecoder, MemoryUserDirectory, PasswordHasher,
    TokenDecoder, TokenEncoder, TokenGenerator, TokenIssuer,
};
use authgate_core::config::AppConfig;
use authgate_core::traits::MetricsSink;
use authgate_entity::{Credentials, UserIdentity};
use authgate_store::TokenStore;

struct TestService {
    authenticator: Authenticator,
    issuer: TokenIssuer,
    store: Arc<TokenStore>,
    metrics: Arc<AuthMetrics>,
    token_decoder: TokenDecoder,
    credential_decoder: CredentialDecoder,
    config: AppConfig,
}

impl TestService {
    async fn with_user(username: &str, password: &str) -> Self {
        let config = AppConfig::default();

        let hasher = PasswordHasher::new(config.auth.api_key.clone(), config.auth.client_id.clone());
        let directory = Arc::new(MemoryUserDirectory::new());
        directory
            .insert(UserIdentity {
                id: "1".to_string(),
                username: username.to_string(),
                password_digest: hasher.digest(password).unwrap(),
            })
            .await;

        let store = Arc::new(TokenStore::new(&config.token));
        let metrics = Arc::new(AuthMetrics::new());
        let issuer = TokenIssuer::new(
            Arc::clone(&store),
            TokenGenerator::new(config.auth.token_length_multiplier),
            Arc::clone(&metrics) as Arc<dyn MetricsSink>,
            &config.token,
        );

        Self {
            authenticator: Authenticator::new(directory, hasher),
            issuer,
            store,
            metrics,
            token_decoder: TokenDecoder::new(&config.auth),
            credential_decoder: CredentialDecoder::new(&config.auth),
            config,
        }
    }
}

#[tokio::test]
async fn test_login_issue_and_refresh_lifecycle() {
    let service = TestService::with_user("alice", "wonderland").await;

    // Login.
    let identity = service
        .authenticator
        .authenticate("alice", "wonderland")
        .await
        .unwrap();

    // Issue a token pair.
    let record = service.issuer.issue(&identity);
    assert!(service.store.token_exists(&record.access_token).is_some());

    // Refresh into a second live pair.
    let renewed = service.issuer.refresh(&record.refresh_token).unwrap();
    assert!(service.store.token_exists(&renewed.access_token).is_some());
    assert!(service.store.token_exists(&record.access_token).is_some());

    assert_eq!(service.metrics.snapshot().tokens_created, 2);
}

#[tokio::test]
async fn test_encrypted_credential_login() {
    let service = TestService::with_user("alice", "wonderland").await;

    // A peer encrypts credentials under api_key.client_id.
    let key = format!(
        "{}.{}",
        service.config.auth.api_key, service.config.auth.client_id
    );
    let blob = TokenEncoder::with_key(&key)
        .encode(&Credentials {
            username: "alice".to_string(),
            password: "wonderland".to_string(),
        })
        .unwrap();

    let creds = service.credential_decoder.decode(&blob).unwrap();
    let identity = service
        .authenticator
        .authenticate(&creds.username, &creds.password)
        .await
        .unwrap();
    assert_eq!(identity.username, "alice");
}

#[tokio::test]
async fn test_token_blob_validation() {
    let service = TestService::with_user("alice", "wonderland").await;

    let blob = TokenEncoder::new(&service.config.auth)
        .encode(&json!({ "token": service.config.auth.expected_claim }))
        .unwrap();

    let claim = service.token_decoder.decode(&blob).unwrap();
    assert_eq!(claim, service.config.auth.expected_claim);

    assert!(service.token_decoder.decode("garbage").is_err());
}
