use async_trait::async_trait;
use domain::{
    AuthRepository, AuthTokens, Credentials, DomainResult, MessageResponse, OtpCredentials,
    OtpRequest, OtpRequested, User,
};
use tracing::info;

use crate::api_client::ApiClient;

const SIGNED_OUT_MESSAGE: &str = "Successfully logged out";

pub struct HttpAuthRepository {
    client: ApiClient,
}

impl HttpAuthRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn refresh_query(refresh_token: String) -> Vec<(String, String)> {
    vec![("refresh_token".to_string(), refresh_token)]
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    async fn sign_up(&self, credentials: Credentials) -> DomainResult<User> {
        self.client.post("auth/signup", None, &[], &credentials).await
    }

    async fn sign_in(&self, credentials: Credentials) -> DomainResult<AuthTokens> {
        self.client.post("auth/login", None, &[], &credentials).await
    }

    async fn request_otp(&self, email: String) -> DomainResult<OtpRequested> {
        self.client
            .post("auth/otp/request", None, &[], &OtpRequest { email })
            .await
    }

    async fn sign_in_otp(&self, credentials: OtpCredentials) -> DomainResult<AuthTokens> {
        self.client
            .post("auth/otp/login", None, &[], &credentials)
            .await
    }

    async fn refresh(&self, refresh_token: String) -> DomainResult<AuthTokens> {
        let tokens: Option<AuthTokens> = self
            .client
            .post_empty("auth/refresh", None, &refresh_query(refresh_token))
            .await?;
        tokens.ok_or_else(|| domain::DomainError::decode("refresh returned no tokens"))
    }

    async fn sign_out(&self, access_token: String, refresh_token: String) -> DomainResult<MessageResponse> {
        let message: Option<MessageResponse> = self
            .client
            .post_empty("auth/logout", Some(&access_token), &refresh_query(refresh_token))
            .await?;
        info!("upstream session revoked");
        Ok(message.unwrap_or_else(|| MessageResponse {
            message: SIGNED_OUT_MESSAGE.to_string(),
        }))
    }

    async fn me(&self, access_token: String) -> DomainResult<User> {
        self.client.get("auth/me", Some(&access_token), &[]).await
    }
}
