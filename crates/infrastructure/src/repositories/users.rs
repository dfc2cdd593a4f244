use async_trait::async_trait;
use domain::{DomainError, DomainResult, User, UsersRepository};
use serde_json::json;

use crate::api_client::ApiClient;

pub struct HttpUsersRepository {
    client: ApiClient,
}

impl HttpUsersRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

// 上游对未知用户返回 400 或 404
fn user_not_found(error: DomainError) -> DomainError {
    match error {
        DomainError::BadRequest { .. } | DomainError::NotFound { .. } => {
            DomainError::not_found("Utilisateur")
        }
        other => other,
    }
}

#[async_trait]
impl UsersRepository for HttpUsersRepository {
    async fn get_user_by_email(&self, token: String, email: String) -> DomainResult<User> {
        self.client
            .get_with_body("user", Some(&token), &json!({ "email": email }))
            .await
            .map_err(user_not_found)
    }

    async fn get_user_by_id(&self, token: String, id: i64) -> DomainResult<User> {
        self.client
            .get(&format!("users/{id}"), Some(&token), &[])
            .await
            .map_err(user_not_found)
    }
}
