use async_trait::async_trait;
use domain::{ChatHistoryResponse, ChatInput, ChatRepository, ChatResponse, DomainResult};

use crate::api_client::ApiClient;

pub struct HttpChatRepository {
    client: ApiClient,
}

impl HttpChatRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatRepository for HttpChatRepository {
    async fn send_message(&self, token: String, input: ChatInput) -> DomainResult<ChatResponse> {
        self.client.post("chat", Some(&token), &[], &input).await
    }

    async fn get_history(&self, token: String) -> DomainResult<ChatHistoryResponse> {
        self.client.get("chat/history", Some(&token), &[]).await
    }
}
