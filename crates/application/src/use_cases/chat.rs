//! 聊天助手用例

use std::sync::Arc;

use async_trait::async_trait;
use domain::{ChatHistoryResponse, ChatInput, ChatRepository, ChatResponse};

use crate::error::ApplicationResult;
use crate::use_case::{Authorized, UseCase};

pub struct SendChatMessageUseCase {
    chat_repository: Arc<dyn ChatRepository>,
}

impl SendChatMessageUseCase {
    pub fn new(chat_repository: Arc<dyn ChatRepository>) -> Self {
        Self { chat_repository }
    }
}

#[async_trait]
impl UseCase for SendChatMessageUseCase {
    type Input = Authorized<ChatInput>;
    type Output = ChatResponse;

    async fn execute(&self, input: Authorized<ChatInput>) -> ApplicationResult<ChatResponse> {
        Ok(self
            .chat_repository
            .send_message(input.token, input.payload)
            .await?)
    }
}

pub struct GetChatHistoryUseCase {
    chat_repository: Arc<dyn ChatRepository>,
}

impl GetChatHistoryUseCase {
    pub fn new(chat_repository: Arc<dyn ChatRepository>) -> Self {
        Self { chat_repository }
    }
}

#[async_trait]
impl UseCase for GetChatHistoryUseCase {
    type Input = Authorized<()>;
    type Output = ChatHistoryResponse;

    async fn execute(&self, input: Authorized<()>) -> ApplicationResult<ChatHistoryResponse> {
        Ok(self.chat_repository.get_history(input.token).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ChatResponseData, MockChatRepository};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn send_message_returns_assistant_reply() {
        let input = ChatInput {
            message: "Quelles écoles à Antananarivo ?".to_string(),
        };
        let reply = ChatResponse {
            user_id: 3,
            response: ChatResponseData {
                assistant_message: "Voici la liste".to_string(),
                ..Default::default()
            },
            history: vec!["Quelles écoles à Antananarivo ?".to_string()],
        };

        let mut repo = MockChatRepository::new();
        let expected = reply.clone();
        repo.expect_send_message()
            .with(eq("token".to_string()), eq(input.clone()))
            .times(1)
            .returning(move |_, _| Ok(expected.clone()));

        let result = SendChatMessageUseCase::new(Arc::new(repo))
            .execute(Authorized::new("token", input))
            .await
            .unwrap();

        assert_eq!(result, reply);
    }

    #[tokio::test]
    async fn history_is_scoped_by_token() {
        let mut repo = MockChatRepository::new();
        repo.expect_get_history()
            .with(eq("token".to_string()))
            .times(1)
            .returning(|_| {
                Ok(ChatHistoryResponse {
                    user_id: 3,
                    history: vec!["hello".to_string()],
                })
            });

        let history = GetChatHistoryUseCase::new(Arc::new(repo))
            .execute(Authorized::new("token", ()))
            .await
            .unwrap();

        assert_eq!(history.history, vec!["hello"]);
    }
}
