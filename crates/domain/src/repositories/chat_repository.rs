//! 聊天Repository接口定义

use async_trait::async_trait;

use crate::entities::chat::{ChatHistoryResponse, ChatInput, ChatResponse};
use crate::errors::DomainResult;

#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// 发送一条消息给聊天助手
    async fn send_message(&self, token: String, input: ChatInput) -> DomainResult<ChatResponse>;

    /// 获取调用方的聊天历史
    async fn get_history(&self, token: String) -> DomainResult<ChatHistoryResponse>;
}
