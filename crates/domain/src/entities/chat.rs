//! 聊天助手实体
//!
//! 上游响应的解码是宽松的：缺失字段取默认值，`userId` 与 `user_id` 都接受。

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ChatInput {
    #[validate(length(min = 1))]
    pub message: String,
}

/// 聊天回复中引用的培训项目
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatFormation {
    pub title: String,
    pub level: String,
    pub domain_mention: String,
    pub duration_months: Option<u32>,
    pub authorization_status: String,
}

/// 聊天回复中找到的院校
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoundEstablishment {
    pub establishment_name: String,
    pub establishment_acronym: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub sector: String,
    pub address: String,
    pub formations: Vec<ChatFormation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatResponseData {
    pub assistant_message: String,
    #[serde(deserialize_with = "objects_only")]
    pub found_data: Vec<FoundEstablishment>,
    pub clarification_question: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatResponse {
    #[serde(alias = "userId")]
    pub user_id: i64,
    pub response: ChatResponseData,
    #[serde(deserialize_with = "strings_only")]
    pub history: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatHistoryResponse {
    #[serde(alias = "userId")]
    pub user_id: i64,
    #[serde(deserialize_with = "strings_only")]
    pub history: Vec<String>,
}

// 非字符串的历史条目直接丢弃
fn strings_only<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(text) => Some(text),
            _ => None,
        })
        .collect())
}

fn objects_only<'de, D>(deserializer: D) -> Result<Vec<FoundEstablishment>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .filter(serde_json::Value::is_object)
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_response_is_lenient() {
        let response: ChatResponse = serde_json::from_value(json!({
            "userId": 7,
            "response": {
                "assistant_message": "Voici",
                "found_data": [
                    { "establishment_name": "ENI", "type": "public" },
                    "noise"
                ]
            },
            "history": ["hello", 3, null, "world"]
        }))
        .unwrap();

        assert_eq!(response.user_id, 7);
        assert_eq!(response.response.found_data.len(), 1);
        assert_eq!(response.response.found_data[0].kind, "public");
        assert!(response.response.found_data[0].formations.is_empty());
        assert_eq!(response.response.clarification_question, None);
        assert_eq!(response.history, vec!["hello", "world"]);
    }

    #[test]
    fn empty_payload_uses_defaults() {
        let history: ChatHistoryResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(history, ChatHistoryResponse::default());

        let history: ChatHistoryResponse =
            serde_json::from_value(json!({ "user_id": 2, "history": null })).unwrap();
        assert_eq!(history.user_id, 2);
        assert!(history.history.is_empty());
    }
}
