//! 学历层级实体

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::audit::AuditInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

/// 新建层级的请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LevelInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
}

/// 部分更新，未给出的字段不发往上游
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LevelUpdate {
    #[validate(length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_update_only_sends_given_fields() {
        let update = LevelUpdate {
            acronym: Some("M".to_string()),
            ..LevelUpdate::default()
        };

        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "acronym": "M" }));
        assert!(update.validate().is_ok());
    }

    #[test]
    fn blank_names_are_rejected() {
        let input = LevelInput { name: String::new(), acronym: None };
        let update = LevelUpdate { name: Some(String::new()), acronym: None };

        assert!(input.validate().is_err());
        assert!(update.validate().is_err());
    }
}
