//! 学科领域实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{DomainError, DomainResult};

/// 学科领域
///
/// `id`、`name`、`created_at`、`updated_at` 必填，`name` 不能为空。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Domain {
    pub id: i64,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, alias = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    #[serde(default, alias = "updatedBy", skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<i64>,
}

impl Domain {
    /// 按结构约束解析一条记录
    pub fn parse(value: serde_json::Value) -> DomainResult<Self> {
        let domain: Domain = serde_json::from_value(value)
            .map_err(|e| DomainError::validation_error("domain", e.to_string()))?;
        domain.validate()?;
        Ok(domain)
    }
}

/// 新建学科领域的请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DomainInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DomainUpdate {
    #[validate(length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
