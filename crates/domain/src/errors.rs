//! 领域模型错误定义
//!
//! 定义了系统中所有可能的错误类型，上游 API 的错误响应按 HTTP 状态码映射到这里。

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// 上游返回的单个字段错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: String,
}

/// 上游错误响应体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Vec<ApiErrorDetail>,
}

/// 409 时使用的固定提示，上游的原始消息不对外暴露
pub const CONFLICT_MESSAGE: &str = "an entity with this information already exists";

/// 领域模型错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 凭证或令牌被拒绝（上游 401）
    #[error("认证失败: {message}")]
    Unauthorized {
        message: String,
        details: Vec<ApiErrorDetail>,
    },

    /// 调用方未登录
    #[error("未登录: {message}")]
    Unauthenticated { message: String },

    /// 权限不足（上游 403）
    #[error("权限不足: {message}")]
    Forbidden {
        message: String,
        details: Vec<ApiErrorDetail>,
    },

    /// 资源不存在（上游 404）
    #[error("资源不存在: {message}")]
    NotFound {
        message: String,
        details: Vec<ApiErrorDetail>,
    },

    /// 请求无效（上游 400）
    #[error("请求无效: {message}")]
    BadRequest {
        message: String,
        details: Vec<ApiErrorDetail>,
    },

    /// 资源冲突（上游 409）
    #[error("资源冲突: {message}")]
    Conflict {
        message: String,
        details: Vec<ApiErrorDetail>,
    },

    /// 实体无法处理（上游 422）
    #[error("无法处理的实体: {message}")]
    Unprocessable {
        message: String,
        details: Vec<ApiErrorDetail>,
    },

    /// 本地数据校验失败
    #[error("验证失败: {field}: {message}")]
    ValidationError { field: String, message: String },

    /// 其他上游错误
    #[error("上游 API 错误 ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        details: Vec<ApiErrorDetail>,
    },

    /// 无法连接上游
    #[error("上游连接失败: {message}")]
    Transport { message: String },

    /// 上游响应无法解析
    #[error("响应解析失败: {message}")]
    Decode { message: String },
}

impl DomainError {
    /// 创建未登录错误
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    /// 创建资源不存在错误
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// 创建验证错误
    pub fn validation_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// 按上游 HTTP 状态码创建错误
    pub fn from_status(status: u16, message: impl Into<String>, details: Vec<ApiErrorDetail>) -> Self {
        let message = message.into();
        match status {
            400 => Self::BadRequest { message, details },
            401 => Self::Unauthorized { message, details },
            403 => Self::Forbidden { message, details },
            404 => Self::NotFound { message, details },
            409 => Self::Conflict {
                message: CONFLICT_MESSAGE.to_string(),
                details,
            },
            422 => Self::Unprocessable { message, details },
            _ => Self::Api {
                status,
                message,
                details,
            },
        }
    }

    /// 附带的字段错误
    pub fn details(&self) -> &[ApiErrorDetail] {
        match self {
            Self::Unauthorized { details, .. }
            | Self::Forbidden { details, .. }
            | Self::NotFound { details, .. }
            | Self::BadRequest { details, .. }
            | Self::Conflict { details, .. }
            | Self::Unprocessable { details, .. }
            | Self::Api { details, .. } => details,
            _ => &[],
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let field = errors
            .errors()
            .keys()
            .next()
            .map(|key| key.to_string())
            .unwrap_or_else(|| "input".to_string());
        Self::ValidationError {
            field,
            message: errors.to_string(),
        }
    }
}

/// 领域模型结果类型
pub type DomainResult<T> = Result<T, DomainError>;
