//! 上游 REST API 客户端
//!
//! 只负责传输细节：拼接地址、附带 Bearer 令牌、超时、HTTP 状态到领域错误的映射以及 JSON 解析。

use std::time::Duration;

use domain::{ApiErrorResponse, DomainError, DomainResult};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// `base_url` 需以 `/` 结尾，相对路径才会追加在版本号之后
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> DomainResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| DomainError::validation_error("path", e.to_string()))
    }

    fn request(
        &self,
        builder: RequestBuilder,
        token: Option<&str>,
        query: &[(String, String)],
    ) -> RequestBuilder {
        let builder = if query.is_empty() {
            builder
        } else {
            builder.query(query)
        };
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        query: &[(String, String)],
    ) -> DomainResult<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET upstream");
        let builder = self.request(self.client.get(url), token, query);
        require_body(send(builder).await?)
    }

    pub async fn post<B, T>(
        &self,
        path: &str,
        token: Option<&str>,
        query: &[(String, String)],
        body: &B,
    ) -> DomainResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "POST upstream");
        let builder = self.request(self.client.post(url).json(body), token, query);
        require_body(send(builder).await?)
    }

    /// 带 JSON 请求体的 GET，用于按邮箱查用户
    pub async fn get_with_body<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> DomainResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "GET upstream");
        let builder = self.request(self.client.get(url).json(body), token, &[]);
        require_body(send(builder).await?)
    }

    /// 成功时忽略响应体，只检查状态码
    pub async fn post_no_content<B>(&self, path: &str, token: Option<&str>, body: &B) -> DomainResult<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "POST upstream");
        let builder = self.request(self.client.post(url).json(body), token, &[]);
        send_discarding_body(builder).await
    }

    pub async fn put<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> DomainResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "PUT upstream");
        let builder = self.request(self.client.put(url).json(body), token, &[]);
        require_body(send(builder).await?)
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> DomainResult<()> {
        let url = self.endpoint(path)?;
        debug!(%url, "DELETE upstream");
        let builder = self.request(self.client.delete(url), token, &[]);
        send_discarding_body(builder).await
    }

    /// 无请求体的 POST，上游可能返回 204
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        query: &[(String, String)],
    ) -> DomainResult<Option<T>> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST upstream");
        let builder = self.request(self.client.post(url), token, query);
        send(builder).await
    }
}

async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> DomainResult<Option<T>> {
    let response = builder.send().await.map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    handle_api_response(status, &body)
}

async fn send_discarding_body(builder: RequestBuilder) -> DomainResult<()> {
    let response = builder.send().await.map_err(map_transport_error)?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.bytes().await.map_err(map_transport_error)?;
    Err(map_status_error(status, &body))
}

fn require_body<T>(value: Option<T>) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::decode("upstream returned an empty body"))
}

fn map_transport_error(error: reqwest::Error) -> DomainError {
    warn!(error = %error, "upstream request failed");
    DomainError::transport(error.to_string())
}

/// 2xx 解析 JSON，204 或空响应体返回 `None`，其余状态映射为领域错误
pub fn handle_api_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> DomainResult<Option<T>> {
    if !status.is_success() {
        return Err(map_status_error(status, body));
    }
    if status == StatusCode::NO_CONTENT || body.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| DomainError::decode(format!("invalid upstream JSON payload: {e}")))
}

pub fn map_status_error(status: StatusCode, body: &[u8]) -> DomainError {
    let parsed: ApiErrorResponse = serde_json::from_slice(body).unwrap_or_default();
    let message = parsed
        .message
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("HTTP error: {}", status.as_u16()));
    if status.is_server_error() {
        warn!(status = status.as_u16(), %message, "upstream server error");
    }
    DomainError::from_status(status.as_u16(), message, parsed.details)
}
