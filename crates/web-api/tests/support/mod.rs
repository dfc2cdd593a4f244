#![allow(dead_code)]

use std::sync::Arc;

use application::{ApplicationContainer, FixedClock};
use chrono::DateTime;
use config::AppConfig;
use infrastructure::{Infrastructure, QueryCache};
use jsonwebtoken::{encode, EncodingKey, Header};
use reqwest::{redirect::Policy, Client, Response};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::oneshot};
use web_api::{router, AppState, Views};
use wiremock::MockServer;

/// 测试时钟的当前时间
pub const NOW: i64 = 1_700_000_000;

pub struct TestApp {
    pub base_url: String,
    pub upstream: MockServer,
    pub client: Client,
    pub query_cache: Arc<QueryCache>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// 启动一个指向 wiremock 上游的完整应用
pub async fn spawn_app() -> TestApp {
    let upstream = MockServer::start().await;

    let mut config = AppConfig::default();
    config.upstream.prefix_url = format!("{}/api", upstream.uri());
    config.upstream.timeout_seconds = 5;
    config.session.secure_cookies = false;

    let clock = Arc::new(FixedClock(DateTime::from_timestamp(NOW, 0).unwrap()));
    let infra = Infrastructure::build_with_clock(&config, clock).expect("infrastructure");
    let query_cache = infra.query_cache.clone();
    let container = ApplicationContainer::new(
        infra.repositories,
        infra.cookie_service,
        infra.query_cache,
    );
    let state = AppState::new(
        Arc::new(container),
        query_cache.clone(),
        Arc::new(Views::new().expect("views")),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let app = router(state);

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .ok();
    });

    let client = Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("client");

    TestApp {
        base_url: format!("http://{}", addr),
        upstream,
        client,
        query_cache,
        shutdown: Some(shutdown_tx),
    }
}

/// 上游签发的 JWT，签名密钥对本服务不可见
pub fn jwt(expires_in: i64, kind: &str) -> String {
    encode(
        &Header::default(),
        &json!({ "exp": NOW + expires_in, "type": kind, "user_id": 1 }),
        &EncodingKey::from_secret(b"upstream-secret"),
    )
    .expect("jwt")
}

pub fn user_json() -> Value {
    json!({ "id": 1, "email": "ada@example.com", "active": true, "is_admin": false })
}

pub fn tokens_json(access_token: &str, refresh_token: &str) -> Value {
    json!({
        "access_token": access_token,
        "refresh_token": refresh_token,
        "token_type": "bearer",
        "user": user_json()
    })
}

pub fn page_json(items: Value) -> Value {
    let total = items.as_array().map(Vec::len).unwrap_or(0);
    json!({
        "items": items,
        "total_items": total,
        "page": 1,
        "per_page": 10,
        "total_pages": 1
    })
}

pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect()
}

pub fn find_cookie<'a>(cookies: &'a [String], name: &str) -> Option<&'a String> {
    let prefix = format!("{}=", name);
    cookies.iter().find(|cookie| cookie.starts_with(&prefix))
}
