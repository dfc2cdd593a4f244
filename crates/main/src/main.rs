//! 主应用程序入口
//!
//! 读取配置，组装上游客户端与应用容器，启动 Axum Web 服务。

use std::sync::Arc;

use application::ApplicationContainer;
use axum::http::{header, HeaderValue, Method};
use config::AppConfig;
use infrastructure::Infrastructure;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use web_api::{router, AppState, Views};

fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    if origins.iter().any(|origin| origin == "*") {
        return Ok(CorsLayer::permissive());
    }
    let origins = origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    // 会话依赖 Cookie，只有显式列出的来源才允许携带凭证
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    tracing::info!(upstream = %config.upstream.base_url(), "配置加载完成");

    let infra = Infrastructure::build(&config)?;
    let query_cache = infra.query_cache.clone();
    let container = ApplicationContainer::new(
        infra.repositories,
        infra.cookie_service,
        infra.query_cache,
    );
    let views = Views::new()?;

    let state = AppState::new(Arc::new(container), query_cache.clone(), Arc::new(views));
    let app = router(state)
        .layer(cors_layer(&config.server.cors_origins)?)
        .layer(TraceLayer::new_for_http());

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("服务启动在 http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %err, "无法监听退出信号");
            }
        })
        .await?;

    query_cache.dispose().await;
    tracing::info!("服务已停止");
    Ok(())
}
