use async_trait::async_trait;

use crate::error::ApplicationResult;

/// 按路径使缓存失效
#[async_trait]
pub trait CacheRevalidator: Send + Sync {
    async fn revalidate_path(&self, path: &str) -> ApplicationResult<()>;
}
