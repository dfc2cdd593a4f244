//! 查询缓存
//!
//! 按 `(path, key)` 缓存 JSON 响应，条目在 TTL 之后失效，`revalidate_path` 丢弃一个路径下的全部条目。
//! 每个路径带一个代数，失效时加一；写入时代数已变的结果直接丢弃，
//! 这样失效之前发出、之后才返回的上游请求不会把旧数据写回缓存。
//! 由 `main` 显式创建，关闭时调用 `dispose`。

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use application::{ApplicationResult, CacheRevalidator};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};

struct CacheEntry {
    value: Value,
    inserted_at: Instant,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<String, HashMap<String, CacheEntry>>,
    generations: HashMap<String, u64>,
}

pub struct QueryCache {
    state: RwLock<CacheState>,
    ttl: Duration,
    max_entries_per_path: usize,
    disposed: AtomicBool,
}

impl QueryCache {
    pub fn new(ttl: Duration, max_entries_per_path: usize) -> Self {
        Self {
            state: RwLock::new(CacheState::default()),
            ttl,
            max_entries_per_path: max_entries_per_path.max(1),
            disposed: AtomicBool::new(false),
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    pub async fn get(&self, path: &str, key: &str) -> Option<Value> {
        if self.is_disposed() {
            return None;
        }
        let state = self.state.read().await;
        let entry = state.entries.get(path)?.get(key)?;
        if entry.inserted_at.elapsed() >= self.ttl {
            return None;
        }
        debug!(path, "query cache hit");
        Some(entry.value.clone())
    }

    /// 路径当前的代数，在发起上游请求之前读取
    pub async fn generation(&self, path: &str) -> u64 {
        self.state
            .read()
            .await
            .generations
            .get(path)
            .copied()
            .unwrap_or(0)
    }

    /// 写入一条结果；`generation` 与路径当前代数不一致时不写入，返回 `false`
    pub async fn insert(&self, path: &str, key: &str, value: Value, generation: u64) -> bool {
        if self.is_disposed() {
            return false;
        }
        let mut state = self.state.write().await;
        let current = state.generations.get(path).copied().unwrap_or(0);
        if current != generation {
            debug!(path, generation, current, "stale query result dropped");
            return false;
        }
        let bucket = state.entries.entry(path.to_string()).or_default();

        if bucket.len() >= self.max_entries_per_path && !bucket.contains_key(key) {
            let ttl = self.ttl;
            bucket.retain(|_, entry| entry.inserted_at.elapsed() < ttl);
            if bucket.len() >= self.max_entries_per_path {
                let oldest = bucket
                    .iter()
                    .min_by_key(|(_, entry)| entry.inserted_at)
                    .map(|(key, _)| key.clone());
                if let Some(oldest) = oldest {
                    bucket.remove(&oldest);
                }
            }
        }

        bucket.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
        true
    }

    /// 丢弃一个路径下的全部条目并推进代数，返回被丢弃的数量
    pub async fn invalidate_path(&self, path: &str) -> usize {
        let mut state = self.state.write().await;
        *state.generations.entry(path.to_string()).or_default() += 1;
        let removed = state
            .entries
            .remove(path)
            .map(|bucket| bucket.len())
            .unwrap_or(0);
        debug!(path, removed, "query cache path invalidated");
        removed
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.entries.values().map(HashMap::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// 清空并停止缓存，之后的读写都不再生效
    pub async fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
        let mut state = self.state.write().await;
        let count: usize = state.entries.values().map(HashMap::len).sum();
        state.entries.clear();
        info!(entries = count, "query cache disposed");
    }
}

#[async_trait]
impl CacheRevalidator for QueryCache {
    async fn revalidate_path(&self, path: &str) -> ApplicationResult<()> {
        self.invalidate_path(path).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn put(cache: &QueryCache, path: &str, key: &str, value: Value) -> bool {
        let generation = cache.generation(path).await;
        cache.insert(path, key, value, generation).await
    }

    #[tokio::test]
    async fn stores_and_reads_entries() {
        let cache = QueryCache::new(Duration::from_secs(60), 10);

        put(&cache, "/establishments", "page=1", json!({ "items": [] })).await;

        assert_eq!(
            cache.get("/establishments", "page=1").await,
            Some(json!({ "items": [] }))
        );
        assert_eq!(cache.get("/establishments", "page=2").await, None);
        assert_eq!(cache.get("/levels", "page=1").await, None);
    }

    #[tokio::test]
    async fn revalidation_drops_only_that_path() {
        let cache = QueryCache::new(Duration::from_secs(60), 10);
        put(&cache, "/establishments", "a", json!(1)).await;
        put(&cache, "/establishments", "b", json!(2)).await;
        put(&cache, "/levels", "a", json!(3)).await;

        cache.revalidate_path("/establishments").await.unwrap();

        assert_eq!(cache.get("/establishments", "a").await, None);
        assert_eq!(cache.get("/establishments", "b").await, None);
        assert_eq!(cache.get("/levels", "a").await, Some(json!(3)));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let cache = QueryCache::new(Duration::from_millis(20), 10);
        put(&cache, "/establishments", "a", json!(1)).await;

        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(cache.get("/establishments", "a").await, None);
    }

    #[tokio::test]
    async fn oldest_entry_is_evicted_when_full() {
        let cache = QueryCache::new(Duration::from_secs(60), 2);
        put(&cache, "/establishments", "a", json!(1)).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        put(&cache, "/establishments", "b", json!(2)).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        put(&cache, "/establishments", "c", json!(3)).await;

        assert_eq!(cache.get("/establishments", "a").await, None);
        assert_eq!(cache.get("/establishments", "c").await, Some(json!(3)));
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn disposed_cache_serves_nothing() {
        let cache = QueryCache::new(Duration::from_secs(60), 10);
        put(&cache, "/establishments", "a", json!(1)).await;

        cache.dispose().await;
        put(&cache, "/establishments", "b", json!(2)).await;

        assert!(cache.is_disposed());
        assert!(cache.is_empty().await);
        assert_eq!(cache.get("/establishments", "b").await, None);
    }

    #[tokio::test]
    async fn result_fetched_before_invalidation_is_not_stored() {
        let cache = QueryCache::new(Duration::from_secs(60), 10);
        let before = cache.generation("/establishments").await;

        // 上游请求进行中时筛选条件被更新
        cache.invalidate_path("/establishments").await;
        let stored = cache.insert("/establishments", "a", json!("stale"), before).await;

        assert!(!stored);
        assert_eq!(cache.get("/establishments", "a").await, None);
        assert_eq!(cache.generation("/establishments").await, before + 1);

        let fresh = cache.generation("/establishments").await;
        assert!(cache.insert("/establishments", "a", json!("fresh"), fresh).await);
        assert_eq!(cache.get("/establishments", "a").await, Some(json!("fresh")));
    }

    #[tokio::test]
    async fn invalidation_leaves_other_paths_current() {
        let cache = QueryCache::new(Duration::from_secs(60), 10);
        let levels = cache.generation("/levels").await;

        cache.invalidate_path("/establishments").await;

        assert!(cache.insert("/levels", "a", json!(1), levels).await);
        assert_eq!(cache.get("/levels", "a").await, Some(json!(1)));
    }
}
