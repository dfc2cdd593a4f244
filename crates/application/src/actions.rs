//! 表单动作

use std::sync::Arc;

use tracing::info;
use url::form_urlencoded;

use crate::error::ApplicationResult;
use crate::revalidation::CacheRevalidator;

pub const ESTABLISHMENTS_PATH: &str = "/establishments";

/// 更新院校筛选条件
///
/// 使 `/establishments` 的缓存失效，并返回带新查询串的跳转地址。
pub struct UpdateFiltersAction {
    revalidator: Arc<dyn CacheRevalidator>,
}

impl UpdateFiltersAction {
    pub fn new(revalidator: Arc<dyn CacheRevalidator>) -> Self {
        Self { revalidator }
    }

    pub async fn execute(&self, search_params: &[(String, String)]) -> ApplicationResult<String> {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(search_params)
            .finish();

        self.revalidator.revalidate_path(ESTABLISHMENTS_PATH).await?;
        info!(params = search_params.len(), "establishment filters updated");

        if query.is_empty() {
            Ok(ESTABLISHMENTS_PATH.to_string())
        } else {
            Ok(format!("{}?{}", ESTABLISHMENTS_PATH, query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRevalidator {
        paths: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CacheRevalidator for RecordingRevalidator {
        async fn revalidate_path(&self, path: &str) -> ApplicationResult<()> {
            self.paths.lock().unwrap().push(path.to_string());
            Ok(())
        }
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn empty_params_redirect_to_listing() {
        let revalidator = Arc::new(RecordingRevalidator::default());
        let action = UpdateFiltersAction::new(revalidator.clone());

        let location = action.execute(&[]).await.unwrap();

        assert_eq!(location, "/establishments");
        assert_eq!(*revalidator.paths.lock().unwrap(), vec!["/establishments"]);
    }

    #[tokio::test]
    async fn params_are_kept_in_order() {
        let action = UpdateFiltersAction::new(Arc::new(RecordingRevalidator::default()));

        let location = action.execute(&pairs(&[("a", "1"), ("b", "2")])).await.unwrap();

        assert_eq!(location, "/establishments?a=1&b=2");
    }

    #[tokio::test]
    async fn repeated_keys_and_spaces_are_encoded() {
        let action = UpdateFiltersAction::new(Arc::new(RecordingRevalidator::default()));

        let location = action
            .execute(&pairs(&[
                ("city_ids", "1"),
                ("city_ids", "2"),
                ("name_contains", "école normale"),
            ]))
            .await
            .unwrap();

        assert_eq!(
            location,
            "/establishments?city_ids=1&city_ids=2&name_contains=%C3%A9cole+normale"
        );
    }
}
