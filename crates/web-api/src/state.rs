use std::sync::Arc;

use application::ApplicationContainer;
use infrastructure::QueryCache;

use crate::views::Views;

#[derive(Clone)]
pub struct AppState {
    pub container: Arc<ApplicationContainer>,
    pub query_cache: Arc<QueryCache>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(
        container: Arc<ApplicationContainer>,
        query_cache: Arc<QueryCache>,
        views: Arc<Views>,
    ) -> Self {
        Self {
            container,
            query_cache,
            views,
        }
    }
}
