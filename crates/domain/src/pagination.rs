//! 分页参数与分页结果

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

/// 分页参数（页码从 1 开始，每页 1-100 条）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub per_page: u32,
}

impl PaginationParams {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// 缺省值补齐为第 1 页、每页 10 条
    pub fn from_optional(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self::new(
            page.unwrap_or(DEFAULT_PAGE),
            per_page.unwrap_or(DEFAULT_PER_PAGE),
        )
    }

    /// 上游查询参数
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ]
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u32>,
}

impl<T> PaginatedResult<T> {
    pub fn empty(params: PaginationParams) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            page: params.page,
            per_page: params.per_page,
            total_pages: 0,
            next_page: None,
            previous_page: None,
        }
    }

    /// 转换条目类型，分页信息保持不变
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
            next_page: self.next_page,
            previous_page: self.previous_page,
        }
    }

    /// 逐条转换，遇到第一个错误即返回
    pub fn try_map_items<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<PaginatedResult<U>, E> {
        let items = self.items.into_iter().map(f).collect::<Result<Vec<_>, E>>()?;
        Ok(PaginatedResult {
            items,
            total_items: self.total_items,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
            next_page: self.next_page,
            previous_page: self.previous_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_are_clamped() {
        assert_eq!(PaginationParams::new(0, 0), PaginationParams::new(1, 1));
        assert_eq!(PaginationParams::new(3, 500).per_page, MAX_PER_PAGE);
        assert_eq!(
            PaginationParams::from_optional(None, None),
            PaginationParams {
                page: 1,
                per_page: 10
            }
        );
    }

    #[test]
    fn upstream_page_decodes_without_optional_links() {
        let page: PaginatedResult<String> = serde_json::from_value(serde_json::json!({
            "items": ["a", "b"],
            "total_items": 2,
            "page": 1,
            "per_page": 10,
            "total_pages": 1
        }))
        .unwrap();

        assert_eq!(page.items, vec!["a", "b"]);
        assert_eq!(page.next_page, None);

        let lengths = page.map_items(|item| item.len());
        assert_eq!(lengths.items, vec![1, 1]);
        assert_eq!(lengths.total_items, 2);
    }

    #[test]
    fn try_map_items_stops_at_first_error() {
        let page = PaginatedResult {
            items: vec!["1", "x", "3"],
            total_items: 3,
            page: 1,
            per_page: 10,
            total_pages: 1,
            next_page: None,
            previous_page: None,
        };

        assert!(page.clone().try_map_items(|item| item.parse::<u32>()).is_err());

        let ok = PaginatedResult {
            items: vec!["1", "3"],
            ..page
        };
        assert_eq!(ok.try_map_items(|item| item.parse::<u32>()).unwrap().items, vec![1, 3]);
    }
}
