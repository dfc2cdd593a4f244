//! 列表筛选条件
//!
//! 筛选条件序列化为上游查询参数：空值丢弃，列表值重复同一个键。

use serde::{Deserialize, Serialize};

use crate::pagination::PaginationParams;

/// 可转换为上游查询参数的筛选条件
pub trait QueryFilter {
    fn query_pairs(&self) -> Vec<(String, String)>;
}

fn push_text(pairs: &mut Vec<(String, String)>, key: &str, value: &Option<String>) {
    if let Some(value) = value.as_deref().map(str::trim) {
        if !value.is_empty() {
            pairs.push((key.to_string(), value.to_string()));
        }
    }
}

fn push_id(pairs: &mut Vec<(String, String)>, key: &str, value: Option<i64>) {
    if let Some(value) = value {
        pairs.push((key.to_string(), value.to_string()));
    }
}

fn push_list<T: ToString>(pairs: &mut Vec<(String, String)>, key: &str, values: &[T]) {
    for value in values {
        let value = value.to_string();
        if !value.trim().is_empty() {
            pairs.push((key.to_string(), value));
        }
    }
}

/// 院校筛选条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstablishmentFilter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_contains: Option<String>,
    #[serde(default)]
    pub name_starts_with: Option<String>,
    #[serde(default)]
    pub name_ends_with: Option<String>,
    #[serde(default)]
    pub acronym: Option<String>,
    #[serde(default)]
    pub acronym_contains: Option<String>,
    #[serde(default)]
    pub acronym_starts_with: Option<String>,
    #[serde(default)]
    pub acronym_ends_with: Option<String>,
    #[serde(default)]
    pub city_ids: Vec<i64>,
    #[serde(default)]
    pub establishment_type_ids: Vec<i64>,
    #[serde(default)]
    pub level_ids: Vec<i64>,
    #[serde(default)]
    pub domain_ids: Vec<i64>,
    #[serde(default)]
    pub mention_ids: Vec<i64>,
    #[serde(default)]
    pub legal_statuses: Vec<String>,
}

impl QueryFilter for EstablishmentFilter {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "name", &self.name);
        push_text(&mut pairs, "name_contains", &self.name_contains);
        push_text(&mut pairs, "name_starts_with", &self.name_starts_with);
        push_text(&mut pairs, "name_ends_with", &self.name_ends_with);
        push_text(&mut pairs, "acronym", &self.acronym);
        push_text(&mut pairs, "acronym_contains", &self.acronym_contains);
        push_text(&mut pairs, "acronym_starts_with", &self.acronym_starts_with);
        push_text(&mut pairs, "acronym_ends_with", &self.acronym_ends_with);
        push_list(&mut pairs, "city_ids", &self.city_ids);
        push_list(&mut pairs, "establishment_type_ids", &self.establishment_type_ids);
        push_list(&mut pairs, "level_ids", &self.level_ids);
        push_list(&mut pairs, "domain_ids", &self.domain_ids);
        push_list(&mut pairs, "mention_ids", &self.mention_ids);
        push_list(&mut pairs, "legal_statuses", &self.legal_statuses);
        pairs
    }
}

/// 城市筛选条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityFilter {
    #[serde(default)]
    pub name_contains: Option<String>,
    #[serde(default)]
    pub region_id: Option<i64>,
}

impl QueryFilter for CityFilter {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "name_contains", &self.name_contains);
        push_id(&mut pairs, "region_id", self.region_id);
        pairs
    }
}

/// 培训项目筛选条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationFilter {
    #[serde(default)]
    pub name_contains: Option<String>,
    #[serde(default)]
    pub level_id: Option<i64>,
    #[serde(default)]
    pub mention_id: Option<i64>,
    #[serde(default)]
    pub establishment_id: Option<i64>,
}

impl QueryFilter for FormationFilter {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "name_contains", &self.name_contains);
        push_id(&mut pairs, "level_id", self.level_id);
        push_id(&mut pairs, "mention_id", self.mention_id);
        push_id(&mut pairs, "establishment_id", self.establishment_id);
        pairs
    }
}

/// 带分页的筛选查询
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery<F> {
    pub params: PaginationParams,
    pub filter: F,
}

impl<F: QueryFilter> FilterQuery<F> {
    pub fn new(params: PaginationParams, filter: F) -> Self {
        Self { params, filter }
    }

    /// 分页参数在前，筛选参数在后
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.params.query_pairs();
        pairs.extend(self.filter.query_pairs());
        pairs
    }
}
