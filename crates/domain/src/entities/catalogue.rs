//! 参考目录：院校类型、城市、大区、专业方向、培训项目

use serde::{Deserialize, Serialize};

use crate::entities::audit::AuditInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstablishmentType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub region_id: Option<i64>,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

/// 专业方向，隶属于一个学科领域
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub domain_id: Option<i64>,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_months: Option<u32>,
    #[serde(default)]
    pub level_id: Option<i64>,
    #[serde(default)]
    pub mention_id: Option<i64>,
    #[serde(default)]
    pub establishment_id: Option<i64>,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_fields_are_flattened() {
        let city: City = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Antsirabe",
            "region_id": 1,
            "created_at": "2024-03-01T00:00:00Z",
            "updatedBy": 5
        }))
        .unwrap();

        assert_eq!(city.region_id, Some(1));
        assert!(city.audit.created_at.is_some());
        assert_eq!(city.audit.updated_by, Some(5));
    }
}
