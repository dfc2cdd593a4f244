//! 院校实体

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::audit::AuditInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Establishment {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub acronym: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contacts: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub legal_status: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub establishment_type_id: Option<i64>,
    #[serde(default)]
    pub city_id: Option<i64>,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

/// 新建院校的请求体
///
/// 字段名沿用上游：`acronyme`、`contact`、`site_url`、`sector_id`，同时接受 `acronym` 和 `website`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EstablishmentInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, rename = "acronyme", alias = "acronym", skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[validate(length(min = 1))]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, rename = "site_url", alias = "website", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub establishment_type_id: i64,
    pub sector_id: i64,
}

/// 部分更新，未给出的字段不发往上游
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct EstablishmentUpdate {
    #[validate(length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "acronyme", alias = "acronym", skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, rename = "site_url", alias = "website", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub establishment_type_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector_id: Option<i64>,
}

/// 院校评分，1 到 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Rating {
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_uses_upstream_field_names() {
        let input: EstablishmentInput = serde_json::from_value(json!({
            "name": "Université de Toamasina",
            "acronym": "UT",
            "address": "Barikadimy",
            "website": "https://univ-toamasina.mg",
            "establishment_type_id": 1,
            "sector_id": 2
        }))
        .unwrap();

        assert!(input.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "name": "Université de Toamasina",
                "acronyme": "UT",
                "address": "Barikadimy",
                "site_url": "https://univ-toamasina.mg",
                "establishment_type_id": 1,
                "sector_id": 2
            })
        );
    }

    #[test]
    fn coordinates_and_rating_are_bounded() {
        let update = EstablishmentUpdate {
            latitude: Some(120.0),
            ..EstablishmentUpdate::default()
        };

        assert!(update.validate().is_err());
        assert!(Rating { rating: 0 }.validate().is_err());
        assert!(Rating { rating: 6 }.validate().is_err());
        assert!(Rating { rating: 4 }.validate().is_ok());
    }
}
