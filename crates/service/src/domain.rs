//! Transport objects: the JSON shapes exchanged with clients, kept apart
//! from the persisted `models` rows.
use serde::{Deserialize, Serialize};

use models::{attraction, category, city};

/// A city with its attractions and categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityData {
    pub city_id: Option<i32>,
    pub city_name: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub safety_level: Option<String>,
    pub attractions: Vec<CityAttraction>,
    pub categories: Vec<CityCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityAttraction {
    pub attraction_id: Option<i32>,
    pub attraction_name: Option<String>,
    pub description: Option<String>,
    pub ticket_price: Option<String>,
    pub visitors_yearly: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityCategory {
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
}

impl CityData {
    /// Full view of a city; children are sorted by id.
    pub fn from_parts(
        city: city::Model,
        attractions: Vec<attraction::Model>,
        categories: Vec<category::Model>,
    ) -> Self {
        let mut data = Self::from(city);
        data.attractions = attractions.into_iter().map(CityAttraction::from).collect();
        data.attractions.sort_by_key(|a| a.attraction_id);
        data.categories = categories.into_iter().map(CityCategory::from).collect();
        data.categories.sort_by_key(|c| c.category_id);
        data
    }
}

/// Scalar fields only; both collections are left empty.
impl From<city::Model> for CityData {
    fn from(c: city::Model) -> Self {
        Self {
            city_id: Some(c.city_id),
            city_name: c.city_name,
            country: c.country,
            language: c.language,
            currency: c.currency,
            safety_level: c.safety_level,
            attractions: Vec::new(),
            categories: Vec::new(),
        }
    }
}

impl From<attraction::Model> for CityAttraction {
    fn from(a: attraction::Model) -> Self {
        Self {
            attraction_id: Some(a.attraction_id),
            attraction_name: a.attraction_name,
            description: a.description,
            ticket_price: a.ticket_price,
            visitors_yearly: a.visitors_yearly,
        }
    }
}

impl From<category::Model> for CityCategory {
    fn from(c: category::Model) -> Self {
        Self { category_id: Some(c.category_id), category_name: c.category_name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn city_data_uses_camel_case_and_defaults() {
        let data: CityData = serde_json::from_value(json!({"cityName": "Paris", "safetyLevel": "High"})).unwrap();
        assert_eq!(data.city_id, None);
        assert_eq!(data.city_name.as_deref(), Some("Paris"));
        assert_eq!(data.safety_level.as_deref(), Some("High"));
        assert!(data.attractions.is_empty());

        let v = serde_json::to_value(CityData { city_id: Some(3), ..data }).unwrap();
        assert_eq!(v["cityId"], 3);
        assert_eq!(v["country"], serde_json::Value::Null);
        assert_eq!(v["attractions"], json!([]));
    }

    #[test]
    fn from_parts_sorts_children_by_id() {
        let city = city::Model {
            city_id: 1,
            city_name: Some("Rome".into()),
            country: None,
            language: None,
            currency: None,
            safety_level: None,
        };
        let attraction = |id| attraction::Model {
            attraction_id: id,
            city_id: 1,
            attraction_name: None,
            description: None,
            ticket_price: None,
            visitors_yearly: None,
        };
        let category = |id| category::Model { category_id: id, category_name: None };

        let data = CityData::from_parts(city, vec![attraction(9), attraction(2)], vec![category(5), category(4)]);
        let a_ids: Vec<_> = data.attractions.iter().map(|a| a.attraction_id).collect();
        let c_ids: Vec<_> = data.categories.iter().map(|c| c.category_id).collect();
        assert_eq!(a_ids, vec![Some(2), Some(9)]);
        assert_eq!(c_ids, vec![Some(4), Some(5)]);
    }
}
