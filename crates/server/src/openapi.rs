use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityAttractionDoc {
    pub attraction_id: Option<i32>,
    pub attraction_name: Option<String>,
    pub description: Option<String>,
    pub ticket_price: Option<String>,
    pub visitors_yearly: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityCategoryDoc {
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityDataDoc {
    pub city_id: Option<i32>,
    pub city_name: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub safety_level: Option<String>,
    pub attractions: Vec<CityAttractionDoc>,
    pub categories: Vec<CityCategoryDoc>,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cities::list_cities,
        crate::routes::cities::create_city,
        crate::routes::cities::update_city,
        crate::routes::cities::get_city,
        crate::routes::cities::delete_city,
        crate::routes::cities::delete_all_cities,
        crate::routes::cities::create_attraction,
        crate::routes::cities::update_attraction,
        crate::routes::cities::get_attraction,
        crate::routes::cities::delete_attraction,
        crate::routes::cities::create_category,
        crate::routes::cities::attach_category,
        crate::routes::cities::list_cities_in_category,
    ),
    components(
        schemas(
            HealthResponse,
            CityDataDoc,
            CityAttractionDoc,
            CityCategoryDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "city"),
        (name = "attraction"),
        (name = "category")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for p in [
            "/health",
            "/city",
            "/city/{city_id}",
            "/city/{city_id}/attraction",
            "/city/{city_id}/attraction/{attraction_id}",
            "/attraction/{attraction_id}",
            "/city/{city_id}/category",
            "/city/{city_id}/category/{category_id}",
            "/category/{category_id}",
        ] {
            assert!(paths.contains(&p), "missing {p}");
        }
    }
}
