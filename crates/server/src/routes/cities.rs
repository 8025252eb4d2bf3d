use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageResponse;
use service::domain::{CityAttraction, CityCategory, CityData};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/city", tag = "city",
    responses(
        (status = 200, description = "Every city with attractions and categories", body = [crate::openapi::CityDataDoc])
    )
)]
pub async fn list_cities(State(state): State<ServerState>) -> Result<Json<Vec<CityData>>, JsonApiError> {
    let list = state.city_svc.list_cities().await?;
    info!(count = list.len(), "list cities");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/city", tag = "city",
    request_body = crate::openapi::CityDataDoc,
    responses(
        (status = 200, description = "Created or replaced", body = crate::openapi::CityDataDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "City id in body does not exist")
    )
)]
pub async fn create_city(State(state): State<ServerState>, Json(input): Json<CityData>) -> Result<Json<CityData>, JsonApiError> {
    info!(city_id = ?input.city_id, city_name = ?input.city_name, "city_save_request");
    let saved = state.city_svc.upsert_city(input).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    put, path = "/city/{city_id}", tag = "city",
    params(("city_id" = i32, Path, description = "City id")),
    request_body = crate::openapi::CityDataDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CityDataDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_city(
    State(state): State<ServerState>,
    Path(city_id): Path<i32>,
    Json(mut input): Json<CityData>,
) -> Result<Json<CityData>, JsonApiError> {
    input.city_id = Some(city_id);
    info!(city_id, "city_update_request");
    let saved = state.city_svc.upsert_city(input).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    get, path = "/city/{city_id}", tag = "city",
    params(("city_id" = i32, Path, description = "City id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::CityDataDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_city(State(state): State<ServerState>, Path(city_id): Path<i32>) -> Result<Json<CityData>, JsonApiError> {
    let found = state.city_svc.get_city(city_id).await?;
    info!(city_id, "get city");
    Ok(Json(found))
}

#[utoipa::path(
    delete, path = "/city/{city_id}", tag = "city",
    params(("city_id" = i32, Path, description = "City id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_city(State(state): State<ServerState>, Path(city_id): Path<i32>) -> Result<Json<MessageResponse>, JsonApiError> {
    state.city_svc.delete_city(city_id).await?;
    info!(city_id, "city deleted");
    Ok(Json(MessageResponse::new(format!("Deletion of city with ID={} was successful.", city_id))))
}

#[utoipa::path(
    delete, path = "/city", tag = "city",
    responses((status = 405, description = "All cities cannot be deleted."))
)]
pub async fn delete_all_cities(State(state): State<ServerState>) -> Result<Json<MessageResponse>, JsonApiError> {
    state.city_svc.delete_all_cities().await?;
    Ok(Json(MessageResponse::new("All cities were deleted.")))
}

#[utoipa::path(
    post, path = "/city/{city_id}/attraction", tag = "attraction",
    params(("city_id" = i32, Path, description = "Owning city id")),
    request_body = crate::openapi::CityAttractionDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CityAttractionDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "City Not Found")
    )
)]
pub async fn create_attraction(
    State(state): State<ServerState>,
    Path(city_id): Path<i32>,
    Json(input): Json<CityAttraction>,
) -> Result<(StatusCode, Json<CityAttraction>), JsonApiError> {
    info!(city_id, attraction_name = ?input.attraction_name, "attraction_create_request");
    let saved = state.city_svc.upsert_attraction(city_id, input).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    put, path = "/city/{city_id}/attraction/{attraction_id}", tag = "attraction",
    params(
        ("city_id" = i32, Path, description = "City the attraction belongs to afterwards"),
        ("attraction_id" = i32, Path, description = "Attraction id")
    ),
    request_body = crate::openapi::CityAttractionDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CityAttractionDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "City or attraction Not Found")
    )
)]
pub async fn update_attraction(
    State(state): State<ServerState>,
    Path((city_id, attraction_id)): Path<(i32, i32)>,
    Json(mut input): Json<CityAttraction>,
) -> Result<Json<CityAttraction>, JsonApiError> {
    input.attraction_id = Some(attraction_id);
    info!(city_id, attraction_id, "attraction_update_request");
    let saved = state.city_svc.upsert_attraction(city_id, input).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    get, path = "/city/{city_id}/attraction/{attraction_id}", tag = "attraction",
    params(
        ("city_id" = i32, Path, description = "City id"),
        ("attraction_id" = i32, Path, description = "Attraction id")
    ),
    responses(
        (status = 200, description = "Found", body = crate::openapi::CityAttractionDoc),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Attraction belongs to another city")
    )
)]
pub async fn get_attraction(
    State(state): State<ServerState>,
    Path((city_id, attraction_id)): Path<(i32, i32)>,
) -> Result<Json<CityAttraction>, JsonApiError> {
    let found = state.city_svc.get_attraction(city_id, attraction_id).await?;
    info!(city_id, attraction_id, "get attraction");
    Ok(Json(found))
}

#[utoipa::path(
    delete, path = "/attraction/{attraction_id}", tag = "attraction",
    params(("attraction_id" = i32, Path, description = "Attraction id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_attraction(
    State(state): State<ServerState>,
    Path(attraction_id): Path<i32>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    state.city_svc.delete_attraction(attraction_id).await?;
    info!(attraction_id, "attraction deleted");
    Ok(Json(MessageResponse::new(format!(
        "Deletion of attraction with ID={} was successful.",
        attraction_id
    ))))
}

#[utoipa::path(
    post, path = "/city/{city_id}/category", tag = "category",
    params(("city_id" = i32, Path, description = "City to link")),
    request_body = crate::openapi::CityCategoryDoc,
    responses(
        (status = 200, description = "Created and linked", body = crate::openapi::CityCategoryDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "City or category Not Found")
    )
)]
pub async fn create_category(
    State(state): State<ServerState>,
    Path(city_id): Path<i32>,
    Json(input): Json<CityCategory>,
) -> Result<Json<CityCategory>, JsonApiError> {
    info!(city_id, category_name = ?input.category_name, "category_save_request");
    let saved = state.city_svc.upsert_category(city_id, input).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    post, path = "/city/{city_id}/category/{category_id}", tag = "category",
    params(
        ("city_id" = i32, Path, description = "City to link"),
        ("category_id" = i32, Path, description = "Existing category id")
    ),
    request_body = crate::openapi::CityCategoryDoc,
    responses(
        (status = 200, description = "Linked", body = crate::openapi::CityCategoryDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "City or category Not Found")
    )
)]
pub async fn attach_category(
    State(state): State<ServerState>,
    Path((city_id, category_id)): Path<(i32, i32)>,
    Json(mut input): Json<CityCategory>,
) -> Result<Json<CityCategory>, JsonApiError> {
    input.category_id = Some(category_id);
    info!(city_id, category_id, "category_attach_request");
    let saved = state.city_svc.upsert_category(city_id, input).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    get, path = "/category/{category_id}", tag = "category",
    params(("category_id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Cities in the category, without collections", body = [crate::openapi::CityDataDoc]),
        (status = 404, description = "Not Found")
    )
)]
pub async fn list_cities_in_category(
    State(state): State<ServerState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<CityData>>, JsonApiError> {
    let list = state.city_svc.list_cities_in_category(category_id).await?;
    info!(category_id, count = list.len(), "list cities in category");
    Ok(Json(list))
}
