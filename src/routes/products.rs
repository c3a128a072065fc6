use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, patch},
};

use crate::{
    audit::{log_call, param},
    dto::products::{ProductResponse, UpdateDescriptionRequest},
    error::AppResult,
    middleware::{
        json::{AppJson, ValidatedJson},
        path::ProductId,
    },
    response::ValidationProblem,
    services::product_service,
    state::AppState,
    version::ApiVersion,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/Product/AvailableProducts", get(get_available_products))
        .route("/Product/UpdateDescription", patch(update_description))
        .route("/Product/{id}", get(get_product))
        .route(
            "/Product/{id}/UpdateDescription",
            patch(update_description_by_id),
        )
}

#[utoipa::path(
    get,
    path = "/v{version}/Product/{id}",
    params(
        ("version" = u8, Path, description = "API version"),
        ("id" = i32, Path, description = "Product ID, at least 1")
    ),
    responses(
        (status = 200, description = "Get product by id", body = ProductResponse),
        (status = 404, description = "Product not found"),
    ),
    tag = "Product"
)]
pub async fn get_product(
    State(state): State<AppState>,
    version: ApiVersion,
    ProductId(id): ProductId,
) -> AppResult<Json<ProductResponse>> {
    log_call("GetProduct", version, &[param(&id)]);

    let product = product_service::get_product(&state, version, id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    get,
    path = "/v{version}/Product/AvailableProducts",
    params(
        ("version" = u8, Path, description = "API version")
    ),
    responses(
        (status = 200, description = "Get available products", body = Vec<ProductResponse>)
    ),
    tag = "Product"
)]
pub async fn get_available_products(
    State(state): State<AppState>,
    version: ApiVersion,
) -> Json<Vec<ProductResponse>> {
    log_call("GetAvailableProducts", version, &[]);

    Json(product_service::list_available_products(&state, version).await)
}

#[utoipa::path(
    patch,
    path = "/v{version}/Product/{id}/UpdateDescription",
    params(
        ("version" = u8, Path, description = "API version"),
        ("id" = i32, Path, description = "Product ID, at least 1")
    ),
    request_body(content = String, description = "New product description"),
    responses(
        (status = 204, description = "Description updated"),
        (status = 404, description = "Product not found"),
        (status = 400, description = "Update failed", body = String, content_type = "text/plain"),
    ),
    tag = "Product"
)]
pub async fn update_description_by_id(
    State(state): State<AppState>,
    version: ApiVersion,
    ProductId(id): ProductId,
    AppJson(description): AppJson<String>,
) -> AppResult<StatusCode> {
    log_call("UpdateProductDescription", version, &[param(&id), param(&description)]);

    product_service::update_description(&state, id, &description).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/v{version}/Product/UpdateDescription",
    params(
        ("version" = u8, Path, description = "API version")
    ),
    request_body = UpdateDescriptionRequest,
    responses(
        (status = 204, description = "Description updated"),
        (status = 404, description = "Product not found"),
        (status = 400, description = "Invalid product or update failed", body = ValidationProblem),
    ),
    tag = "Product"
)]
pub async fn update_description(
    State(state): State<AppState>,
    version: ApiVersion,
    ValidatedJson(request): ValidatedJson<UpdateDescriptionRequest>,
) -> AppResult<StatusCode> {
    log_call("UpdateProductDescription", version, &[param(&request)]);

    let description = request.description.as_deref().unwrap_or_default();
    product_service::update_description(&state, request.id, description).await?;
    Ok(StatusCode::NO_CONTENT)
}
