use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use super::extractors::{JsonBody, PRODUCT_NOT_FOUND, ProductId, parse_body};
use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateProductRequest, Product, UpdateProductRequest},
    queries::product_queries,
};

fn not_found() -> AppError {
    AppError::NotFound(PRODUCT_NOT_FOUND.to_string())
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::list_all(&state.db).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = product_queries::create_product(&state.db, &payload)
        .await
        .map_err(|e| e.relabel("Creation failed"))?;

    tracing::info!("Created product {}", product.id);

    Ok((StatusCode::CREATED, Json(product)))
}

/// The body is only read once the row is known to exist, so a missing id is
/// reported as 404 whatever the payload looks like.
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<Product>> {
    if product_queries::find_by_id(&state.db, id)
        .await
        .map_err(|e| e.relabel("Update failed"))?
        .is_none()
    {
        return Err(not_found());
    }

    let payload: UpdateProductRequest = parse_body(&body?)?;

    // the row can disappear between the lookup and the update
    let product = product_queries::update_product(&state.db, id, payload)
        .await
        .map_err(|e| e.relabel("Update failed"))?
        .ok_or_else(not_found)?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Value>> {
    if product_queries::find_by_id(&state.db, id)
        .await
        .map_err(|e| e.relabel("Deletion failed"))?
        .is_none()
    {
        return Err(not_found());
    }

    let deleted = product_queries::delete_product(&state.db, id)
        .await
        .map_err(|e| e.relabel("Deletion failed"))?;

    if !deleted {
        return Err(not_found());
    }

    tracing::info!("Deleted product {}", id);

    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
