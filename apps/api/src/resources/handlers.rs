//! Axum route handlers for the learning resource catalog.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::resources::catalog::{LearningResource, ResourceCategory};

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub channels: &'static [LearningResource],
    pub websites: &'static [LearningResource],
    pub practice: &'static [LearningResource],
}

/// GET /api/v1/resources
pub async fn handle_list_resources() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        channels: ResourceCategory::Channels.resources(),
        websites: ResourceCategory::Websites.resources(),
        practice: ResourceCategory::Practice.resources(),
    })
}

/// GET /api/v1/resources/:category
pub async fn handle_category_resources(
    Path(category): Path<String>,
) -> Result<Json<&'static [LearningResource]>, AppError> {
    let category: ResourceCategory = category.parse().map_err(AppError::NotFound)?;
    Ok(Json(category.resources()))
}
