//! Name handlers - the five CRUD routes.
//!
//! Each handler decodes the request, calls `NameService`, and encodes the
//! result. Every path produces a response.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::{
    CreatedRecordDto, DataResponse, InsertRequest, RecordDto, SuccessResponse, UpdateRequest,
};
use crate::error::HttpError;
use crate::extract::JsonOrForm;
use crate::state::AppState;

/// Insert a new record.
pub async fn insert(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<InsertRequest>,
) -> Result<Json<DataResponse<CreatedRecordDto>>, HttpError> {
    let record = state.names.insert(&req.name).await?;
    Ok(Json(DataResponse::new(record.into())))
}

/// List all records.
pub async fn get_all(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<RecordDto>>>, HttpError> {
    let records = state.names.get_all().await?;
    Ok(Json(DataResponse::new(
        records.into_iter().map(RecordDto::from).collect(),
    )))
}

/// Rename a record.
pub async fn update(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<UpdateRequest>,
) -> Json<SuccessResponse> {
    let success = state
        .names
        .update_name(&req.raw_id(), &req.name)
        .await;
    Json(SuccessResponse { success })
}

/// Delete a record.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Json<SuccessResponse> {
    let success = state.names.delete_by_id(&id).await;
    Json(SuccessResponse { success })
}

/// Find records by exact name.
pub async fn search(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DataResponse<Vec<RecordDto>>>, HttpError> {
    let records = state.names.search_by_name(&name).await?;
    Ok(Json(DataResponse::new(
        records.into_iter().map(RecordDto::from).collect(),
    )))
}
