use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::OwnerQuery;
use crate::api::{ApiResponse, ApiResult, Json, Path, Query};
use crate::database::models::{Document, DocumentInput};
use crate::error::ApiError;
use crate::services::document_service::Upload;
use crate::services::{DocumentService, UploadError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub document: Document,
}

/// POST /employee/documents?createdById[&assignedToId]
pub async fn create(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
    Json(input): Json<DocumentInput>,
) -> ApiResult<Document> {
    let document = DocumentService::new(state.db)
        .create(input, query.created_by_id, query.assigned_to_id)
        .await?;
    Ok(ApiResponse::success(document))
}

/// GET /employee/documents
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Document>> {
    let documents = DocumentService::new(state.db).list_all().await?;
    Ok(ApiResponse::success(documents))
}

/// GET /employee/documents/created/:userId
pub async fn created(State(state): State<AppState>, Path(user_id): Path<i64>) -> ApiResult<Vec<Document>> {
    let documents = DocumentService::new(state.db).by_created_by(user_id).await?;
    Ok(ApiResponse::success(documents))
}

/// GET /employee/documents/assigned/:userId - unassigned documents never match
pub async fn assigned(State(state): State<AppState>, Path(user_id): Path<i64>) -> ApiResult<Vec<Document>> {
    let documents = DocumentService::new(state.db).by_assigned_to(user_id).await?;
    Ok(ApiResponse::success(documents))
}

/// GET /employee/documents/status/:status
pub async fn by_status(State(state): State<AppState>, Path(status): Path<String>) -> ApiResult<Vec<Document>> {
    let documents = DocumentService::new(state.db).by_status(&status).await?;
    Ok(ApiResponse::success(documents))
}

/// GET /employee/documents/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Document> {
    let document = DocumentService::new(state.db).get(id).await?;
    Ok(ApiResponse::success(document))
}

/// PUT /employee/documents/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<DocumentInput>,
) -> ApiResult<Document> {
    let document = DocumentService::new(state.db).update(id, input).await?;
    Ok(ApiResponse::success(document))
}

/// POST /employee/documents/upload - multipart `file`, `documentType`, `fileName`.
///
/// Write failures answer 500 with `{success: false, message}` instead of the
/// usual error body.
pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Result<Response, ApiError> {
    let mut bytes = None;
    let mut document_type = None;
    let mut file_name = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let read_error = |e: axum::extract::multipart::MultipartError| {
            ApiError::bad_request(format!("Failed to read field {}: {}", name, e))
        };
        match name.as_str() {
            "file" => bytes = Some(field.bytes().await.map_err(read_error)?),
            "documentType" => document_type = Some(field.text().await.map_err(read_error)?),
            "fileName" => file_name = Some(field.text().await.map_err(read_error)?),
            _ => {}
        }
    }

    let bytes = bytes.ok_or_else(|| ApiError::bad_request("Missing multipart field: file"))?;
    let document_type = document_type.ok_or_else(|| ApiError::bad_request("Missing multipart field: documentType"))?;
    let file_name = file_name.ok_or_else(|| ApiError::bad_request("Missing multipart field: fileName"))?;

    let upload = Upload {
        document_type,
        file_name,
        bytes: &bytes,
    };

    match DocumentService::new(state.db.clone())
        .upload(&state.config.storage.upload_dir, upload)
        .await
    {
        Ok(document) => Ok(axum::Json(UploadResponse {
            success: true,
            message: "File uploaded successfully".to_string(),
            document,
        })
        .into_response()),
        Err(err @ UploadError::Io(_)) => {
            warn!("Upload failed: {}", err);
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({
                    "success": false,
                    "message": err.to_string()
                })),
            )
                .into_response())
        }
        Err(err) => Err(err.into()),
    }
}
