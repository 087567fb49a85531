//! Multipart uploads. Only file metadata is persisted, as a `Document` row;
//! the bytes are read to size the file and then dropped.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::crud::handlers::ensure_exists;
use crate::crud::{store, WORKER};
use crate::errors::AppError;
use crate::records::documents::{Document, DocumentPayload};
use crate::response::{ApiResponse, AppPath};
use crate::state::AppState;

const SCREENSHOT_TYPE: &str = "screenshot";
const DEFAULT_DOCUMENT_TYPE: &str = "other";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub document_id: i64,
    pub file_name: Option<String>,
    pub file_size: i64,
}

#[derive(Debug)]
struct UploadedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    size: usize,
}

/// Text fields and the `file` part of one multipart form.
#[derive(Debug, Default)]
struct UploadForm {
    worker_id: Option<String>,
    document_type: Option<String>,
    title: Option<String>,
    file: Option<UploadedFile>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?;
                    form.file = Some(UploadedFile {
                        file_name,
                        content_type,
                        size: bytes.len(),
                    });
                }
                "workerId" => form.worker_id = Some(field.text().await?),
                "documentType" => form.document_type = Some(field.text().await?),
                "title" => form.title = Some(field.text().await?),
                _ => {}
            }
        }
        Ok(form)
    }

    fn worker_id(&self) -> Result<i64, AppError> {
        let raw = self
            .worker_id
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::BadRequest("workerId is required".to_string()))?;
        raw.parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid workerId: {raw}")))
    }
}

fn non_empty(file: Option<UploadedFile>) -> Result<UploadedFile, AppError> {
    match file {
        Some(file) if file.size > 0 => Ok(file),
        Some(_) => Err(AppError::BadRequest("File is empty".to_string())),
        None => Err(AppError::BadRequest("file is required".to_string())),
    }
}

fn document_payload(file: &UploadedFile, document_type: String, title: Option<String>, fallback_title: &str) -> DocumentPayload {
    let title = title
        .filter(|t| !t.trim().is_empty())
        .or_else(|| file.file_name.clone())
        .unwrap_or_else(|| fallback_title.to_string());
    DocumentPayload {
        document_type: Some(document_type),
        title: Some(title),
        file_name: file.file_name.clone(),
        file_size: Some(file.size as i64),
        mime_type: file.content_type.clone(),
        ..Default::default()
    }
}

async fn store_document(
    state: &AppState,
    worker_id: i64,
    file: UploadedFile,
    payload: DocumentPayload,
) -> Result<UploadReceipt, AppError> {
    payload.validate()?;
    let document = store::insert_child::<Document, _>(&state.db, Some(worker_id), payload).await?;
    info!(
        "Stored upload metadata as document {} for worker {worker_id} ({} bytes)",
        document.id, file.size
    );
    Ok(UploadReceipt {
        document_id: document.id,
        file_name: file.file_name,
        file_size: file.size as i64,
    })
}

/// POST /api/workers/screenshot
pub async fn upload_screenshot(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ApiResponse<UploadReceipt>, AppError> {
    let form = UploadForm::read(multipart?).await?;
    let worker_id = form.worker_id()?;
    ensure_exists(&state, WORKER, worker_id).await?;
    let file = non_empty(form.file)?;

    let payload = document_payload(&file, SCREENSHOT_TYPE.to_string(), None, "Screenshot");
    let receipt = store_document(&state, worker_id, file, payload).await?;
    Ok(ApiResponse::ok(receipt).with_message("File uploaded successfully"))
}

/// POST /api/workers/:worker_id/documents/upload
pub async fn upload_document(
    State(state): State<AppState>,
    AppPath(worker_id): AppPath<i64>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ApiResponse<UploadReceipt>, AppError> {
    let form = UploadForm::read(multipart?).await?;
    ensure_exists(&state, WORKER, worker_id).await?;
    let file = non_empty(form.file)?;

    let document_type = form
        .document_type
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DOCUMENT_TYPE.to_string());
    let payload = document_payload(&file, document_type, form.title, "Document");
    let receipt = store_document(&state, worker_id, file, payload).await?;
    Ok(ApiResponse::ok(receipt).with_message("Document uploaded successfully"))
}
