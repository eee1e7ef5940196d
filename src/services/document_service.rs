use std::path::{Component, Path};

use chrono::{Local, NaiveDateTime};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{error, info};

use crate::database::models::{Document, DocumentInput};
use crate::database::{DatabaseError, Repository};
use crate::services::{ServiceError, UserService};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    /// Writing the payload failed; no document row was created
    #[error("Failed to upload file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// A stored file plus the document metadata to record for it
pub struct Upload<'a> {
    pub document_type: String,
    pub file_name: String,
    pub bytes: &'a [u8],
}

pub struct DocumentService {
    repository: Repository<Document>,
    users: UserService,
}

impl DocumentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Repository::new(Document::TABLE, pool.clone()),
            users: UserService::new(pool),
        }
    }

    pub async fn create(
        &self,
        input: DocumentInput,
        created_by_id: i64,
        assigned_to_id: Option<i64>,
    ) -> Result<Document, ServiceError> {
        let created_by = self.users.require(created_by_id, "createdBy").await?;
        let assigned_to = match assigned_to_id {
            Some(id) => Some(self.users.require(id, "assignedTo").await?.id),
            None => None,
        };

        let document = self
            .insert(
                input,
                Local::now().naive_local(),
                Some(created_by.id),
                assigned_to,
            )
            .await?;
        Ok(document)
    }

    pub async fn list_all(&self) -> Result<Vec<Document>, ServiceError> {
        Ok(self.repository.select_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Document, ServiceError> {
        Ok(self.repository.select_404(id).await?)
    }

    pub async fn update(&self, id: i64, input: DocumentInput) -> Result<Document, ServiceError> {
        let existing = self.get(id).await?;
        let document = sqlx::query_as::<_, Document>(
            "UPDATE documents SET document_type = ?, file_name = ?, file_path = ?, status = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(input.document_type.or(existing.document_type))
        .bind(input.file_name.or(existing.file_name))
        .bind(input.file_path.or(existing.file_path))
        .bind(input.status.or(existing.status))
        .bind(id)
        .fetch_one(self.repository.pool())
        .await?;
        Ok(document)
    }

    pub async fn by_created_by(&self, user_id: i64) -> Result<Vec<Document>, ServiceError> {
        let filter = self.repository.filter()?.where_eq("created_by_id", user_id);
        Ok(self.repository.select_any(filter).await?)
    }

    pub async fn by_assigned_to(&self, user_id: i64) -> Result<Vec<Document>, ServiceError> {
        let filter = self.repository.filter()?.where_eq("assigned_to_id", user_id);
        Ok(self.repository.select_any(filter).await?)
    }

    pub async fn by_status(&self, status: &str) -> Result<Vec<Document>, ServiceError> {
        let filter = self.repository.filter()?.where_eq("status", status);
        Ok(self.repository.select_any(filter).await?)
    }

    /// Write the payload to `<upload_dir>/<file_name>` and record it.
    ///
    /// An existing file with the same name is overwritten and a new row is
    /// inserted pointing at the same path.
    pub async fn upload(&self, upload_dir: &Path, upload: Upload<'_>) -> Result<Document, UploadError> {
        validate_file_name(&upload.file_name)?;

        tokio::fs::create_dir_all(upload_dir).await.map_err(|e| {
            error!("Failed to create upload directory {}: {}", upload_dir.display(), e);
            e
        })?;

        let file_path = upload_dir.join(&upload.file_name);
        tokio::fs::write(&file_path, upload.bytes).await.map_err(|e| {
            error!("Failed to write upload {}: {}", file_path.display(), e);
            e
        })?;

        let input = DocumentInput {
            document_type: Some(upload.document_type),
            file_name: Some(upload.file_name),
            file_path: Some(file_path.to_string_lossy().into_owned()),
            status: None,
        };
        let document = self.insert(input, Local::now().naive_local(), None, None).await?;

        info!("Stored upload {} ({} bytes)", file_path.display(), upload.bytes.len());
        Ok(document)
    }

    async fn insert(
        &self,
        input: DocumentInput,
        created_at: NaiveDateTime,
        created_by_id: Option<i64>,
        assigned_to_id: Option<i64>,
    ) -> Result<Document, DatabaseError> {
        let document = sqlx::query_as::<_, Document>(
            "INSERT INTO documents (document_type, file_name, file_path, status, created_at, created_by_id, assigned_to_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&input.document_type)
        .bind(&input.file_name)
        .bind(&input.file_path)
        .bind(input.status.as_deref().unwrap_or(Document::DEFAULT_STATUS))
        .bind(created_at)
        .bind(created_by_id)
        .bind(assigned_to_id)
        .fetch_one(self.repository.pool())
        .await?;
        Ok(document)
    }
}

/// Only bare file names are accepted so uploads cannot escape the upload directory
pub fn validate_file_name(file_name: &str) -> Result<(), UploadError> {
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(UploadError::InvalidFileName(file_name.to_string())),
    }
}
