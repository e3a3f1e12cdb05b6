use chrono::Utc;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::server::{
    error::storage::FileStoreError,
    model::application::{Application, CreateApplicationParams},
};

/// Flat-file fallback backend: one JSON array holding every stored application.
///
/// Each append reads the whole collection, assigns `max(id) + 1` (or 1 when empty) and
/// rewrites the file through a temporary sibling that is renamed into place. Appends in
/// this process are serialized by an internal lock; separate processes writing the same
/// file can still race on id assignment.
pub struct ApplicationFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ApplicationFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a new application and returns it with its assigned id.
    ///
    /// # Arguments
    /// - `params`: Validated application to store
    ///
    /// # Returns
    /// - `Ok(Application)`: The stored application
    /// - `Err(FileStoreError)`: No id is left to assign, or the collection could not be
    ///   serialized or written; the file is left untouched when no id is left
    pub async fn append(
        &self,
        params: CreateApplicationParams,
    ) -> Result<Application, FileStoreError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await;
        let next_id = next_id(&entries).ok_or_else(|| FileStoreError::IdSpaceExhausted {
            path: self.path.clone(),
        })?;

        let application = Application::from_params(next_id, params, Utc::now());
        entries.push(serde_json::to_value(&application)?);

        self.write_entries(&entries).await?;

        Ok(application)
    }

    /// Reads every stored application that still parses as one.
    #[cfg(test)]
    pub async fn read_all(&self) -> Vec<Application> {
        self.read_entries()
            .await
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect()
    }

    /// Reads the raw collection.
    ///
    /// A missing file, unreadable file, or content that is not a JSON array all read as an
    /// empty collection. Numbering then restarts at 1, which can reuse ids that were
    /// already handed out before the file was lost or corrupted.
    async fn read_entries(&self) -> Vec<Value> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    "Failed to read application file {}, treating as empty: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                tracing::warn!(
                    "Application file {} does not hold a JSON array, treating as empty",
                    self.path.display()
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(
                    "Application file {} is not valid JSON, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn write_entries(&self, entries: &[Value]) -> Result<(), FileStoreError> {
        let body = serde_json::to_vec_pretty(entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_error(source))?;
        }

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, body)
            .await
            .map_err(|source| self.write_error(source))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|source| self.write_error(source))?;

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: std::io::Error) -> FileStoreError {
        FileStoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// One greater than the largest id present, or 1 for an empty collection.
///
/// Entries without an integer id are ignored. `None` once the largest id is `i32::MAX`.
fn next_id(entries: &[Value]) -> Option<i32> {
    match entries
        .iter()
        .filter_map(|entry| entry.get("id").and_then(Value::as_i64))
        .max()
    {
        Some(max) => max.checked_add(1).and_then(|id| i32::try_from(id).ok()),
        None => Some(1),
    }
}
