use crate::model::{CourseTemplate, RoundState};
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(format!("sqlite: {value}"))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::new(format!("json: {value}"))
    }
}

impl From<crate::error::CoreError> for StorageError {
    fn from(value: crate::error::CoreError) -> Self {
        Self::new(value.to_string())
    }
}

/// Where the current round and saved course templates live.
///
/// Implementations own any migration of stored shapes into `RoundState` and
/// `CourseTemplate`.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn load_round(&self) -> Result<Option<RoundState>, StorageError>;
    async fn save_round(&self, round: &RoundState) -> Result<(), StorageError>;
    async fn clear_round(&self) -> Result<(), StorageError>;
    /// Marks the stored round finished (or reopens it).
    async fn set_completed(&self, completed: bool) -> Result<(), StorageError>;
    async fn round_completed(&self) -> Result<bool, StorageError>;
    /// Newest first.
    async fn load_templates(&self) -> Result<Vec<CourseTemplate>, StorageError>;
    async fn save_template(&self, template: &CourseTemplate) -> Result<(), StorageError>;
    async fn delete_template(&self, id: &str) -> Result<(), StorageError>;
}
