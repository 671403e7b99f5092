use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{Storage, StorageError};
use crate::model::{CourseTemplate, RoundState};

#[derive(Default)]
struct MemoryState {
    round: Option<RoundState>,
    completed: bool,
    templates: Vec<CourseTemplate>,
}

/// Keeps everything in process. Clones share the same state.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load_round(&self) -> Result<Option<RoundState>, StorageError> {
        Ok(self.state.read().await.round.clone())
    }

    async fn save_round(&self, round: &RoundState) -> Result<(), StorageError> {
        self.state.write().await.round = Some(round.clone());
        Ok(())
    }

    async fn clear_round(&self) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        state.round = None;
        state.completed = false;
        Ok(())
    }

    async fn set_completed(&self, completed: bool) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        if state.round.is_none() {
            return Err(StorageError::new("no round to update"));
        }
        state.completed = completed;
        Ok(())
    }

    async fn round_completed(&self) -> Result<bool, StorageError> {
        let state = self.state.read().await;
        Ok(state.round.is_some() && state.completed)
    }

    async fn load_templates(&self) -> Result<Vec<CourseTemplate>, StorageError> {
        let mut templates = self.state.read().await.templates.clone();
        templates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(templates)
    }

    async fn save_template(&self, template: &CourseTemplate) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        match state.templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => *existing = template.clone(),
            None => state.templates.push(template.clone()),
        }
        Ok(())
    }

    async fn delete_template(&self, id: &str) -> Result<(), StorageError> {
        self.state.write().await.templates.retain(|t| t.id != id);
        Ok(())
    }
}
