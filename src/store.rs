//! Storage contracts consumed by the HTTP handlers.
//!
//! Handlers never talk to SQLite directly; they hold trait objects so the
//! backing store can be swapped for [`crate::memory::MemoryStore`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub kind: String,
}

/// A persisted trivia question, serialized as-is in every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// A question that has passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("question {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
}

#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions ordered by id.
    async fn list_all(&self) -> Result<Vec<Question>, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<Question>, StoreError>;

    async fn filter_by_category(&self, category: i64) -> Result<Vec<Question>, StoreError>;

    /// All questions whose id is not in `ids`, ordered by id.
    async fn filter_excluding_ids(&self, ids: &[i64]) -> Result<Vec<Question>, StoreError>;

    /// Case-insensitive substring match on the question text.
    async fn search_substring(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Fails with [`StoreError::NotFound`] when no row has `id`.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
