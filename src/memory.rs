//! In-memory store used by tests and by `--in-memory` runs.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::names;
use crate::store::{Category, CategoryStore, NewQuestion, Question, QuestionStore, StoreError};

#[derive(Default)]
struct Inner {
    categories: Vec<Category>,
    questions: Vec<Question>,
    last_id: i64,
}

/// Questions are kept in insertion order, which is also id order since ids
/// only ever grow.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the stock trivia categories, numbered from 1.
    pub fn seeded() -> Self {
        Self::with_categories(
            names::STOCK_CATEGORIES
                .iter()
                .enumerate()
                .map(|(i, kind)| (i as i64 + 1, *kind)),
        )
    }

    pub fn with_categories<'a>(categories: impl IntoIterator<Item = (i64, &'a str)>) -> Self {
        let mut categories: Vec<Category> = categories
            .into_iter()
            .map(|(id, kind)| Category {
                id,
                kind: kind.to_string(),
            })
            .collect();
        categories.sort_by_key(|c| c.id);

        Self {
            inner: RwLock::new(Inner {
                categories,
                ..Inner::default()
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn select(&self, keep: impl Fn(&Question) -> bool) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .read()?
            .questions
            .iter()
            .filter(|&q| keep(q))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.read()?.categories.clone())
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        self.select(|_| true)
    }

    async fn get(&self, id: i64) -> Result<Option<Question>, StoreError> {
        Ok(self.read()?.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn filter_by_category(&self, category: i64) -> Result<Vec<Question>, StoreError> {
        self.select(|q| q.category == Some(category))
    }

    async fn filter_excluding_ids(&self, ids: &[i64]) -> Result<Vec<Question>, StoreError> {
        self.select(|q| !ids.contains(&q.id))
    }

    async fn search_substring(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        self.select(|q| q.question.to_lowercase().contains(&needle))
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut inner = self.write()?;
        inner.last_id += 1;

        let question = Question {
            id: inner.last_id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        };
        inner.questions.push(question.clone());

        Ok(question)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        let idx = inner
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or(StoreError::NotFound(id))?;
        inner.questions.remove(idx);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category: Some(category),
            difficulty: Some(1),
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.insert(new_question("first", 1)).await.unwrap();
        let second = store.insert(new_question("second", 1)).await.unwrap();

        store.delete(second.id).await.unwrap();
        let third = store.insert(new_question("third", 1)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn delete_missing_question_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete(42).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(42)));
    }

    #[tokio::test]
    async fn seeded_store_lists_stock_categories() {
        let store = MemoryStore::seeded();
        let categories = store.list_categories().await.unwrap();

        assert_eq!(categories.len(), names::STOCK_CATEGORIES.len());
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].kind, "Science");
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let store = MemoryStore::new();
        store
            .insert(new_question("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", 4))
            .await
            .unwrap();
        store.insert(new_question("What is 2+2?", 1)).await.unwrap();

        let hits = store.search_substring("ENTITLED").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, Some(4));
    }
}
