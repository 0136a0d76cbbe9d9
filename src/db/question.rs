use async_trait::async_trait;

use super::models::QuestionRow;
use super::Db;
use crate::store::{NewQuestion, Question, QuestionStore, StoreError};

const QUESTION_COLUMNS: &str = "SELECT id, question, answer, category, difficulty FROM questions";

fn into_questions(rows: Vec<QuestionRow>) -> Vec<Question> {
    rows.into_iter().map(Question::from).collect()
}

#[async_trait]
impl QuestionStore for Db {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        let rows = sqlx::query_as::<_, QuestionRow>(&format!("{QUESTION_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(into_questions(rows))
    }

    async fn get(&self, id: i64) -> Result<Option<Question>, StoreError> {
        let row = sqlx::query_as::<_, QuestionRow>(&format!("{QUESTION_COLUMNS} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Question::from))
    }

    async fn filter_by_category(&self, category: i64) -> Result<Vec<Question>, StoreError> {
        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            "{QUESTION_COLUMNS} WHERE category = ?1 ORDER BY id"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(into_questions(rows))
    }

    async fn filter_excluding_ids(&self, ids: &[i64]) -> Result<Vec<Question>, StoreError> {
        // One JSON array parameter, however many ids the client sends.
        let ids = serde_json::to_string(ids).map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            "{QUESTION_COLUMNS} WHERE id NOT IN (SELECT value FROM json_each(?1)) ORDER BY id"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(into_questions(rows))
    }

    async fn search_substring(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        // LIKE and lower() only fold ASCII in SQLite, so match in Rust.
        let needle = term.to_lowercase();
        let mut questions = self.list_all().await?;
        questions.retain(|q| q.question.to_lowercase().contains(&needle));

        Ok(questions)
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = row.id, "question inserted");
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        tracing::debug!(id, "question deleted");
        Ok(())
    }
}
