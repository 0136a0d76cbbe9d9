// Database row structs

use crate::store::{Category, Question};

#[derive(sqlx::FromRow)]
pub struct CategoryRow {
    pub id: i64,
    pub kind: String,
}

#[derive(sqlx::FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            kind: row.kind,
        }
    }
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}
