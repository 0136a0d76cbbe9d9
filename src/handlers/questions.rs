use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::{
    extractors::{JsonBody, Page},
    models::{
        CreateQuestionBody, CreatedResponse, DeletedResponse, QuestionsPageResponse, SearchBody,
        SearchResponse,
    },
    names,
    pagination::paginate,
    rejections::{AppError, ResultExt},
    store::{NewQuestion, Question, StoreError},
    AppState,
};

use super::categories::category_map;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            names::QUESTIONS_URL,
            get(list_questions).post(create_question),
        )
        .route(names::QUESTION_URL, delete(delete_question))
        .route(names::SEARCH_URL, post(search_questions))
}

/// Freshly fetched page `page` plus the total number of questions.
fn page_of(all: Vec<Question>, page: usize) -> (Vec<Question>, usize) {
    let total = all.len();
    let window = paginate(&all, page, names::QUESTIONS_PER_PAGE).to_vec();
    (window, total)
}

/// Blank text counts as missing.
fn required_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

async fn list_questions(
    State(state): State<AppState>,
    Page(page): Page,
) -> Result<Json<QuestionsPageResponse>, AppError> {
    let all = state
        .questions
        .list_all()
        .await
        .reject("failed to list questions")?;
    let (questions, total_questions) = page_of(all, page);

    if questions.is_empty() {
        tracing::debug!(page, total_questions, "requested page is empty");
        return Err(AppError::NotFound);
    }

    Ok(Json(QuestionsPageResponse {
        questions,
        total_questions,
        categories: category_map(&state).await?,
        success: true,
    }))
}

async fn create_question(
    State(state): State<AppState>,
    Page(page): Page,
    JsonBody(body): JsonBody<CreateQuestionBody>,
) -> Result<Json<CreatedResponse>, AppError> {
    let (Some(question), Some(answer)) = (
        required_text(body.question),
        required_text(body.answer),
    ) else {
        tracing::debug!("question or answer text missing");
        return Err(AppError::Unprocessable);
    };

    let created = state
        .questions
        .insert(NewQuestion {
            question,
            answer,
            category: body.category,
            difficulty: body.difficulty,
        })
        .await
        .reject_input("failed to insert question")?;

    let all = state
        .questions
        .list_all()
        .await
        .reject_input("failed to list questions")?;
    let (questions, total_questions) = page_of(all, page);

    tracing::info!(id = created.id, "question created");

    Ok(Json(CreatedResponse {
        created: created.id,
        questions,
        total_questions,
        success: true,
    }))
}

async fn delete_question(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Page(page): Page,
) -> Result<Json<DeletedResponse>, AppError> {
    let id = raw_id
        .parse::<i64>()
        .reject_missing("question id is not a number")?;

    match state.questions.delete(id).await {
        Ok(()) => {}
        Err(StoreError::NotFound(_)) => {
            tracing::debug!(id, "question to delete does not exist");
            return Err(AppError::NotFound);
        }
        Err(e) => {
            tracing::error!("failed to delete question {id}: {e}");
            return Err(AppError::Unprocessable);
        }
    }

    let all = state
        .questions
        .list_all()
        .await
        .reject_input("failed to list questions")?;
    let (questions, total_questions) = page_of(all, page);

    tracing::info!(id, "question deleted");

    Ok(Json(DeletedResponse {
        deleted: id,
        questions,
        total_questions,
        success: true,
    }))
}

async fn search_questions(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SearchBody>,
) -> Result<Json<SearchResponse>, AppError> {
    let Some(term) = body.search_term.filter(|t| !t.is_empty()) else {
        tracing::debug!("search term missing");
        return Err(AppError::Unprocessable);
    };

    let questions = state
        .questions
        .search_substring(&term)
        .await
        .reject("failed to search questions")?;

    Ok(Json(SearchResponse {
        total_questions: questions.len(),
        questions,
        success: true,
    }))
}

#[cfg(test)]
mod tests {
    use super::required_text;

    #[test]
    fn blank_text_is_missing() {
        assert_eq!(required_text(None), None);
        assert_eq!(required_text(Some(String::new())), None);
        assert_eq!(required_text(Some("   ".to_string())), None);
        assert_eq!(
            required_text(Some("Who?".to_string())),
            Some("Who?".to_string())
        );
    }
}
