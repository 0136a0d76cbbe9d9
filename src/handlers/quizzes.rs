use axum::{extract::State, routing::post, Json, Router};

use crate::{
    extractors::JsonBody,
    models::{QuizBody, QuizResponse},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::QUIZZES_URL, post(next_question))
}

async fn next_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<QuizBody>,
) -> Result<Json<QuizResponse>, AppError> {
    let (Some(category), Some(previous)) = (body.quiz_category, body.previous_questions) else {
        tracing::debug!("quiz_category or previous_questions missing");
        return Err(AppError::Unprocessable);
    };

    if !category.is_complete() {
        tracing::debug!(kind = %category.kind, "quiz_category has no id");
        return Err(AppError::Unprocessable);
    }

    let question = state
        .quiz
        .next_question(state.questions.as_ref(), &category, &previous)
        .await
        .reject_input("failed to select quiz question")?;

    if question.is_none() {
        tracing::debug!(category = ?category.id, "no questions left");
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
