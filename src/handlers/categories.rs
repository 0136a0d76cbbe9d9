use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{
    models::{Categories, CategoriesResponse, CategoryQuestionsResponse},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CATEGORIES_URL, get(list_categories))
        .route(names::CATEGORY_QUESTIONS_URL, get(questions_by_category))
}

/// Category id → label for every known category.
pub(crate) async fn category_map(state: &AppState) -> Result<Categories, AppError> {
    let categories = state
        .categories
        .list_categories()
        .await
        .reject("failed to list categories")?;

    Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
}

async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    Ok(Json(CategoriesResponse {
        categories: category_map(&state).await?,
        success: true,
    }))
}

async fn questions_by_category(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let category_id = raw_id
        .parse::<i64>()
        .reject_missing("category id is not a number")?;

    let questions = state
        .questions
        .filter_by_category(category_id)
        .await
        .reject_missing("failed to filter questions by category")?;

    Ok(Json(CategoryQuestionsResponse {
        total_questions: questions.len(),
        questions,
        current_category: category_id,
        success: true,
    }))
}
