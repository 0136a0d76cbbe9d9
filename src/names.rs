pub const CATEGORIES_URL: &str = "/categories";
pub const CATEGORY_QUESTIONS_URL: &str = "/categories/{id}/questions";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{id}";
pub const SEARCH_URL: &str = "/search";
pub const QUIZZES_URL: &str = "/quizzes";

pub fn category_questions_url(category_id: i64) -> String {
    format!("/categories/{category_id}/questions")
}

pub fn question_url(question_id: i64) -> String {
    format!("/questions/{question_id}")
}

// Pagination
pub const QUESTIONS_PER_PAGE: usize = 10;
pub const DEFAULT_PAGE: usize = 1;

/// `quiz_category.type` sent by the client when the player picks "All".
pub const ALL_CATEGORIES_TYPE: &str = "click";

/// Categories every fresh catalog starts with, in id order.
pub const STOCK_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];
