#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tower::ServiceExt;
use trivia::{
    db::Db,
    memory::MemoryStore,
    quiz::QuizSelector,
    router,
    store::{Category, CategoryStore, NewQuestion, Question, QuestionStore, StoreError},
    AppState,
};

pub const TEST_SEED: u64 = 1414;

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}?mode=rwc", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

pub fn new_question(question: &str, answer: &str, category: i64, difficulty: i64) -> NewQuestion {
    NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        category: Some(category),
        difficulty: Some(difficulty),
    }
}

/// `n` questions spread over categories 1..=3 in round-robin order.
pub fn make_questions(n: usize) -> Vec<NewQuestion> {
    (0..n)
        .map(|i| {
            new_question(
                &format!("Question {}", i + 1),
                &format!("Answer {}", i + 1),
                (i % 3) as i64 + 1,
                (i % 5) as i64 + 1,
            )
        })
        .collect()
}

pub async fn fill(store: &dyn QuestionStore, questions: Vec<NewQuestion>) {
    for question in questions {
        store.insert(question).await.expect("insert question");
    }
}

/// Router over a seeded in-memory store holding `questions`.
pub async fn app_with(questions: Vec<NewQuestion>) -> Router {
    let store = MemoryStore::seeded();
    fill(&store, questions).await;
    router(AppState::new(store, QuizSelector::from_seed(TEST_SEED)))
}

pub const BROKEN_STORE_REASON: &str = "disk on fire";

/// A store whose every call fails.
pub struct BrokenStore;

fn broken<T>() -> Result<T, StoreError> {
    Err(StoreError::Unavailable(BROKEN_STORE_REASON.to_string()))
}

#[async_trait]
impl CategoryStore for BrokenStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        broken()
    }
}

#[async_trait]
impl QuestionStore for BrokenStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        broken()
    }

    async fn get(&self, _id: i64) -> Result<Option<Question>, StoreError> {
        broken()
    }

    async fn filter_by_category(&self, _category: i64) -> Result<Vec<Question>, StoreError> {
        broken()
    }

    async fn filter_excluding_ids(&self, _ids: &[i64]) -> Result<Vec<Question>, StoreError> {
        broken()
    }

    async fn search_substring(&self, _term: &str) -> Result<Vec<Question>, StoreError> {
        broken()
    }

    async fn insert(&self, _question: NewQuestion) -> Result<Question, StoreError> {
        broken()
    }

    async fn delete(&self, _id: i64) -> Result<(), StoreError> {
        broken()
    }
}

/// Router whose store fails every call.
pub fn broken_app() -> Router {
    router(AppState::new(BrokenStore, QuizSelector::from_seed(TEST_SEED)))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            req = req.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(req.body(body).expect("request build should succeed"))
        .await
        .expect("router should respond");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };

    (status, json)
}

pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).expect("response should match its shape")
}
