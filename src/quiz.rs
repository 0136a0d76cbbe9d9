//! Next-question selection for a quiz run.
//!
//! The candidate set is rebuilt from the store on every call: either every
//! question or one category's questions, minus the ids the player has
//! already seen. One candidate is drawn uniformly at random. An empty
//! candidate set is the normal end of a quiz, not an error.

use std::collections::HashSet;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::models::deserialize_opt_string_or_i64;
use crate::names;
use crate::store::{Question, QuestionStore, StoreError};

/// The `quiz_category` descriptor sent by the client. `type` is required;
/// `id` only matters when `type` is not the "all" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_opt_string_or_i64")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl QuizCategory {
    pub fn all() -> Self {
        Self {
            id: None,
            kind: names::ALL_CATEGORIES_TYPE.to_string(),
        }
    }

    pub fn category(id: i64) -> Self {
        Self {
            id: Some(id),
            kind: "category".to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.kind == names::ALL_CATEGORIES_TYPE
    }

    /// A descriptor names something to draw from: either every category or
    /// one category id.
    pub fn is_complete(&self) -> bool {
        self.is_all() || self.id.is_some()
    }
}

/// Questions still available for `category` once `previous` are excluded,
/// in id order.
pub async fn candidates(
    store: &dyn QuestionStore,
    category: &QuizCategory,
    previous: &[i64],
) -> Result<Vec<Question>, StoreError> {
    if category.is_all() {
        return store.filter_excluding_ids(previous).await;
    }

    let Some(id) = category.id else {
        return Ok(Vec::new());
    };

    let seen: HashSet<i64> = previous.iter().copied().collect();
    let mut questions = store.filter_by_category(id).await?;
    questions.retain(|q| !seen.contains(&q.id));
    Ok(questions)
}

/// Uniform pick; `None` once the candidate set is exhausted.
pub fn pick<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}

/// Owns the random source so it can be seeded for reproducible runs.
pub struct QuizSelector {
    rng: Mutex<StdRng>,
}

impl QuizSelector {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub async fn next_question(
        &self,
        store: &dyn QuestionStore,
        category: &QuizCategory,
        previous: &[i64],
    ) -> Result<Option<Question>, StoreError> {
        let candidates = candidates(store, category, previous).await?;

        tracing::debug!(
            category = ?category.id,
            all = category.is_all(),
            seen = previous.len(),
            remaining = candidates.len(),
            "selecting quiz question"
        );

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Ok(pick(&candidates, &mut *rng))
    }
}
