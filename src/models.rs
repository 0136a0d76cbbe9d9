use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::quiz::QuizCategory;
use crate::store::Question;

/// Category id → label, serialized as a JSON object keyed by id.
pub type Categories = BTreeMap<i64, String>;

struct StringOrI64;

impl<'de> serde::de::Visitor<'de> for StringOrI64 {
    type Value = Option<i64>;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("number or numeric string")
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v).map(Some).map_err(E::custom)
    }

    /// JavaScript clients may send `2.0`; only whole numbers are accepted.
    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(Some(v as i64))
        } else {
            Err(E::invalid_value(serde::de::Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let v = v.trim();
        if v.is_empty() {
            return Ok(None);
        }
        v.parse().map(Some).map_err(E::custom)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: serde::Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(self)
    }
}

/// Deserialize a value that may be either a JSON number or a string containing a number.
/// Browser clients send select values as strings.
pub fn deserialize_string_or_i64<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    d.deserialize_any(StringOrI64)?
        .ok_or_else(|| serde::de::Error::custom("expected a number"))
}

/// Like [`deserialize_string_or_i64`], mapping `null` and `""` to `None`.
pub fn deserialize_opt_string_or_i64<'de, D: serde::Deserializer<'de>>(
    d: D,
) -> Result<Option<i64>, D::Error> {
    d.deserialize_any(StringOrI64)
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionBody {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_or_i64")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_string_or_i64")]
    pub difficulty: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizBody {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Categories,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionsPageResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Categories,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i64,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
