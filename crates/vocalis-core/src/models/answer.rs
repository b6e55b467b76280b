use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::QuestionKind;

/// A single questionnaire response, keyed into the question catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
}

/// A questionnaire answer value. The expected variant for a given question
/// comes from the catalog entry, not from the value itself; see
/// [`crate::catalog::check`].
///
/// Untagged on the wire: the questionnaire frontend writes plain JSON
/// booleans, numbers, strings, and string arrays.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    pub fn kind(&self) -> QuestionKind {
        match self {
            AnswerValue::Bool(_) => QuestionKind::Boolean,
            AnswerValue::Number(_) => QuestionKind::Number,
            AnswerValue::Text(_) => QuestionKind::Text,
            AnswerValue::Multi(_) => QuestionKind::MultiChoice,
        }
    }

    /// Human-readable form: booleans as "Yes"/"No", lists joined with ", ",
    /// whole numbers without a fractional part.
    pub fn format(&self) -> String {
        match self {
            AnswerValue::Bool(true) => "Yes".to_string(),
            AnswerValue::Bool(false) => "No".to_string(),
            AnswerValue::Number(n) if n.fract() == 0.0 && n.abs() < 9e15 => {
                format!("{}", *n as i64)
            }
            AnswerValue::Number(n) => n.to_string(),
            AnswerValue::Text(s) => s.clone(),
            AnswerValue::Multi(items) => items.join(", "),
        }
    }
}
