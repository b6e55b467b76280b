use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("answer to {question_id} is {got}, catalog expects {expected}")]
    AnswerKindMismatch {
        question_id: String,
        expected: &'static str,
        got: &'static str,
    },
}
