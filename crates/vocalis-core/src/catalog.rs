//! The static question catalog for the Vocalis speech assessment.
//!
//! The questionnaire frontend and the upstream scorer share these ids. An
//! answer's expected value type is defined here — never inferred from the
//! value itself.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::answer::Answer;

/// The value type a question produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    Boolean,
    Number,
    Text,
    MultiChoice,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Boolean => "boolean",
            QuestionKind::Number => "number",
            QuestionKind::Text => "text",
            QuestionKind::MultiChoice => "multi-choice",
        }
    }
}

/// One catalog entry. `number` is the position shown in the questionnaire
/// and in generated reports.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionDef {
    pub id: &'static str,
    pub number: u32,
    pub text: &'static str,
    pub kind: QuestionKind,
}

pub const QUESTIONS: &[QuestionDef] = &[
    QuestionDef {
        id: "speaking_fear_level",
        number: 1,
        text: "How intense is your fear of speaking in front of others, from 0 to 10?",
        kind: QuestionKind::Number,
    },
    QuestionDef {
        id: "avoided_situations",
        number: 2,
        text: "Which speaking situations do you avoid?",
        kind: QuestionKind::MultiChoice,
    },
    QuestionDef {
        id: "physical_symptoms",
        number: 3,
        text: "Which physical symptoms do you notice before speaking?",
        kind: QuestionKind::MultiChoice,
    },
    QuestionDef {
        id: "daily_impact",
        number: 4,
        text: "How much does this affect your daily life, from 0 to 10?",
        kind: QuestionKind::Number,
    },
    QuestionDef {
        id: "voice_trembles",
        number: 5,
        text: "Does your voice tremble or tighten when you feel observed?",
        kind: QuestionKind::Boolean,
    },
    QuestionDef {
        id: "avoids_phone",
        number: 6,
        text: "Do you let calls go to voicemail to avoid speaking?",
        kind: QuestionKind::Boolean,
    },
    QuestionDef {
        id: "preparation_habits",
        number: 7,
        text: "How do you prepare before an important conversation?",
        kind: QuestionKind::Text,
    },
    QuestionDef {
        id: "previous_help",
        number: 8,
        text: "Have you worked with a speech or mental-health professional before?",
        kind: QuestionKind::Boolean,
    },
    QuestionDef {
        id: "practice_frequency",
        number: 9,
        text: "How often can you practice speaking exercises?",
        kind: QuestionKind::Text,
    },
    QuestionDef {
        id: "support_goal",
        number: 10,
        text: "What would you most like to change about your speaking?",
        kind: QuestionKind::Text,
    },
];

/// Look up a question by id.
pub fn get(id: &str) -> Option<&'static QuestionDef> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Verify an answer against the catalog: the question must exist and the
/// value must carry the kind the catalog declares for it.
pub fn check(answer: &Answer) -> Result<(), CoreError> {
    let question =
        get(&answer.question_id).ok_or_else(|| CoreError::UnknownQuestion(answer.question_id.clone()))?;

    let got = answer.value.kind();
    if got != question.kind {
        return Err(CoreError::AnswerKindMismatch {
            question_id: answer.question_id.clone(),
            expected: question.kind.as_str(),
            got: got.as_str(),
        });
    }
    Ok(())
}
