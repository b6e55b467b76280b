use jiff::Zoned;
use serde::Serialize;
use tera::{Context, Tera};

use vocalis_core::models::patient::PatientRecord;

use crate::error::ExportError;
use crate::styles::ReportTheme;

/// Steps shown per exercise; anything beyond is dropped from the report.
pub const MAX_EXERCISE_STEPS: usize = 5;

const REPORT_TEMPLATE: &str = include_str!("../templates/report.html.tera");

/// en-US long form, matching the rest of the dashboard.
const DATE_FORMAT: &str = "%B %-d, %Y, %I:%M %p";

/// A fully rendered report: self-contained styled markup plus the filename
/// the export sink should suggest for the downloadable artifact.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub html: String,
    pub filename: String,
}

/// Template context. Every value is precomputed here; the template only
/// substitutes and loops.
#[derive(Serialize)]
struct ReportContext {
    theme: ReportTheme,
    name: String,
    email: String,
    phone: String,
    generated: String,
    assessment_date: String,
    profile_label: String,
    risk_score: u8,
    emotion_score: u8,
    function_score: u8,
    answers: Vec<AnswerBlock>,
    triggers: Vec<String>,
    exercises: Vec<ExerciseBlock>,
    year: i16,
}

#[derive(Serialize)]
struct AnswerBlock {
    number: usize,
    question_id: String,
    value: String,
}

#[derive(Serialize)]
struct ExerciseBlock {
    name: String,
    duration: String,
    description: String,
    benefit: String,
    steps: Vec<String>,
}

/// Render `record` into a [`ReportDocument`].
///
/// `generated_at` stamps the header and the copyright year, and supplies the
/// time zone for the assessment date. Records without an id or a name are
/// rejected before any rendering: a report with unlabeled identity fields
/// must never leave this function.
pub fn render(record: &PatientRecord, generated_at: &Zoned) -> Result<ReportDocument, ExportError> {
    if record.id.is_empty() {
        return Err(ExportError::MissingField("id".to_string()));
    }
    let name = record
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ExportError::MissingField("name".to_string()))?;

    let context = build_context(record, name, generated_at);

    let mut tera = Tera::default();
    tera.add_raw_template("report.html", REPORT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(&context)?;
    let tera_context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let html = tera.render("report.html", &tera_context)?;

    tracing::debug!(record_id = %record.id, bytes = html.len(), "report rendered");

    Ok(ReportDocument {
        html,
        filename: format!("{name}_Assessment_Report.pdf"),
    })
}

fn build_context(record: &PatientRecord, name: &str, generated_at: &Zoned) -> ReportContext {
    let answers = record
        .answers
        .iter()
        .enumerate()
        .map(|(i, answer)| AnswerBlock {
            number: i + 1,
            question_id: answer.question_id.clone(),
            value: answer.value.format(),
        })
        .collect();

    let (profile_label, triggers, exercises) = match &record.result {
        Some(result) => (
            result.profile_label.clone(),
            result.triggers.clone(),
            result
                .exercises
                .iter()
                .map(|exercise| ExerciseBlock {
                    name: exercise.name.clone(),
                    duration: exercise.duration.clone(),
                    description: exercise.description.clone(),
                    benefit: exercise.benefit.clone(),
                    steps: exercise
                        .steps
                        .iter()
                        .take(MAX_EXERCISE_STEPS)
                        .cloned()
                        .collect(),
                })
                .collect(),
        ),
        None => ("Pending".to_string(), Vec::new(), Vec::new()),
    };

    let assessment_date = record
        .created_at
        .to_zoned(generated_at.time_zone().clone())
        .strftime(DATE_FORMAT)
        .to_string();

    ReportContext {
        theme: ReportTheme::default(),
        name: name.to_string(),
        email: record.email.clone().unwrap_or_else(|| "N/A".to_string()),
        phone: record
            .phone
            .clone()
            .unwrap_or_else(|| "Not provided".to_string()),
        generated: generated_at.strftime(DATE_FORMAT).to_string(),
        assessment_date,
        profile_label,
        risk_score: record.risk_score(),
        emotion_score: record.emotion_score(),
        function_score: record.function_score(),
        answers,
        triggers,
        exercises,
        year: generated_at.year(),
    }
}
