//! Entry points behind the two study tools.
//!
//! Both always answer with text. Failures are logged here and flattened into
//! an `Error:` prefixed message; nothing propagates past this layer.

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::dto::{
        request::{FindResourcesRequest, GenerateQuestionsRequest, QuestionQuery, ResourceQuery},
        response::StudyReport,
    },
};

pub fn generate_study_questions(state: &AppState, request: GenerateQuestionsRequest) -> String {
    log::info!(
        "Generating questions for {} at {} level (count: {})",
        request.topic,
        request.difficulty,
        request.count
    );

    respond("generate_study_questions", try_generate_study_questions(state, &request))
}

pub fn try_generate_study_questions(state: &AppState, request: &GenerateQuestionsRequest) -> AppResult<StudyReport> {
    let query = QuestionQuery::from_request(request, &state.config.question_policy)?;
    state.question_service.generate(&query)
}

pub fn find_study_resources(state: &AppState, request: FindResourcesRequest) -> String {
    log::info!(
        "Finding resources for {}, type: {}",
        request.topic,
        request.resource_type
    );

    respond("find_study_resources", try_find_study_resources(state, &request))
}

pub fn try_find_study_resources(state: &AppState, request: &FindResourcesRequest) -> AppResult<StudyReport> {
    let query = ResourceQuery::from_request(request)?;
    state.resource_service.find(&query)
}

fn respond(tool: &str, result: AppResult<StudyReport>) -> String {
    match result {
        Ok(report) => {
            log::debug!("{} answered from the {} category", tool, report.category);
            report.text
        }
        Err(err) => {
            log_failure(tool, &err);
            err.to_tool_text()
        }
    }
}

fn log_failure(tool: &str, err: &AppError) {
    if err.is_client_error() {
        log::warn!("{} rejected [{}]: {}", tool, err.error_code(), err);
    } else {
        log::error!("{} failed [{}]: {:?}", tool, err.error_code(), err);
    }
}
