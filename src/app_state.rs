use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{QuestionRepository, ResourceRepository, StaticQuestionRepository, StaticResourceRepository},
    services::{QuestionService, ResourceService},
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub resource_service: Arc<ResourceService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the services over the content compiled into the binary.
    pub fn new(config: Config) -> Self {
        Self::with_repositories(
            config,
            Arc::new(StaticQuestionRepository::new()),
            Arc::new(StaticResourceRepository::new()),
        )
    }

    pub fn with_repositories(
        config: Config,
        question_repository: Arc<dyn QuestionRepository>,
        resource_repository: Arc<dyn ResourceRepository>,
    ) -> Self {
        Self {
            question_service: Arc::new(QuestionService::new(question_repository)),
            resource_service: Arc::new(ResourceService::new(resource_repository)),
            config: Arc::new(config),
        }
    }
}
