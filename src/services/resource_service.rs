use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{ResourceBundle, ResourceCategory},
        dto::{request::ResourceQuery, response::StudyReport},
    },
    repositories::ResourceRepository,
    services::{classifier, formatter},
};

pub struct ResourceService {
    repository: Arc<dyn ResourceRepository>,
}

impl ResourceService {
    pub fn new(repository: Arc<dyn ResourceRepository>) -> Self {
        Self { repository }
    }

    /// Resolves a category to its bundle, falling back to the general bundle
    /// when the category itself has none.
    pub fn bundle_for(&self, category: ResourceCategory) -> AppResult<ResourceBundle> {
        self.repository
            .find_bundle(category)
            .or_else(|| self.repository.find_bundle(ResourceCategory::General))
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "no resources available for '{}' and no general fallback",
                    category.key()
                ))
            })
    }

    pub fn find(&self, query: &ResourceQuery) -> AppResult<StudyReport> {
        let category = classifier::classify_for_resources(&query.topic);
        log::debug!("Topic '{}' classified as {}", query.topic, category.key());

        let bundle = self.bundle_for(category)?;
        let text = formatter::format_resource_report(&query.topic, &bundle, query.resource_type);

        Ok(StudyReport::new(category.key(), text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::ResourceType,
        repositories::{resource_repository::MockResourceRepository, StaticResourceRepository},
        test_utils::fixtures::*,
    };

    fn query(topic: &str, resource_type: ResourceType) -> ResourceQuery {
        ResourceQuery {
            topic: topic.to_string(),
            resource_type,
        }
    }

    #[test]
    fn javascript_videos_come_from_cs_bundle() {
        let service = ResourceService::new(Arc::new(StaticResourceRepository::new()));

        let report = service
            .find(&query("javascript", ResourceType::Videos))
            .expect("resources are always found");

        assert_eq!(report.category, "cs");
        assert!(report.text.contains("VIDEO RESOURCES:"));
        assert!(report.text.contains("freeCodeCamp"));
        assert!(!report.text.contains("PRACTICE SITES:"));
        assert!(!report.text.contains("STUDY TIPS FOR"));
    }

    #[test]
    fn unknown_topic_uses_general_bundle() {
        let service = ResourceService::new(Arc::new(StaticResourceRepository::new()));

        let report = service
            .find(&query("underwater basket weaving", ResourceType::All))
            .expect("resources are always found");

        assert_eq!(report.category, "general");
        assert!(report.text.contains("STUDY TIPS FOR UNDERWATER BASKET WEAVING:"));
        assert!(report.text.contains("Anki - Spaced repetition flashcard app"));
    }

    #[test]
    fn missing_bundle_falls_back_to_general() {
        let mut repository = MockResourceRepository::new();
        repository
            .expect_find_bundle()
            .returning(|category| (category == ResourceCategory::General).then(sample_bundle));
        let service = ResourceService::new(Arc::new(repository));

        let bundle = service
            .bundle_for(ResourceCategory::History)
            .expect("general fallback exists");
        assert_eq!(bundle, sample_bundle());
    }

    #[test]
    fn empty_catalog_is_an_internal_error() {
        let mut repository = MockResourceRepository::new();
        repository.expect_find_bundle().returning(|_| None);
        let service = ResourceService::new(Arc::new(repository));

        let err = service
            .find(&query("math", ResourceType::All))
            .unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn resource_output_is_deterministic() {
        let service = ResourceService::new(Arc::new(StaticResourceRepository::new()));
        let first = service.find(&query("chemistry", ResourceType::All)).expect("found");
        let second = service.find(&query("chemistry", ResourceType::All)).expect("found");

        assert_eq!(first, second);
    }
}
