use std::sync::Arc;

use rand::{seq::index, Rng};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Difficulty, QuestionRecord, Subject},
        dto::{request::QuestionQuery, response::StudyReport},
    },
    repositories::QuestionRepository,
    services::{classifier, formatter},
};

pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    /// Draws up to `count` distinct questions in random order.
    pub fn select(&self, subject: Subject, difficulty: Difficulty, count: usize) -> Option<Vec<QuestionRecord>> {
        self.select_with_rng(subject, difficulty, count, &mut rand::thread_rng())
    }

    pub fn select_with_rng<R: Rng + ?Sized>(
        &self,
        subject: Subject,
        difficulty: Difficulty,
        count: usize,
        rng: &mut R,
    ) -> Option<Vec<QuestionRecord>> {
        let available = self.repository.find_questions(subject, difficulty)?;
        let amount = count.min(available.len());

        Some(
            index::sample(rng, available.len(), amount)
                .into_iter()
                .map(|i| available[i])
                .collect(),
        )
    }

    pub fn generate(&self, query: &QuestionQuery) -> AppResult<StudyReport> {
        self.generate_with_rng(query, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(&self, query: &QuestionQuery, rng: &mut R) -> AppResult<StudyReport> {
        let unsupported = || AppError::UnsupportedTopic(query.topic.clone());

        let subject = classifier::classify_for_questions(&query.topic).ok_or_else(unsupported)?;
        log::debug!("Topic '{}' classified as {}", query.topic, subject.key());

        let questions = self
            .select_with_rng(subject, query.difficulty, query.count, rng)
            .filter(|questions| !questions.is_empty())
            .ok_or_else(unsupported)?;
        log::debug!(
            "Selected {} of {} requested {} questions",
            questions.len(),
            query.count,
            query.difficulty.as_str()
        );

        let text = formatter::format_question_report(&query.topic, query.difficulty, &questions)?;
        Ok(StudyReport::new(subject.key(), text))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        repositories::{question_repository::MockQuestionRepository, StaticQuestionRepository},
        test_utils::fixtures::*,
    };

    fn static_service() -> QuestionService {
        QuestionService::new(Arc::new(StaticQuestionRepository::new()))
    }

    fn query(topic: &str, difficulty: Difficulty, count: usize) -> QuestionQuery {
        QuestionQuery {
            topic: topic.to_string(),
            difficulty,
            count,
        }
    }

    #[test]
    fn select_returns_min_of_count_and_available_without_duplicates() {
        let service = static_service();
        let repository = StaticQuestionRepository::new();
        let mut rng = StdRng::seed_from_u64(7);

        for subject in Subject::ALL {
            for difficulty in Difficulty::ALL {
                let pool = repository
                    .find_questions(subject, difficulty)
                    .expect("tier is authored");
                for count in 1..=10 {
                    let picked = service
                        .select_with_rng(subject, difficulty, count, &mut rng)
                        .expect("tier is authored");

                    assert_eq!(picked.len(), count.min(5));
                    let prompts: HashSet<_> = picked.iter().map(|q| q.prompt).collect();
                    assert_eq!(prompts.len(), picked.len(), "duplicate question drawn");
                    assert!(picked.iter().all(|q| pool.contains(q)));
                }
            }
        }
    }

    #[test]
    fn select_order_varies_between_draws() {
        let service = static_service();
        let mut rng = StdRng::seed_from_u64(42);

        let orders: HashSet<Vec<&str>> = (0..20)
            .map(|_| {
                service
                    .select_with_rng(Subject::Math, Difficulty::Easy, 5, &mut rng)
                    .expect("tier is authored")
                    .iter()
                    .map(|q| q.prompt)
                    .collect()
            })
            .collect();

        assert!(orders.len() > 1);
    }

    #[test]
    fn select_missing_tier_is_none() {
        let mut repository = MockQuestionRepository::new();
        repository.expect_find_questions().returning(|_, _| None);
        let service = QuestionService::new(Arc::new(repository));

        assert!(service.select(Subject::Math, Difficulty::Hard, 3).is_none());
    }

    #[test]
    fn generate_reports_unsupported_topic() {
        let err = static_service()
            .generate(&query("cooking", Difficulty::Medium, 5))
            .unwrap_err();

        assert_eq!(err, AppError::UnsupportedTopic("cooking".to_string()));
    }

    #[test]
    fn generate_reports_missing_tier_as_unsupported() {
        let mut repository = MockQuestionRepository::new();
        repository
            .expect_find_questions()
            .withf(|subject, difficulty| *subject == Subject::Science && *difficulty == Difficulty::Easy)
            .times(1)
            .returning(|_, _| None);
        let service = QuestionService::new(Arc::new(repository));

        let err = service
            .generate(&query("biology", Difficulty::Easy, 2))
            .unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_TOPIC");
    }

    #[test]
    fn generate_renders_selected_questions() {
        let mut repository = MockQuestionRepository::new();
        repository
            .expect_find_questions()
            .returning(|_, _| Some(vec![four_choice_record(), true_false_record()]));
        let service = QuestionService::new(Arc::new(repository));
        let mut rng = StdRng::seed_from_u64(1);

        let report = service
            .generate_with_rng(&query("geometry", Difficulty::Easy, 10), &mut rng)
            .expect("report renders");

        assert_eq!(report.category, "math");
        assert!(report.text.starts_with("STUDY QUESTIONS - GEOMETRY\nDifficulty: Easy\n"));
        assert!(report.text.contains("Question 2:"));
        assert!(!report.text.contains("Question 3:"));
    }

    #[test]
    fn generate_surfaces_malformed_records() {
        let mut repository = MockQuestionRepository::new();
        repository
            .expect_find_questions()
            .returning(|_, _| Some(vec![QuestionRecord::new("Broken", &["a", "b", "c"], 0, "")]));
        let service = QuestionService::new(Arc::new(repository));

        let err = service
            .generate(&query("math", Difficulty::Medium, 1))
            .unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
