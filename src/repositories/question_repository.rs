use crate::{
    constants::QUESTION_BANK,
    models::domain::{Difficulty, QuestionRecord, Subject, SubjectQuestions},
};

#[cfg_attr(test, mockall::automock)]
pub trait QuestionRepository: Send + Sync {
    /// Returns the authored questions for a subject and tier, or `None` when
    /// the subject has no entry for that tier.
    fn find_questions(&self, subject: Subject, difficulty: Difficulty) -> Option<Vec<QuestionRecord>>;
}

/// Serves the question bank compiled into the binary.
pub struct StaticQuestionRepository {
    bank: &'static [SubjectQuestions],
}

impl StaticQuestionRepository {
    pub fn new() -> Self {
        Self::with_bank(QUESTION_BANK)
    }

    pub fn with_bank(bank: &'static [SubjectQuestions]) -> Self {
        Self { bank }
    }
}

impl Default for StaticQuestionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionRepository for StaticQuestionRepository {
    fn find_questions(&self, subject: Subject, difficulty: Difficulty) -> Option<Vec<QuestionRecord>> {
        self.bank
            .iter()
            .find(|entry| entry.subject == subject)
            .and_then(|entry| entry.tier(difficulty))
            .map(|records| records.to_vec())
    }
}
