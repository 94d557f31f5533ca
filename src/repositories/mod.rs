pub mod question_repository;
pub mod resource_repository;

pub use question_repository::{QuestionRepository, StaticQuestionRepository};
pub use resource_repository::{ResourceRepository, StaticResourceRepository};
