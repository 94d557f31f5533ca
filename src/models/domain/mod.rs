pub mod question;
pub mod resource;
pub use question::{Difficulty, QuestionKind, QuestionRecord, Subject, SubjectQuestions};
pub use resource::{ResourceBundle, ResourceCategory, ResourceSection, ResourceType};
