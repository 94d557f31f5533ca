pub mod classifier;
pub mod formatter;
pub mod question_service;
pub mod resource_service;

pub use question_service::QuestionService;
pub use resource_service::ResourceService;
