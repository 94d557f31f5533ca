pub mod question_bank;
pub mod resource_catalog;
pub mod study_tips;

pub use question_bank::QUESTION_BANK;
pub use resource_catalog::RESOURCE_CATALOG;
