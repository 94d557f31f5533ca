pub mod study_handler;

pub use study_handler::{find_study_resources, generate_study_questions};
