use serde::Serialize;

/// A rendered tool answer together with the category that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyReport {
    pub category: &'static str,
    pub text: String,
}

impl StudyReport {
    pub fn new(category: &'static str, text: String) -> Self {
        Self { category, text }
    }
}
