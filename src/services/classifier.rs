//! Maps free-text topics onto categories.
//!
//! Each table is scanned in order and the first category with a keyword that
//! occurs anywhere in the lowercased topic wins. Matching is plain substring
//! containment, so "economics" lands in computer science through "cs".

use crate::models::domain::{ResourceCategory, Subject};

const MATH_KEYWORDS: &[&str] = &["math", "algebra", "geometry", "calculus"];
const SCIENCE_KEYWORDS: &[&str] = &["science", "biology", "chemistry", "physics"];
const HISTORY_KEYWORDS: &[&str] = &["history", "social"];
const ENGLISH_KEYWORDS: &[&str] = &["english", "grammar", "writing", "literature"];
const CS_KEYWORDS: &[&str] = &[
    "computer",
    "programming",
    "coding",
    "cs",
    "algorithm",
    "data structure",
    "python",
    "javascript",
    "java",
    "software",
    "web dev",
];

/// Question lookup has no fallback: an unmatched topic has no questions.
pub static QUESTION_KEYWORDS: &[(Subject, &[&str])] = &[
    (Subject::Math, MATH_KEYWORDS),
    (Subject::Science, SCIENCE_KEYWORDS),
    (Subject::History, HISTORY_KEYWORDS),
    (Subject::English, ENGLISH_KEYWORDS),
    (Subject::ComputerScience, CS_KEYWORDS),
];

/// Resource lookup falls back to [`ResourceCategory::General`].
pub static RESOURCE_KEYWORDS: &[(ResourceCategory, &[&str])] = &[
    (ResourceCategory::Math, MATH_KEYWORDS),
    (ResourceCategory::Science, SCIENCE_KEYWORDS),
    (ResourceCategory::History, HISTORY_KEYWORDS),
    (ResourceCategory::English, ENGLISH_KEYWORDS),
    (ResourceCategory::ComputerScience, CS_KEYWORDS),
];

pub fn classify_for_questions(topic: &str) -> Option<Subject> {
    first_match(QUESTION_KEYWORDS, topic)
}

pub fn classify_for_resources(topic: &str) -> ResourceCategory {
    first_match(RESOURCE_KEYWORDS, topic).unwrap_or(ResourceCategory::General)
}

fn first_match<K: Copy>(table: &[(K, &[&str])], topic: &str) -> Option<K> {
    let topic = topic.to_lowercase();
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| topic.contains(keyword)))
        .map(|(category, _)| *category)
}
