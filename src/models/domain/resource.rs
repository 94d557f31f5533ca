use serde::Serialize;

use crate::models::domain::question::Subject;

/// Curated study links and tips for one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceBundle {
    pub videos: &'static [&'static str],
    pub practice: &'static [&'static str],
    pub articles: &'static [&'static str],
    pub tips: &'static str,
}

/// Resource lookup always lands somewhere, so it has a `General` fallback
/// that the question bank does not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Math,
    Science,
    History,
    English,
    ComputerScience,
    General,
}

impl ResourceCategory {
    pub fn key(&self) -> &'static str {
        match self {
            ResourceCategory::Math => "math",
            ResourceCategory::Science => "science",
            ResourceCategory::History => "history",
            ResourceCategory::English => "english",
            ResourceCategory::ComputerScience => "cs",
            ResourceCategory::General => "general",
        }
    }
}

impl From<Subject> for ResourceCategory {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::Math => ResourceCategory::Math,
            Subject::Science => ResourceCategory::Science,
            Subject::History => ResourceCategory::History,
            Subject::English => ResourceCategory::English,
            Subject::ComputerScience => ResourceCategory::ComputerScience,
        }
    }
}

/// Sections a resource report can contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceSection {
    Videos,
    Practice,
    Articles,
    Tips,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Videos,
    Articles,
    Practice,
    // Accepted as input, but no bundle carries a books section.
    Books,
    #[default]
    All,
}

impl ResourceType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "videos" => Some(ResourceType::Videos),
            "articles" => Some(ResourceType::Articles),
            "practice" => Some(ResourceType::Practice),
            "books" => Some(ResourceType::Books),
            "all" => Some(ResourceType::All),
            _ => None,
        }
    }

    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Videos => "videos",
            ResourceType::Articles => "articles",
            ResourceType::Practice => "practice",
            ResourceType::Books => "books",
            ResourceType::All => "all",
        }
    }

    /// Whether a report for this type renders `section`. Tips only appear in
    /// the full listing.
    pub fn includes(&self, section: ResourceSection) -> bool {
        match (self, section) {
            (ResourceType::All, _) => true,
            (ResourceType::Videos, ResourceSection::Videos) => true,
            (ResourceType::Practice, ResourceSection::Practice) => true,
            (ResourceType::Articles, ResourceSection::Articles) => true,
            _ => false,
        }
    }
}
