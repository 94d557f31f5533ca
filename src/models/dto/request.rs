use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::config::QuestionPolicy;
use crate::errors::AppResult;
use crate::models::domain::{Difficulty, ResourceType};

/// Arguments of the `generate_study_questions` tool. Every field is a string
/// so that hosts which only pass strings can still call it.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, JsonSchema)]
pub struct GenerateQuestionsRequest {
    /// Subject to study, e.g. "algebra", "biology" or "python".
    #[serde(default)]
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,

    /// One of "easy", "medium" or "hard". Anything else means "medium".
    #[serde(default = "default_difficulty")]
    pub difficulty: String,

    /// Number of questions, 1 to 10. Anything else means 5.
    #[serde(default = "default_count")]
    pub count: String,
}

impl Default for GenerateQuestionsRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            difficulty: default_difficulty(),
            count: default_count(),
        }
    }
}

/// Arguments of the `find_study_resources` tool.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, JsonSchema)]
pub struct FindResourcesRequest {
    /// Subject to find learning material for. Unknown subjects get general resources.
    #[serde(default)]
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,

    /// One of "videos", "articles", "practice", "books" or "all". Anything else means "all".
    #[serde(default = "default_resource_type")]
    pub resource_type: String,
}

impl Default for FindResourcesRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            resource_type: default_resource_type(),
        }
    }
}

/// A question request after validation and coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    pub topic: String,
    pub difficulty: Difficulty,
    pub count: usize,
}

impl QuestionQuery {
    pub fn from_request(request: &GenerateQuestionsRequest, policy: &QuestionPolicy) -> AppResult<Self> {
        request.validate()?;

        Ok(Self {
            topic: request.topic.trim().to_string(),
            difficulty: Difficulty::parse_or_default(&request.difficulty),
            count: policy.resolve_count(&request.count),
        })
    }
}

/// A resource request after validation and coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    pub topic: String,
    pub resource_type: ResourceType,
}

impl ResourceQuery {
    pub fn from_request(request: &FindResourcesRequest) -> AppResult<Self> {
        request.validate()?;

        Ok(Self {
            topic: request.topic.trim().to_string(),
            resource_type: ResourceType::parse_or_default(&request.resource_type),
        })
    }
}

fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        return Err(ValidationError::new("blank_topic"));
    }
    Ok(())
}

fn default_difficulty() -> String {
    Difficulty::default().as_str().to_string()
}

fn default_count() -> String {
    QuestionPolicy::default().default_count.to_string()
}

fn default_resource_type() -> String {
    ResourceType::default().as_str().to_string()
}
