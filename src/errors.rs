use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Please specify a topic (e.g., math, science, history, english, computer science)")]
    MissingTopic,

    #[error(
        "Could not generate questions for '{0}'. Try: math, science, history, english, or computer science"
    )]
    UnsupportedTopic(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingTopic => "MISSING_TOPIC",
            AppError::UnsupportedTopic(_) => "UNSUPPORTED_TOPIC",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::TransportError(_) => "TRANSPORT_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Caller mistakes, as opposed to faults in the server itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::MissingTopic | AppError::UnsupportedTopic(_) | AppError::ValidationError(_)
        )
    }

    /// Tool results are plain text, so failures travel as an `Error:` prefix.
    pub fn to_tool_text(&self) -> String {
        format!("Error: {}", self)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        if err.field_errors().contains_key("topic") {
            AppError::MissingTopic
        } else {
            AppError::ValidationError(err.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::MissingTopic.error_code(), "MISSING_TOPIC");
        assert_eq!(
            AppError::UnsupportedTopic("cooking".into()).error_code(),
            "UNSUPPORTED_TOPIC"
        );
        assert_eq!(
            AppError::InternalError("boom".into()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::MissingTopic.to_tool_text(),
            "Error: Please specify a topic (e.g., math, science, history, english, computer science)"
        );
        assert_eq!(
            AppError::UnsupportedTopic("cooking".into()).to_tool_text(),
            "Error: Could not generate questions for 'cooking'. Try: math, science, history, english, or computer science"
        );
        assert_eq!(
            AppError::InternalError("boom".into()).to_tool_text(),
            "Error: boom"
        );
    }

    #[test]
    fn test_client_errors() {
        assert!(AppError::MissingTopic.is_client_error());
        assert!(!AppError::InternalError("boom".into()).is_client_error());
        assert!(!AppError::TransportError("closed".into()).is_client_error());
    }
}
