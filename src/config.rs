/// Bounds applied to the `count` argument of question requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionPolicy {
    pub default_count: usize,
    pub min_count: usize,
    pub max_count: usize,
}

impl Default for QuestionPolicy {
    fn default() -> Self {
        Self {
            default_count: 5,
            min_count: 1,
            max_count: 10,
        }
    }
}

impl QuestionPolicy {
    /// Parses a requested count. Blank, unparsable and out-of-range values
    /// all resolve to the default instead of failing the request.
    pub fn resolve_count(&self, raw: &str) -> usize {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return self.default_count;
        }

        match trimmed.parse::<i64>() {
            Ok(n) if n >= self.min_count as i64 && n <= self.max_count as i64 => n as usize,
            _ => self.default_count,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_name: String,
    pub server_version: String,
    pub instructions: String,
    pub log_filter: String,
    pub question_policy: QuestionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_name: "study".to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: "Study helper: generate practice questions with answers and \
                           explanations, or find learning resources for a topic."
                .to_string(),
            log_filter: "info".to_string(),
            question_policy: QuestionPolicy::default(),
        }
    }
}

impl Config {
    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            server_name: "study-test".to_string(),
            server_version: "0.0.0".to_string(),
            instructions: "test instructions".to_string(),
            log_filter: "debug".to_string(),
            question_policy: QuestionPolicy::default(),
        }
    }
}
