use serde::Serialize;

/// A single authored quiz question.
///
/// Records are compiled into the binary and never mutated. Two choices render
/// as a True/False question, four as lettered multiple choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    pub prompt: &'static str,
    pub choices: &'static [&'static str],
    pub correct_index: usize,
    pub explanation: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum QuestionKind {
    TrueFalse,      // two choices
    MultipleChoice, // lettered A-D
}

impl QuestionRecord {
    pub const fn new(
        prompt: &'static str,
        choices: &'static [&'static str],
        correct_index: usize,
        explanation: &'static str,
    ) -> Self {
        Self {
            prompt,
            choices,
            correct_index,
            explanation,
        }
    }

    pub fn kind(&self) -> QuestionKind {
        if self.choices.len() == 2 {
            QuestionKind::TrueFalse
        } else {
            QuestionKind::MultipleChoice
        }
    }

    pub fn correct_choice(&self) -> Option<&'static str> {
        self.choices.get(self.correct_index).copied()
    }

    /// Checks the authoring invariants: 2 or 4 choices and an in-range answer.
    pub fn is_well_formed(&self) -> bool {
        matches!(self.choices.len(), 2 | 4) && self.correct_index < self.choices.len()
    }
}

/// Subjects that have an authored question bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    Science,
    History,
    English,
    ComputerScience,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Math,
        Subject::Science,
        Subject::History,
        Subject::English,
        Subject::ComputerScience,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::History => "history",
            Subject::English => "english",
            Subject::ComputerScience => "cs",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parses a tier name, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Unknown tiers fall back to medium rather than failing the request.
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// All authored questions for one subject, grouped by tier.
#[derive(Clone, Copy, Debug)]
pub struct SubjectQuestions {
    pub subject: Subject,
    pub tiers: &'static [(Difficulty, &'static [QuestionRecord])],
}

impl SubjectQuestions {
    pub fn tier(&self, difficulty: Difficulty) -> Option<&'static [QuestionRecord]> {
        self.tiers
            .iter()
            .find(|(tier, _)| *tier == difficulty)
            .map(|(_, records)| *records)
    }
}
