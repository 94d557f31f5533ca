//! Fixed footers appended to every report.

/// Printed after every question set.
pub const QUESTION_STUDY_TIPS: [&str; 4] = [
    "Cover the answers and try to solve each question first",
    "Review the explanations carefully",
    "Practice similar problems to reinforce learning",
    "If you get one wrong, understand why before moving on",
];

/// Printed after every resource listing, whatever sections were requested.
pub const GENERAL_STUDY_STRATEGIES: [&str; 8] = [
    "Set specific goals for each study session",
    "Eliminate distractions (phone, TV, etc.)",
    "Use active learning (practice, not just reading)",
    "Take regular breaks (Pomodoro technique: 25 min work, 5 min break)",
    "Review material multiple times over several days",
    "Test yourself frequently to reinforce memory",
    "Study in a dedicated, comfortable space",
    "Get enough sleep - it helps memory consolidation",
];
