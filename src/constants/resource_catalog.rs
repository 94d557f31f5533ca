//! Curated learning resources per category.

use crate::models::domain::{ResourceBundle, ResourceCategory};

pub static RESOURCE_CATALOG: &[(ResourceCategory, ResourceBundle)] = &[
    (ResourceCategory::Math, MATH_RESOURCES),
    (ResourceCategory::Science, SCIENCE_RESOURCES),
    (ResourceCategory::History, HISTORY_RESOURCES),
    (ResourceCategory::English, ENGLISH_RESOURCES),
    (ResourceCategory::ComputerScience, CS_RESOURCES),
    (ResourceCategory::General, GENERAL_RESOURCES),
];

pub const MATH_RESOURCES: ResourceBundle = ResourceBundle {
    videos: &[
        "Khan Academy Math - Comprehensive free video courses for all levels",
        "3Blue1Brown (YouTube) - Visual, intuitive math explanations",
        "PatrickJMT (YouTube) - Clear step-by-step math tutorials",
        "Professor Leonard (YouTube) - Full college-level math lectures",
    ],
    practice: &[
        "Khan Academy Practice - Adaptive practice problems with hints",
        "Paul's Online Math Notes - Practice problems with solutions",
        "IXL Math - Comprehensive practice (free with limits)",
        "Mathway - Problem solver showing step-by-step work",
    ],
    articles: &[
        "BetterExplained - Intuitive math explanations",
        "Math is Fun - Clear explanations with diagrams",
        "Purplemath - Practical algebra help",
        "Wikipedia Math Portal - In-depth mathematical concepts",
    ],
    tips: "Practice daily, show your work step-by-step, understand WHY formulas work (not just memorizing), draw diagrams for word problems, check answers by working backwards",
};

pub const SCIENCE_RESOURCES: ResourceBundle = ResourceBundle {
    videos: &[
        "Khan Academy Science - Biology, Chemistry, Physics courses",
        "CrashCourse (YouTube) - Fast-paced, engaging science videos",
        "Bozeman Science (YouTube) - AP Biology and Chemistry",
        "MIT OpenCourseWare - Free college-level lectures",
    ],
    practice: &[
        "Khan Academy Science Practice - Interactive problems",
        "PhET Simulations - Interactive science simulations",
        "Quizlet - Flashcards for science terms and concepts",
        "Biology Corner - Worksheets and activities",
    ],
    articles: &[
        "Wikipedia Science Portal - Comprehensive articles",
        "HyperPhysics - Physics concepts with diagrams",
        "Biology Online - Life science articles",
        "Science Daily - Current science news and research",
    ],
    tips: "Connect concepts to real life, draw diagrams and label them, use mnemonic devices for memorization, do lab experiments if possible, explain concepts out loud to test understanding",
};

pub const HISTORY_RESOURCES: ResourceBundle = ResourceBundle {
    videos: &[
        "CrashCourse History (YouTube) - Engaging historical overviews",
        "History.com Videos - Documentary clips and series",
        "Extra History (YouTube) - Animated history stories",
        "Epic History TV (YouTube) - Detailed historical documentaries",
    ],
    practice: &[
        "Quizlet History Sets - Flashcards for dates and events",
        "Khan Academy History - Practice questions and quizzes",
        "Sporcle History Quizzes - Fun trivia-style practice",
        "History.com Quizzes - Test your knowledge",
    ],
    articles: &[
        "Wikipedia History Portal - Detailed historical articles",
        "History.com Articles - Well-researched topics",
        "Britannica Online - Encyclopedia entries",
        "National Geographic History - Historical articles with photos",
    ],
    tips: "Create timelines to visualize chronology, connect events to their causes and effects, make flashcards for important dates, relate history to current events, use memory palaces for complex information",
};

pub const ENGLISH_RESOURCES: ResourceBundle = ResourceBundle {
    videos: &[
        "Khan Academy Grammar - Comprehensive grammar lessons",
        "CrashCourse Literature (YouTube) - Book analysis and themes",
        "The Great Courses - Literature and writing lectures",
        "TED-Ed English Lessons - Animated grammar and literature",
    ],
    practice: &[
        "Grammarly - Writing feedback and corrections",
        "Purdue OWL - Writing exercises and examples",
        "Grammar Monster - Interactive grammar quizzes",
        "NoRedInk - Adaptive grammar practice",
    ],
    articles: &[
        "Purdue Online Writing Lab (OWL) - Comprehensive writing guide",
        "Grammar Girl - Quick grammar tips",
        "SparkNotes - Literature guides and analysis",
        "Literary Devices - Explanations with examples",
    ],
    tips: "Read daily for vocabulary and style, practice writing regularly, read your work aloud to catch errors, keep a vocabulary journal, analyze how authors structure their writing",
};

pub const CS_RESOURCES: ResourceBundle = ResourceBundle {
    videos: &[
        "freeCodeCamp (YouTube) - Full courses on web dev, Python, algorithms",
        "CS50 by Harvard - Introduction to Computer Science (free)",
        "Traversy Media (YouTube) - Modern web development tutorials",
        "The Net Ninja (YouTube) - JavaScript, React, and more",
        "Programming with Mosh (YouTube) - Clean, professional tutorials",
    ],
    practice: &[
        "LeetCode - Algorithm and data structure problems",
        "HackerRank - Coding challenges and competitions",
        "Codewars - Gamified coding practice",
        "Exercism - Practice with mentor feedback",
        "CodeSignal - Interview prep and assessments",
    ],
    articles: &[
        "MDN Web Docs - Comprehensive web development documentation",
        "GeeksforGeeks - Algorithms, data structures, interview prep",
        "Real Python - Python tutorials and guides",
        "Dev.to - Community articles on all CS topics",
        "Stack Overflow - Q&A for specific coding problems",
    ],
    tips: "Code every day (consistency over quantity), build projects to apply knowledge, read and understand others' code, debug systematically using print statements or debuggers, comment your code to explain your thinking, break problems into smaller pieces",
};

pub const GENERAL_RESOURCES: ResourceBundle = ResourceBundle {
    videos: &[
        "Khan Academy - Free courses in all subjects",
        "CrashCourse (YouTube) - Fast-paced educational content",
        "TED-Ed - Animated educational videos",
        "MIT OpenCourseWare - Free college-level courses",
    ],
    practice: &[
        "Quizlet - Flashcards for any subject",
        "Khan Academy - Practice in all subjects",
        "Coursera - Free online courses (audit option)",
        "Anki - Spaced repetition flashcard app",
    ],
    articles: &[
        "Wikipedia - Comprehensive encyclopedia",
        "Simple Wikipedia - Easier-to-understand articles",
        "BBC Bitesize - Educational content for all ages",
        "Britannica Online - Reliable encyclopedia",
    ],
    tips: "Space out study sessions (don't cram), teach concepts to others to reinforce learning, take breaks every 25-30 minutes, practice active recall instead of passive reading, get enough sleep for memory consolidation",
};
