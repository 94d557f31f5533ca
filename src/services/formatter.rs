//! Plain-text rendering of question sets and resource bundles.
//!
//! The layout is part of the tool contract; clients may parse it.

use crate::{
    constants::study_tips::{GENERAL_STUDY_STRATEGIES, QUESTION_STUDY_TIPS},
    errors::{AppError, AppResult},
    models::domain::{Difficulty, QuestionKind, QuestionRecord, ResourceBundle, ResourceSection, ResourceType},
};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Letter for a zero-based choice index: 0 -> 'A'.
pub fn choice_label(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Renders one question with its 1-based ordinal.
///
/// Fails only for records that break the authoring invariants, which is
/// reported as an internal error rather than rendered half-broken.
pub fn format_question(ordinal: usize, record: &QuestionRecord, show_answer: bool) -> AppResult<String> {
    if !record.is_well_formed() {
        return Err(AppError::InternalError(format!(
            "question '{}' has {} choices and answer index {}",
            record.prompt,
            record.choices.len(),
            record.correct_index
        )));
    }

    let mut out = format!("\nQuestion {}:\n{}\n", ordinal, record.prompt);

    let labelled = match record.kind() {
        QuestionKind::TrueFalse => &record.choices[..2],
        QuestionKind::MultipleChoice => record.choices,
    };
    for (i, choice) in labelled.iter().enumerate() {
        out.push_str(&format!("{}) {}\n", choice_label(i), choice));
    }

    if show_answer {
        let answer = record.choices[record.correct_index];
        out.push_str(&format!(
            "\nAnswer: {}) {}\n",
            choice_label(record.correct_index),
            answer
        ));
        out.push_str(&format!("Explanation: {}\n", record.explanation));
    }

    Ok(out)
}

pub fn format_question_report(
    topic: &str,
    difficulty: Difficulty,
    records: &[QuestionRecord],
) -> AppResult<String> {
    let mut out = format!("STUDY QUESTIONS - {}\n", topic.to_uppercase());
    out.push_str(&format!("Difficulty: {}\n", difficulty.label()));
    out.push_str(&rule());
    out.push('\n');

    for (i, record) in records.iter().enumerate() {
        out.push_str(&format_question(i + 1, record, true)?);
    }

    out.push('\n');
    out.push_str(&rule());
    out.push('\n');
    out.push_str("Study Tips:\n");
    for tip in QUESTION_STUDY_TIPS {
        out.push_str(&format!("- {}\n", tip));
    }

    Ok(out)
}

pub fn format_resource_report(topic: &str, bundle: &ResourceBundle, resource_type: ResourceType) -> String {
    let topic = topic.to_uppercase();

    let mut out = format!("LEARNING RESOURCES - {}\n", topic);
    out.push_str(&rule());
    out.push_str("\n\n");

    let listings = [
        (ResourceSection::Videos, "VIDEO RESOURCES:", bundle.videos),
        (ResourceSection::Practice, "PRACTICE SITES:", bundle.practice),
        (ResourceSection::Articles, "ARTICLES & REFERENCES:", bundle.articles),
    ];
    for (section, heading, entries) in listings {
        if !resource_type.includes(section) {
            continue;
        }
        out.push_str(heading);
        out.push('\n');
        for entry in entries {
            out.push_str(&format!("  - {}\n", entry));
        }
        out.push('\n');
    }

    if resource_type.includes(ResourceSection::Tips) {
        out.push_str(&format!("STUDY TIPS FOR {}:\n", topic));
        out.push_str(bundle.tips);
        out.push_str("\n\n");
    }

    out.push_str(&rule());
    out.push('\n');
    out.push_str("GENERAL STUDY STRATEGIES:\n");
    for (i, strategy) in GENERAL_STUDY_STRATEGIES.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, strategy));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::*;

    #[test]
    fn true_false_uses_a_and_b() {
        let text = format_question(1, &true_false_record(), false).expect("record is well formed");

        assert_eq!(text, "\nQuestion 1:\nThe Earth orbits the Sun.\nA) True\nB) False\n");
        assert!(!text.contains("C)"));
    }

    #[test]
    fn multiple_choice_uses_a_through_d() {
        let text = format_question(3, &four_choice_record(), false).expect("record is well formed");

        for label in ["A) 4", "B) 3", "C) 5", "D) 22"] {
            assert!(text.contains(label), "missing {}", label);
        }
        assert!(!text.contains("E)"));
        assert!(text.starts_with("\nQuestion 3:\n"));
    }

    #[test]
    fn answer_and_explanation_follow_choices() {
        let text = format_question(2, &answer_b_record(), true).expect("record is well formed");

        assert!(text.ends_with("\nAnswer: B) They're\nExplanation: They're means they are\n"));
    }

    #[test]
    fn malformed_record_is_an_internal_error() {
        let broken = QuestionRecord::new("Broken", &["a", "b"], 5, "");
        let err = format_question(1, &broken, true).unwrap_err();

        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn question_report_has_header_and_tips() {
        let records = [four_choice_record(), true_false_record()];
        let text = format_question_report("algebra", Difficulty::Hard, &records).expect("report renders");

        assert!(text.starts_with(&format!(
            "STUDY QUESTIONS - ALGEBRA\nDifficulty: Hard\n{}\n\nQuestion 1:\n",
            "=".repeat(60)
        )));
        assert!(text.contains("\nQuestion 2:\n"));
        assert!(text.ends_with(
            "Study Tips:\n\
             - Cover the answers and try to solve each question first\n\
             - Review the explanations carefully\n\
             - Practice similar problems to reinforce learning\n\
             - If you get one wrong, understand why before moving on\n"
        ));
    }

    #[test]
    fn resource_report_for_videos_only() {
        let text = format_resource_report("python", &sample_bundle(), ResourceType::Videos);

        assert!(text.starts_with("LEARNING RESOURCES - PYTHON\n"));
        assert!(text.contains("VIDEO RESOURCES:\n  - Video one\n  - Video two\n\n"));
        assert!(!text.contains("PRACTICE SITES:"));
        assert!(!text.contains("ARTICLES & REFERENCES:"));
        assert!(!text.contains("STUDY TIPS FOR"));
        assert!(text.ends_with("8. Get enough sleep - it helps memory consolidation\n"));
    }

    #[test]
    fn resource_report_for_all_includes_tips() {
        let text = format_resource_report("python", &sample_bundle(), ResourceType::All);

        let videos = text.find("VIDEO RESOURCES:").expect("videos section");
        let practice = text.find("PRACTICE SITES:").expect("practice section");
        let articles = text.find("ARTICLES & REFERENCES:").expect("articles section");
        let tips = text.find("STUDY TIPS FOR PYTHON:\nKeep at it\n\n").expect("tips section");
        assert!(videos < practice && practice < articles && articles < tips);
    }

    #[test]
    fn resource_report_for_books_is_only_the_footer() {
        let text = format_resource_report("art", &sample_bundle(), ResourceType::Books);

        let expected_prefix = format!("LEARNING RESOURCES - ART\n{rule}\n\n{rule}\nGENERAL STUDY STRATEGIES:\n", rule = "=".repeat(60));
        assert!(text.starts_with(&expected_prefix));
        assert_eq!(text.lines().filter(|l| l.starts_with(char::is_numeric)).count(), 8);
    }

    #[test]
    fn choice_labels_are_sequential_letters() {
        assert_eq!(choice_label(0), 'A');
        assert_eq!(choice_label(3), 'D');
    }
}
