use crate::models::domain::{QuestionRecord, ResourceBundle};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A lettered question whose answer is the first choice.
    pub fn four_choice_record() -> QuestionRecord {
        QuestionRecord::new("What is 2 + 2?", &["4", "3", "5", "22"], 0, "Add the numbers")
    }

    pub fn true_false_record() -> QuestionRecord {
        QuestionRecord::new(
            "The Earth orbits the Sun.",
            &["True", "False"],
            0,
            "The Sun is at the centre of the solar system",
        )
    }

    /// A lettered question whose answer is not the first choice.
    pub fn answer_b_record() -> QuestionRecord {
        QuestionRecord::new(
            "Which is correct?",
            &["Their", "They're", "There", "Thier"],
            1,
            "They're means they are",
        )
    }

    pub fn sample_bundle() -> ResourceBundle {
        ResourceBundle {
            videos: &["Video one", "Video two"],
            practice: &["Practice one"],
            articles: &["Article one"],
            tips: "Keep at it",
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    /// Asserts that a tool answer is an error text.
    pub fn assert_error_text(text: &str) {
        assert!(text.starts_with("Error:"), "Expected error text, got: {}", text);
    }

    /// Asserts that a tool answer is a successful report.
    pub fn assert_success_text(text: &str) {
        assert!(!text.starts_with("Error:"), "Expected success text, got: {}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_are_well_formed() {
        assert!(four_choice_record().is_well_formed());
        assert!(true_false_record().is_well_formed());
        assert!(answer_b_record().is_well_formed());
        assert_eq!(answer_b_record().correct_choice(), Some("They're"));
    }

    #[test]
    fn test_sample_bundle() {
        let bundle = sample_bundle();
        assert_eq!(bundle.videos.len(), 2);
        assert_eq!(bundle.tips, "Keep at it");
    }
}
