//! Quiz decks and answer evaluation
//!
//! Turns built-in content into a uniform question list for a play session and
//! resolves a player's choice to correct / incorrect plus feedback. Correctness
//! is settled here; XP is the ledger's job.

use serde::{Deserialize, Serialize};

use crate::content::{LegalQuestion, Scenario, Verdict, LEGAL_QUESTIONS, SCENARIOS};
use crate::game::Difficulty;

/// Which flow a session plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    /// Classify messages as safe, suspicious or scam
    Simulator,
    /// Cyber-law multiple choice
    Legal,
}

impl QuizMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simulator => "simulator",
            Self::Legal => "legal",
        }
    }
}

/// A question from either flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    Scenario(&'static Scenario),
    Legal(&'static LegalQuestion),
}

/// Result of answering (or timing out on) a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: bool,
    /// Label of the expected choice
    pub expected: &'static str,
    pub explanation: &'static str,
    pub red_flags: &'static [&'static str],
    pub advice: Option<&'static str>,
    pub law: Option<&'static str>,
}

impl Question {
    /// Legal questions carry no difficulty of their own and score as medium
    pub fn difficulty(&self) -> Difficulty {
        match self {
            Self::Scenario(s) => s.difficulty,
            Self::Legal(_) => Difficulty::Medium,
        }
    }

    /// Labels of the selectable answers, in display order
    pub fn choices(&self) -> Vec<&'static str> {
        match self {
            Self::Scenario(_) => Verdict::ALL.iter().map(|v| v.as_str()).collect(),
            Self::Legal(q) => q.options.iter().map(|o| o.label).collect(),
        }
    }

    /// Parse player input: a 1-based choice number, or a verdict name for scenarios
    pub fn parse_choice(&self, input: &str) -> Option<usize> {
        let input = input.trim();
        let count = self.choices().len();

        if let Ok(n) = input.parse::<usize>() {
            return (1..=count).contains(&n).then(|| n - 1);
        }

        match self {
            Self::Scenario(_) => {
                let verdict = Verdict::from_str(input)?;
                Verdict::ALL.iter().position(|v| *v == verdict)
            }
            Self::Legal(_) => None,
        }
    }

    /// Evaluate a chosen index
    pub fn evaluate(&self, choice: usize) -> Evaluation {
        let correct = match self {
            Self::Scenario(s) => Verdict::ALL.get(choice) == Some(&s.answer),
            Self::Legal(q) => q.is_correct(choice),
        };
        Evaluation {
            correct,
            ..self.reveal()
        }
    }

    /// Feedback for a question that went unanswered; never correct
    pub fn reveal(&self) -> Evaluation {
        match self {
            Self::Scenario(s) => {
                let feedback = s.feedback();
                Evaluation {
                    correct: false,
                    expected: s.answer.as_str(),
                    explanation: feedback.explanation,
                    red_flags: feedback.red_flags,
                    advice: Some(feedback.advice),
                    law: None,
                }
            }
            Self::Legal(q) => Evaluation {
                correct: false,
                expected: q
                    .correct_index()
                    .and_then(|i| q.options.get(i))
                    .map(|o| o.label)
                    .unwrap_or(""),
                explanation: q.explanation,
                red_flags: &[],
                advice: None,
                law: Some(q.law),
            },
        }
    }
}

/// Ordered question list for one session
#[derive(Debug, Clone)]
pub struct QuizDeck {
    mode: QuizMode,
    questions: Vec<Question>,
}

impl QuizDeck {
    /// Deck of built-in content, optionally truncated to `limit` questions
    pub fn new(mode: QuizMode, limit: Option<usize>) -> Self {
        let mut questions: Vec<Question> = match mode {
            QuizMode::Simulator => SCENARIOS.iter().map(Question::Scenario).collect(),
            QuizMode::Legal => LEGAL_QUESTIONS.iter().map(Question::Legal).collect(),
        };
        if let Some(limit) = limit {
            questions.truncate(limit);
        }
        Self { mode, questions }
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_limit() {
        assert_eq!(QuizDeck::new(QuizMode::Simulator, None).len(), SCENARIOS.len());
        assert_eq!(QuizDeck::new(QuizMode::Legal, Some(2)).len(), 2);
        assert_eq!(QuizDeck::new(QuizMode::Legal, Some(100)).len(), LEGAL_QUESTIONS.len());
        assert!(QuizDeck::new(QuizMode::Legal, Some(0)).is_empty());
    }

    #[test]
    fn test_scenario_choice_parsing() {
        let q = Question::Scenario(&SCENARIOS[0]);
        assert_eq!(q.parse_choice("1"), Some(0));
        assert_eq!(q.parse_choice("3"), Some(2));
        assert_eq!(q.parse_choice("4"), None);
        assert_eq!(q.parse_choice("0"), None);
        assert_eq!(q.parse_choice("scam"), Some(2));
        assert_eq!(q.parse_choice("what"), None);
    }

    #[test]
    fn test_scenario_evaluation() {
        let scenario = SCENARIOS.iter().find(|s| s.answer == Verdict::Scam).unwrap();
        let q = Question::Scenario(scenario);
        assert!(q.evaluate(2).correct);
        assert!(!q.evaluate(1).correct);
        assert_eq!(q.evaluate(0).expected, "scam");
        assert_eq!(q.difficulty(), scenario.difficulty);
    }

    #[test]
    fn test_legal_evaluation() {
        let q = Question::Legal(&LEGAL_QUESTIONS[0]);
        assert_eq!(q.difficulty(), Difficulty::Medium);
        assert_eq!(q.parse_choice("scam"), None);
        assert!(q.evaluate(0).correct);
        assert!(!q.evaluate(1).correct);
        assert_eq!(q.reveal().law, Some("Article 199 bis - Penal Code"));
        assert!(!q.reveal().correct);
    }
}
