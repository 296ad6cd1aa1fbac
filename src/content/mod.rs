//! Built-in training content

mod legal;
mod scenarios;

pub use legal::{LegalOption, LegalQuestion, LEGAL_QUESTIONS};
pub use scenarios::{Channel, Scenario, ScenarioFeedback, Verdict, SCENARIOS};
