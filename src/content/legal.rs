//! Built-in cyber-law questions

use serde::Serialize;

/// One answer option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalOption {
    pub label: &'static str,
    pub correct: bool,
}

/// Multiple-choice question about cyber law
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalQuestion {
    pub id: u32,
    pub question: &'static str,
    /// Exactly one option is correct
    pub options: &'static [LegalOption],
    pub explanation: &'static str,
    /// Cited law or article
    pub law: &'static str,
}

impl LegalQuestion {
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.correct)
    }

    pub fn is_correct(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|o| o.correct)
    }
}

const fn opt(label: &'static str, correct: bool) -> LegalOption {
    LegalOption { label, correct }
}

pub static LEGAL_QUESTIONS: &[LegalQuestion] = &[
    LegalQuestion {
        id: 1,
        question: "Is accessing someone's account without permission a crime in Tunisia?",
        options: &[
            opt("Yes, it's a punishable crime", true),
            opt("No, if I didn't steal anything", false),
            opt("Only if it's a bank account", false),
        ],
        explanation: "Unauthorized access to a computer system is a crime under Tunisian law, even if no material damage occurs. Penalties can include prison and fines.",
        law: "Article 199 bis - Penal Code",
    },
    LegalQuestion {
        id: 2,
        question: "Is sharing someone's personal photos without consent legal?",
        options: &[
            opt("Yes, if the photos are normal", false),
            opt("No, it's a privacy violation and punishable", true),
            opt("Yes, if you're their friend", false),
        ],
        explanation: "Publishing or sharing private photos without the owner's consent is a privacy violation punishable under Tunisian law.",
        law: "Personal Data Protection Law 2004",
    },
    LegalQuestion {
        id: 3,
        question: "Is impersonating someone online considered a crime?",
        options: &[
            opt("No, it's just a fake account", false),
            opt("Only if used for financial fraud", false),
            opt("Yes, it's punishable even without financial harm", true),
        ],
        explanation: "Digitally impersonating someone is a crime under Tunisian law. Creating a fake account in someone's name can lead to imprisonment.",
        law: "Article 199 ter - Penal Code",
    },
    LegalQuestion {
        id: 4,
        question: "Is using your neighbor's WiFi without permission legal?",
        options: &[
            opt("Yes, if there's no password", false),
            opt("No, it's unauthorized access to a communication system", true),
            opt("Yes, WiFi is public property", false),
        ],
        explanation: "Using someone's internet without permission is unauthorized access. Even if the network is unprotected, it's private property.",
        law: "Telecommunications Law 2001",
    },
    LegalQuestion {
        id: 5,
        question: "If you discover a security vulnerability in a government website, can you exploit it?",
        options: &[
            opt("Yes, to help them fix it", false),
            opt("No, you should report it without exploiting it", true),
            opt("Yes, if I don't cause damage", false),
        ],
        explanation: "Even with good intentions, exploiting a security vulnerability without prior authorization is a crime. The correct approach is to report it to the relevant authority or Tunisian CERT.",
        law: "Article 199 bis - Penal Code",
    },
    LegalQuestion {
        id: 6,
        question: "Is sending threatening messages via Facebook or WhatsApp a crime?",
        options: &[
            opt("No, it's just words on the internet", false),
            opt("Only if you carry out the threat", false),
            opt("Yes, digital threats are crimes like direct threats", true),
        ],
        explanation: "Digital threats carry the same legal weight as direct threats. The sender can be prosecuted even if the threat was made online.",
        law: "Article 222 - Penal Code",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_question_has_one_correct_option() {
        for q in LEGAL_QUESTIONS {
            let correct = q.options.iter().filter(|o| o.correct).count();
            assert_eq!(correct, 1, "question {} has {} correct options", q.id, correct);
        }
    }

    #[test]
    fn test_is_correct_out_of_range() {
        let q = &LEGAL_QUESTIONS[0];
        assert!(q.is_correct(0));
        assert!(!q.is_correct(1));
        assert!(!q.is_correct(99));
    }
}
