//! Built-in phishing simulator scenarios

use serde::{Deserialize, Serialize};

use crate::game::Difficulty;

/// Channel the message arrived on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Sms,
    Whatsapp,
    Email,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sms => "SMS",
            Self::Whatsapp => "WhatsApp",
            Self::Email => "Email",
        }
    }
}

/// Verdict a player assigns to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Suspicious,
    Scam,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Safe, Verdict::Suspicious, Verdict::Scam];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Suspicious => "suspicious",
            Self::Scam => "scam",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "safe" => Some(Self::Safe),
            "suspicious" => Some(Self::Suspicious),
            "scam" => Some(Self::Scam),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message the player has to classify
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: &'static str,
    pub title: &'static str,
    pub channel: Channel,
    pub sender: &'static str,
    pub message: &'static str,
    pub answer: Verdict,
    pub difficulty: Difficulty,
}

/// Feedback shown after classifying a scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioFeedback {
    pub explanation: &'static str,
    pub red_flags: &'static [&'static str],
    pub tactic: &'static str,
    pub advice: &'static str,
}

impl Scenario {
    /// Static feedback keyed on the expected verdict
    pub fn feedback(&self) -> ScenarioFeedback {
        if self.answer == Verdict::Scam {
            ScenarioFeedback {
                explanation: "This message is a scam attempt. Suspicious links and urgent language are clear warning signs.",
                red_flags: &["Suspicious link", "Urgent language", "Requests personal info"],
                tactic: "Uses fear and urgency to pressure the victim",
                advice: "Never click suspicious links. Always verify with the official source.",
            }
        } else {
            ScenarioFeedback {
                explanation: "This message appears legitimate.",
                red_flags: &[],
                tactic: "None",
                advice: "This type of notification is normal, but always verify the source.",
            }
        }
    }
}

pub static SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "poste-1",
        title: "Message from the post office",
        channel: Channel::Sms,
        sender: "PosteTN",
        message: "Dear customer, your parcel is waiting at the post office. Please pay the 15 TND delivery fee at http://poste-tn.xyz/pay to confirm delivery, or the parcel will be returned within 24 hours.",
        answer: Verdict::Scam,
        difficulty: Difficulty::Easy,
    },
    Scenario {
        id: "biat-1",
        title: "Bank alert",
        channel: Channel::Sms,
        sender: "BIAT Bank",
        message: "Security alert: an unauthorised login attempt on your bank account was detected. Secure your account now at http://biat-secure.net/verify or it will be suspended.",
        answer: Verdict::Scam,
        difficulty: Difficulty::Easy,
    },
    Scenario {
        id: "whatsapp-1",
        title: "Verification code request",
        channel: Channel::Whatsapp,
        sender: "Friend",
        message: "Hey bro, a code was sent to your number by mistake, it's for something I'm signing up for. Can you forward it to me? Really urgent!",
        answer: Verdict::Scam,
        difficulty: Difficulty::Medium,
    },
    Scenario {
        id: "steg-1",
        title: "Electricity bill",
        channel: Channel::Sms,
        sender: "STEG",
        message: "Electricity and gas company: your January bill is ready. Amount: 127.500 TND. Due date: 28/01. Pay at http://steg-facture.com/pay",
        answer: Verdict::Scam,
        difficulty: Difficulty::Medium,
    },
    Scenario {
        id: "marketplace-1",
        title: "Marketplace buyer",
        channel: Channel::Whatsapp,
        sender: "Buyer",
        message: "Hi, I want to buy the item you listed on Marketplace. I'll pay by postal transfer. Send me your national ID card number so I can make the transfer.",
        answer: Verdict::Scam,
        difficulty: Difficulty::Medium,
    },
    Scenario {
        id: "job-1",
        title: "Tempting job offer",
        channel: Channel::Email,
        sender: "HR@company-tn.com",
        message: "Congratulations! You have been selected to work with us for 3000 TND a month, from home, only 3 hours a day. To confirm, send a copy of your ID card and a photo to this address.",
        answer: Verdict::Scam,
        difficulty: Difficulty::Easy,
    },
    Scenario {
        id: "operator-1",
        title: "Message from the mobile operator",
        channel: Channel::Sms,
        sender: "Ooredoo",
        message: "Ooredoo: you have used 90% of your data. Get 1 GB free by clicking here: http://ooredoo-bonus.tk/free",
        answer: Verdict::Scam,
        difficulty: Difficulty::Easy,
    },
    Scenario {
        id: "real-bank-1",
        title: "Genuine bank notification",
        channel: Channel::Sms,
        sender: "BanqueTN",
        message: "A withdrawal of 250 TND was made from your account on 15/01 at 14:30 at the ATM on Avenue Habib Bourguiba. For questions, contact your branch.",
        answer: Verdict::Safe,
        difficulty: Difficulty::Hard,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_parsing() {
        assert_eq!(Verdict::from_str("SCAM"), Some(Verdict::Scam));
        assert_eq!(Verdict::from_str(" safe "), Some(Verdict::Safe));
        assert_eq!(Verdict::from_str("Suspicious"), Some(Verdict::Suspicious));
        assert_eq!(Verdict::from_str("maybe"), None);
    }

    #[test]
    fn test_scenario_ids_unique() {
        let mut ids: Vec<_> = SCENARIOS.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SCENARIOS.len());
    }

    #[test]
    fn test_feedback_follows_answer() {
        let scam = SCENARIOS.iter().find(|s| s.answer == Verdict::Scam).unwrap();
        assert!(!scam.feedback().red_flags.is_empty());

        let safe = SCENARIOS.iter().find(|s| s.answer == Verdict::Safe).unwrap();
        assert!(safe.feedback().red_flags.is_empty());
    }
}
