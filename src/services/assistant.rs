//! Scripted study-abroad assistant.
//!
//! Replies come from an ordered rule list: the first rule with a keyword
//! contained in the lower-cased message wins. There is no inference.

use serde::Serialize;

pub const GREETING: &str = "I'm UniQuest AI, your personal study abroad assistant! I can help you with university requirements, application processes, scholarships, visa information, and more. What would you like to know?";

pub const FALLBACK: &str = "That's a great question! I recommend checking specific university websites for up-to-date info.";

const GREETING_SUGGESTIONS: [&str; 4] = [
    "Tell me about university requirements",
    "Help me find scholarships",
    "What are the best universities for my field?",
    "Explain the application process",
];

const FOLLOW_UP_SUGGESTIONS: [&str; 4] = [
    "Tell me more about this",
    "What are the alternatives?",
    "How can I improve my chances?",
    "What documents do I need?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseRule {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl ResponseRule {
    fn applies_to(&self, message: &str) -> bool {
        self.keywords.iter().any(|k| message.contains(k))
    }
}

const DEFAULT_RULES: [ResponseRule; 5] = [
    ResponseRule {
        topic: "ielts",
        keywords: &["ielts", "toefl"],
        response: "For Computer Science at Stanford, international students typically need an IELTS score of 7.0+ with no band below 6.5. TOEFL 100+ is also accepted.",
    },
    ResponseRule {
        topic: "gpa",
        keywords: &["gpa", "grade"],
        response: "Oxford Engineering typically requires a GPA of 3.7+, competitive applicants usually 3.8+. They also consider coursework rigor and research experience.",
    },
    ResponseRule {
        topic: "tuition",
        keywords: &["tuition", "fee"],
        response: "UK tuition fees vary by university and program, from £20,000-£50,000/year depending on the university.",
    },
    ResponseRule {
        topic: "scholarships",
        keywords: &["scholarship"],
        response: "There are many scholarships including Commonwealth, Chevening, and university-specific awards for Indian students.",
    },
    ResponseRule {
        topic: "programs",
        keywords: &["program", "ai", "ml", "computer science"],
        response: "For AI/ML programs, consider Stanford, MIT, CMU, University of Toronto, and ETH Zurich.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Topic of the rule that fired, `None` for the fallback.
    pub topic: Option<&'static str>,
    pub content: &'static str,
    pub suggestions: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct ScriptedAssistant {
    rules: Vec<ResponseRule>,
}

impl Default for ScriptedAssistant {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

impl ScriptedAssistant {
    pub fn new(rules: Vec<ResponseRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    pub fn greeting(&self) -> Reply {
        Reply {
            topic: None,
            content: GREETING,
            suggestions: GREETING_SUGGESTIONS.to_vec(),
        }
    }

    /// Reply to a user message. Blank messages get no reply.
    pub fn reply(&self, message: &str) -> Option<Reply> {
        if message.trim().is_empty() {
            return None;
        }

        let lowered = message.to_lowercase();
        let rule = self.rules.iter().find(|r| r.applies_to(&lowered));
        tracing::debug!(
            "Assistant rule for message: {}",
            rule.map_or("fallback", |r| r.topic)
        );

        Some(Reply {
            topic: rule.map(|r| r.topic),
            content: rule.map_or(FALLBACK, |r| r.response),
            suggestions: FOLLOW_UP_SUGGESTIONS.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(message: &str) -> Option<&'static str> {
        ScriptedAssistant::default().reply(message).unwrap().topic
    }

    #[test]
    fn test_keyword_topics() {
        assert_eq!(topic("What TOEFL score do I need?"), Some("ielts"));
        assert_eq!(topic("Is my GPA good enough?"), Some("gpa"));
        assert_eq!(topic("How much are the fees?"), Some("tuition"));
        assert_eq!(topic("Any scholarships for me?"), Some("scholarships"));
        assert_eq!(topic("Best computer science schools"), Some("programs"));
    }

    #[test]
    fn test_rules_are_evaluated_in_order() {
        // ielts 規則排在 gpa 之前
        assert_eq!(topic("IELTS or GPA, which matters more?"), Some("ielts"));
        // "fee" 先於 "scholarship"
        assert_eq!(topic("Do scholarships cover the fee?"), Some("tuition"));
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "ai" inside "maintain" still hits the programs rule
        assert_eq!(topic("How do I maintain my visa?"), Some("programs"));
    }

    #[test]
    fn test_fallback_and_blank() {
        let assistant = ScriptedAssistant::default();
        let reply = assistant.reply("Where is the library?").unwrap();
        assert_eq!(reply.topic, None);
        assert_eq!(reply.content, FALLBACK);
        assert_eq!(reply.suggestions.len(), 4);

        assert!(assistant.reply("   ").is_none());
    }

    #[test]
    fn test_greeting() {
        let greeting = ScriptedAssistant::default().greeting();
        assert_eq!(greeting.content, GREETING);
        assert_eq!(greeting.suggestions[1], "Help me find scholarships");
    }
}
