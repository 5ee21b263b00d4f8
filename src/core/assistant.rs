//! # Safety Assistant
//!
//! Canned chat replies. The user's message is lower-cased and matched
//! against keyword groups in order; the first group with a hit answers.
//! Anything unmatched gets the fallback reply.

struct ReplyRule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const RULES: &[ReplyRule] = &[
    ReplyRule {
        keywords: &["help", "emergency", "danger", "attack", "sos"],
        reply: "If you are in immediate danger, hold the SOS button on Home or call 112. \
                Move towards a lit, crowded place if you can.",
    },
    ReplyRule {
        keywords: &["follow", "stalk", "creepy"],
        reply: "Walk into a shop, hotel lobby or police booth and stay there. \
                Start a check-in so a trusted contact is alerted if you go quiet.",
    },
    ReplyRule {
        keywords: &["taxi", "cab", "auto", "ride"],
        reply: "Use app-based rides where possible, share the trip with a contact, \
                and check the plate number before getting in.",
    },
    ReplyRule {
        keywords: &["scam", "tout", "cheat", "fake"],
        reply: "Common scams: 'closed' hotels, fake ticket offices, gem resale offers. \
                Politely refuse and report it on the Report tab.",
    },
    ReplyRule {
        keywords: &["stolen", "theft", "pickpocket", "lost"],
        reply: "File a report with the nearest police station (see Zones) and block \
                your cards. Log it on the Report tab for your records.",
    },
    ReplyRule {
        keywords: &["night", "dark", "late"],
        reply: "After dark, stick to main roads, avoid the high-risk zones listed \
                on the Zones tab, and keep your phone charged.",
    },
    ReplyRule {
        keywords: &["hello", "hi", "namaste", "hey"],
        reply: "Namaste! Ask me about scams, taxis, night travel, or what to do if \
                you feel unsafe.",
    },
];

const FALLBACK: &str = "I can help with safety tips for scams, transport, night travel \
                        and emergencies. Try asking about one of those.";

/// Reply for a user message. Never empty.
pub fn reply(message: &str) -> String {
    let normalized = message.to_lowercase();
    let words: Vec<&str> = normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    RULES
        .iter()
        .find(|rule| {
            rule.keywords
                .iter()
                .any(|k| words.iter().any(|w| w.starts_with(*k)))
        })
        .map(|rule| rule.reply.to_string())
        .unwrap_or_else(|| FALLBACK.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// Chat transcript for the Assistant tab. Not part of the shared store.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Append the user's message and the assistant's reply. Blank input is ignored.
    pub fn ask(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: text.to_string(),
        });
        self.messages.push(ChatMessage {
            speaker: Speaker::Assistant,
            text: reply(text),
        });
        self.messages.last()
    }
}
