//! Rule-driven virtual assistant.
//!
//! DESIGN
//! ======
//! The responder is a static, ordered table of keyword rules checked
//! first-match-wins against the lowercased user input. Matching is plain
//! substring containment, so broad keywords that shadow narrower ones must
//! come first in the table ("book" before "cut", "contact" before "call").
//! Responses that mention business contact details are rendered through
//! `BusinessInfo` rather than hardcoded.
//!
//! Sessions serialize their replies through an async mutex held across the
//! simulated typing delay, so responses always arrive in the order the
//! questions were asked.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::BusinessInfo;

pub const TYPING_DELAY_BASE_MS: u64 = 1000;
pub const TYPING_DELAY_JITTER_MS: u64 = 1000;

// =============================================================================
// MESSAGES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<String>>,
}

impl ChatMessage {
    fn new(content: String, sender: Sender, quick_replies: Option<Vec<String>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            sender,
            timestamp: OffsetDateTime::now_utc(),
            quick_replies,
        }
    }
}

// =============================================================================
// RULE TABLE
// =============================================================================

struct Rule {
    keywords: &'static [&'static str],
    respond: fn(&BusinessInfo) -> String,
    quick_replies: &'static [&'static str],
}

// Order matters: the first rule with any keyword contained in the input wins.
static RULES: &[Rule] = &[
    Rule {
        keywords: &["book", "appointment", "schedule"],
        respond: |_| {
            "I'd be happy to help you book an appointment! You can book online \
             through our booking system or call us directly. What type of service \
             are you interested in?"
                .to_owned()
        },
        quick_replies: &["Hair cutting & styling", "Hair coloring", "Special events", "Call to book"],
    },
    Rule {
        keywords: &["service", "price", "cost"],
        respond: |_| {
            "We offer a variety of hair services including cuts, coloring, \
             treatments, and special event styling. Our services start at $85 for \
             cuts and $150 for color services. Would you like to know more about \
             any specific service?"
                .to_owned()
        },
        quick_replies: &["Hair cutting services", "Color services", "Hair treatments", "View all services"],
    },
    Rule {
        keywords: &["hour", "open", "time"],
        respond: |_| {
            "Our business hours are:\n\n\u{2022} Monday - Friday: 9:00 AM - 7:00 PM\n\
             \u{2022} Saturday: 9:00 AM - 6:00 PM\n\u{2022} Sunday: 10:00 AM - 5:00 PM\n\
             \u{2022} Holidays: By Appointment\n\nWould you like to book an appointment?"
                .to_owned()
        },
        quick_replies: &["Book now", "Call us", "More information"],
    },
    Rule {
        keywords: &["contact", "phone", "address", "location"],
        respond: |biz| {
            format!(
                "Here's how you can reach us:\n\n\u{1f4de} Phone: {}\n\u{1f4e7} Email: {}\n\
                 \u{1f4cd} Address: {}\n\nHow else can I help you?",
                biz.phone, biz.email, biz.address
            )
        },
        quick_replies: &["Book appointment", "View services", "Visit our portfolio"],
    },
    Rule {
        keywords: &["hair cutting", "cut", "styling"],
        respond: |_| {
            "Our signature hair cutting and styling service includes a personal \
             consultation, professional wash & condition, precision cutting, and \
             custom styling. Prices start at $85. Would you like to book a \
             consultation?"
                .to_owned()
        },
        quick_replies: &["Book consultation", "Learn more", "Other services"],
    },
    Rule {
        keywords: &["color", "balayage", "highlight"],
        respond: |_| {
            "We specialize in color transformations including balayage, highlights, \
             full color, and color corrections. Our expert colorists create \
             stunning, natural-looking results. Color services start at $150. \
             Interested in a color consultation?"
                .to_owned()
        },
        quick_replies: &["Book color consultation", "View color portfolio", "Price information"],
    },
    Rule {
        keywords: &["special", "wedding", "event", "prom"],
        respond: |_| {
            "We love creating glamorous looks for special occasions! Our special \
             event styling includes weddings, proms, parties, and other \
             celebrations. Services start at $120 and include a trial run. Ready to \
             look stunning for your special day?"
                .to_owned()
        },
        quick_replies: &["Book trial session", "Wedding services", "View special event portfolio"],
    },
    Rule {
        keywords: &["call", "phone"],
        respond: |biz| {
            format!(
                "You can call us at {}. We're available during our business hours \
                 Monday through Sunday. Our team will be happy to help you book an \
                 appointment or answer any questions!",
                biz.phone
            )
        },
        quick_replies: &["Business hours", "Book online instead", "More questions"],
    },
    Rule {
        keywords: &["thanks", "thank you"],
        respond: |_| {
            "You're very welcome! I'm here whenever you need help. Is there \
             anything else you'd like to know about our services?"
                .to_owned()
        },
        quick_replies: &["View services", "Book appointment", "Contact information"],
    },
];

const DEFAULT_QUICK_REPLIES: &[&str] =
    &["Book an appointment", "View services", "Contact information", "Business hours"];

fn default_response() -> String {
    "I'd be happy to help! I can assist you with booking appointments, learning \
     about our services, getting contact information, or answering questions \
     about our hours. What would you like to know?"
        .to_owned()
}

fn welcome_message(biz: &BusinessInfo) -> String {
    format!(
        "Hi! I'm {}'s virtual assistant. I'm here to help you with booking \
         appointments, learning about our services, or answering any questions \
         you might have. How can I assist you today?",
        biz.name
    )
}

fn owned_replies(replies: &[&str]) -> Vec<String> {
    replies.iter().map(|&r| r.to_owned()).collect()
}

/// Produce the bot reply for one user input. Pure: matching is done on the
/// lowercased input, first matching rule wins, unmatched input gets the
/// generic fallback with the four standard quick replies.
#[must_use]
pub fn respond(biz: &BusinessInfo, input: &str) -> (String, Vec<String>) {
    let input = input.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|kw| input.contains(kw)) {
            return ((rule.respond)(biz), owned_replies(rule.quick_replies));
        }
    }
    (default_response(), owned_replies(DEFAULT_QUICK_REPLIES))
}

/// Simulated typing delay before the bot reply is released.
#[must_use]
pub fn typing_delay() -> Duration {
    let jitter = rand::rng().random_range(0..TYPING_DELAY_JITTER_MS);
    Duration::from_millis(TYPING_DELAY_BASE_MS + jitter)
}

// =============================================================================
// SESSION
// =============================================================================

/// One visitor's conversation. New sessions open with the welcome message.
#[derive(Debug)]
pub struct ChatSession {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
}

impl ChatSession {
    #[must_use]
    pub fn new(biz: &BusinessInfo) -> Self {
        let welcome = ChatMessage::new(
            welcome_message(biz),
            Sender::Bot,
            Some(owned_replies(DEFAULT_QUICK_REPLIES)),
        );
        Self { id: Uuid::new_v4(), messages: vec![welcome] }
    }

    /// Record the user message and the bot reply, returning the reply.
    ///
    /// Callers hold the session lock across the typing delay before invoking
    /// this, which is what keeps replies in question order.
    pub fn exchange(&mut self, biz: &BusinessInfo, input: &str) -> ChatMessage {
        let trimmed = input.trim();
        self.messages.push(ChatMessage::new(trimmed.to_owned(), Sender::User, None));
        let (content, quick_replies) = respond(biz, trimmed);
        let reply = ChatMessage::new(content, Sender::Bot, Some(quick_replies));
        self.messages.push(reply.clone());
        reply
    }
}

#[cfg(test)]
#[path = "chatbot_test.rs"]
mod tests;
