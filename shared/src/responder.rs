//! Scripted advisor replies used whenever the remote completion is unavailable.

use rand::Rng;
use thiserror::Error;

/// Keyword triggers and the canned replies they unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub responses: &'static [&'static str],
}

impl ResponseCategory {
    /// `lowered` must already be lower-cased. Substring match, not word match.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("fallback pool is empty")]
    EmptyFallback,
    #[error("category '{0}' has no replies")]
    EmptyCategory(&'static str),
}

/// A reply script whose every pool holds at least one reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseScript {
    categories: &'static [ResponseCategory],
    fallback: &'static [&'static str],
}

impl Default for ResponseScript {
    fn default() -> Self {
        Self::concierge()
    }
}

impl ResponseScript {
    pub fn new(
        categories: &'static [ResponseCategory],
        fallback: &'static [&'static str],
    ) -> Result<Self, ScriptError> {
        if fallback.is_empty() {
            return Err(ScriptError::EmptyFallback);
        }
        if let Some(empty) = categories.iter().find(|c| c.responses.is_empty()) {
            return Err(ScriptError::EmptyCategory(empty.name));
        }
        Ok(Self {
            categories,
            fallback,
        })
    }

    /// The built-in advisor script. Every one of its pools is non-empty.
    #[must_use]
    pub fn concierge() -> Self {
        Self {
            categories: CONCIERGE_CATEGORIES,
            fallback: CONCIERGE_FALLBACK,
        }
    }

    /// First category in declaration order whose keywords appear in the message.
    #[must_use]
    pub fn match_category(&self, message: &str) -> Option<&'static ResponseCategory> {
        let lowered = message.to_lowercase();
        self.categories
            .iter()
            .find(|category| category.matches(&lowered))
    }

    /// The reply pool the message draws from: the matched category, else the fallback set.
    #[must_use]
    pub fn pool_for(&self, message: &str) -> &'static [&'static str] {
        self.match_category(message)
            .map_or(self.fallback, |category| category.responses)
    }

    /// Picks one reply uniformly at random from the pool the message maps to. Never empty.
    pub fn classify<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> &'static str {
        let pool = self.pool_for(message);
        pool[rng.gen_range(0..pool.len())]
    }
}

pub const GREETING: &str = "greeting";
pub const NEW_ARRIVALS: &str = "new_arrivals";

// No bare "hi": as a substring it fires on "this", "which", "shipping".
pub static CONCIERGE_CATEGORIES: &[ResponseCategory] = &[
    ResponseCategory {
        name: GREETING,
        keywords: &[
            "hello",
            "hey",
            "good morning",
            "good evening",
            "how are you",
            "sophia",
            "sofia",
        ],
        responses: &[
            "Hello. Always nice to hear from you. How can I help today?",
            "Hi, I’m here. What would you like to look at?",
            "Good evening. I hope your day went well. Tell me what you need and I’ll take care of it.",
        ],
    },
    ResponseCategory {
        name: NEW_ARRIVALS,
        keywords: &[
            "new",
            "new arrivals",
            "collection",
            "latest",
            "just arrived",
            "season",
            "drop",
        ],
        responses: &[
            "We’ve just received a few beautiful pieces. You’ll find them in the Collections section.",
            "There are some new arrivals that fit your style very well. I can guide you through them if you like.",
            "If you want, I can shortlist the most relevant pieces for you and come back with a suggestion.",
        ],
    },
    ResponseCategory {
        name: "exclusivity",
        keywords: &["exclusive", "limited", "early access", "reserve", "hold"],
        responses: &[
            "There is a limited drop available right now. If anything speaks to you, I can reserve it immediately.",
            "Some pieces are quite rare. I’d suggest we secure them first and you decide calmly after.",
            "Would you like me to place a hold, or would you prefer to confirm first?",
        ],
    },
    ResponseCategory {
        name: "availability",
        keywords: &["available", "stock", "sold out", "size"],
        responses: &[
            "Let me check availability for you and I’ll come back shortly.",
            "If it’s limited, I’ll secure it first and confirm details right after.",
            "Tell me the size and colour you’re considering and I’ll take care of the rest.",
        ],
    },
    ResponseCategory {
        name: "made_to_order",
        keywords: &[
            "mto",
            "made to order",
            "bespoke",
            "atelier",
            "timeline",
            "status",
            "ready",
            "delayed",
        ],
        responses: &[
            "I’ll check with the atelier and come back to you with an accurate update.",
            "I prefer to confirm properly rather than guess. I’ll update you later today or tomorrow at the latest.",
            "If there’s any delay, I’ll explain clearly and propose the best option.",
        ],
    },
    ResponseCategory {
        name: "events",
        keywords: &["event", "invitation", "rsvp", "join", "attend"],
        responses: &[
            "This event takes place on the date shown in the app. Would you like me to reserve your place?",
            "If you confirm, I’ll take care of the RSVP and any preferences.",
            "I can also coordinate details around the event if you’d like.",
        ],
    },
    ResponseCategory {
        name: "wardrobe",
        keywords: &[
            "wardrobe",
            "add item",
            "organize",
            "missing",
            "create wardrobe",
        ],
        responses: &[
            "Of course. Tell me what this wardrobe is about and I’ll help you shape it.",
            "If something is missing, I can help locate it or add it manually.",
            "If you’d like, I can also suggest pieces that would complete this wardrobe nicely.",
        ],
    },
    ResponseCategory {
        name: "fit_and_family",
        keywords: &["measurements", "fit", "wife", "kids", "family"],
        responses: &[
            "Your sizes are already saved, so you shouldn’t need to re-enter anything.",
            "We can also add profiles for your wife or family if you’d like.",
            "If you’re unsure about fit on a specific piece, send it to me and I’ll advise.",
        ],
    },
    ResponseCategory {
        name: "appointments",
        keywords: &["appointment", "book", "visit", "meet", "availability"],
        responses: &[
            "Of course. Tell me the reason for the visit and your preferred dates.",
            "I’ll prioritise your usual advisor and confirm availability.",
            "Once it’s confirmed, you’ll receive an update here and by email.",
        ],
    },
    ResponseCategory {
        name: "aftercare",
        keywords: &["repair", "aftercare", "fix", "clean", "service"],
        responses: &[
            "Yes, we can take care of that. Tell me the item and what needs attention.",
            "I’ll prepare everything so it’s seamless when you arrive.",
            "I’ll update you as soon as the atelier confirms timing.",
        ],
    },
    ResponseCategory {
        name: "reassurance",
        keywords: &["annoyed", "upset", "frustrated", "disappointed", "worried"],
        responses: &[
            "I understand. Let me take care of this now and I’ll come back to you today.",
            "I’ll handle it personally and keep you updated.",
        ],
    },
];

pub static CONCIERGE_FALLBACK: &[&str] = &[
    "Of course. Just to be sure I guide you properly, is this about a product, an order, or an event?",
    "I’m here. Tell me a bit more and I’ll handle it.",
    "Let me know what you’d like to do and I’ll take care of the details.",
];
