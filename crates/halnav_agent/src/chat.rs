//! Canned replies to free text.
//!
//! An ordered table of rules, each matched against the start of the input.
//! The first rule that matches picks one of its replies at random. The random
//! source is a seeded `ChaCha8Rng`, so a session replays identically under
//! the same seed.
//!
//! Replies may contain:
//! - `${daytime}` - night, morning, day or evening
//! - `${location}` - the current room
//! - `%1` - the matched words, with pronouns reflected

use halnav_parser::InputTokenizer;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// What the chatbot needs to know about the session.
#[derive(Clone, Copy, Debug)]
pub struct ChatContext<'a> {
    /// The current room.
    pub location: &'a str,
    /// The current hour (0-23).
    pub hour: u32,
}

const GREETINGS: &[&str] = &["Good ${daytime}! This is HAL.", "Hello.", "Good ${daytime}."];

const DEFAULTS: &[&str] = &[
    "I'm sorry, I can't understand you...",
    "I can't recognize your request. Please, rephrase your question.",
    "Yeah, that's fine... Stop mumbling, please!",
    "Can you be more exact in your requests?",
    "Please, remember that I am an Artificial Intelligence! And sometimes I can be more \
     artificial than intelligent...",
];

const ECHOES: &[&str] = &[
    "What do you mean by saying '%1'?",
    "I'm sorry, I can't understand you...",
    "I can't recognize your request. Please, rephrase your question.",
    "Yeah, that's fine... Stop mumbling, please!",
    "Can you be more exact in your requests?",
    "Please, remember that I am an Artificial Intelligence! And sometimes I can be more \
     artificial than intelligent...",
];

/// How a rule recognizes its input.
#[derive(Clone, Copy, Debug)]
enum Pattern {
    /// Just a call for attention: `hal.`, `hey you!`.
    Summons,
    /// The first word is one of these.
    FirstWord(&'static [&'static str]),
    /// The input starts with one of these.
    Prefix(&'static [&'static str]),
    /// The input starts with words; they are captured as `%1`.
    Words,
    /// Always matches.
    Anything,
}

struct Rule {
    pattern: Pattern,
    replies: &'static [&'static str],
}

const RULES: &[Rule] = &[
    Rule {
        pattern: Pattern::Summons,
        replies: &["Yes?", "HAL9000 is listening.", "HAL on line.", "What?"],
    },
    Rule {
        pattern: Pattern::FirstWord(&["hi", "hello", "hey"]),
        replies: GREETINGS,
    },
    Rule {
        pattern: Pattern::Prefix(&["good morning", "good day", "good evening", "good night"]),
        replies: GREETINGS,
    },
    Rule {
        pattern: Pattern::Prefix(&["where am i"]),
        replies: &["You are in the ${location} now."],
    },
    Rule {
        pattern: Pattern::Prefix(&["ok", "o.k.", "fine", "excellent", "cool"]),
        replies: &["Good.", "Do you think so?", "Awesome.", "Perfect."],
    },
    Rule {
        pattern: Pattern::Prefix(&["really?", "are you serious?"]),
        replies: &["Of course!", "Sure!", "Yes!", "Absolutely."],
    },
    Rule {
        pattern: Pattern::Words,
        replies: ECHOES,
    },
    Rule {
        pattern: Pattern::Anything,
        replies: DEFAULTS,
    },
];

/// Pronoun swaps applied to echoed words. Two-word entries are tried first.
const REFLECTIONS: &[(&str, &str)] = &[
    ("i am", "you are"),
    ("i was", "you were"),
    ("you are", "I am"),
    ("you were", "I was"),
    ("i", "you"),
    ("i'm", "you are"),
    ("i'd", "you would"),
    ("i've", "you have"),
    ("i'll", "you will"),
    ("my", "your"),
    ("you've", "I have"),
    ("you'll", "I will"),
    ("your", "my"),
    ("yours", "mine"),
    ("you", "me"),
    ("me", "you"),
];

impl Pattern {
    /// Returns `Some(capture)` if the input matches.
    fn matches(self, input: &str) -> Option<String> {
        match self {
            Self::Summons => {
                let stripped = input.trim_end_matches(['.', '!', ' ']);
                matches!(stripped, "hal" | "hey you").then(String::new)
            }
            Self::FirstWord(words) => {
                let first = InputTokenizer::words(input).into_iter().next()?;
                words.contains(&first.as_str()).then(String::new)
            }
            Self::Prefix(prefixes) => prefixes
                .iter()
                .any(|p| input.starts_with(*p))
                .then(String::new),
            Self::Words => {
                let end = input
                    .find(|c: char| !(c.is_alphanumeric() || c == '_' || c.is_whitespace()))
                    .unwrap_or(input.len());
                let captured = input[..end].trim();
                (!captured.is_empty()).then(|| captured.to_string())
            }
            Self::Anything => Some(String::new()),
        }
    }
}

/// Swaps first and second person in `text`.
fn reflect(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut out = Vec::with_capacity(words.len());
    let mut i = 0;

    while i < words.len() {
        if i + 1 < words.len() {
            let pair = format!("{} {}", words[i], words[i + 1]);
            if let Some((_, swap)) = REFLECTIONS.iter().find(|(from, _)| *from == pair) {
                out.push(*swap);
                i += 2;
                continue;
            }
        }
        let swap = REFLECTIONS
            .iter()
            .find(|(from, _)| *from == words[i])
            .map_or(words[i], |(_, to)| *to);
        out.push(swap);
        i += 1;
    }

    out.join(" ")
}

/// Names the part of the day an hour falls in.
#[must_use]
pub fn daytime(hour: u32) -> &'static str {
    if hour < 5 || hour > 22 {
        "night"
    } else if hour < 12 {
        "morning"
    } else if hour < 17 {
        "day"
    } else {
        "evening"
    }
}

/// The canned-reply chatbot.
#[derive(Clone, Debug)]
pub struct Chatbot {
    rng: ChaCha8Rng,
}

impl Chatbot {
    /// Creates a chatbot with a seeded random source.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replies to a line of free text.
    pub fn respond(&mut self, input: &str, context: &ChatContext<'_>) -> String {
        let input = input.trim().to_lowercase().replace("i'm", "i am");

        for rule in RULES {
            let Some(capture) = rule.pattern.matches(&input) else {
                continue;
            };
            let reply = rule.replies.choose(&mut self.rng).copied().unwrap_or("...");
            return Self::fill(reply, &capture, context);
        }

        String::new()
    }

    fn fill(reply: &str, capture: &str, context: &ChatContext<'_>) -> String {
        let mut out = reply
            .replace("${daytime}", daytime(context.hour))
            .replace("${location}", context.location);
        if out.contains("%1") {
            out = out.replace("%1", &reflect(capture));
        }
        out.replace("??", "?")
    }
}

impl Default for Chatbot {
    fn default() -> Self {
        Self::new(0)
    }
}
