//! Input tokenization.
//!
//! Classifies a raw terminal line as a slash command, free text, or nothing.

use crate::command::CommandLine;

/// A classified terminal line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// A line starting with `/`.
    Command(CommandLine),
    /// Anything else that is not blank, trimmed.
    Text(String),
    /// A blank line.
    Empty,
}

/// Tokenizes terminal input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Prefix marking a command.
    pub const COMMAND_PREFIX: char = '/';

    /// Classifies a raw input line.
    ///
    /// - A leading `/` makes the line a command; the first word is the
    ///   command name, the rest is the argument
    /// - Names and arguments are lowercased and inner whitespace is
    ///   collapsed, so `/goto  Engine   Room` targets `engine room`
    /// - A lone `/` is a command with an empty name
    #[must_use]
    pub fn tokenize(input: &str) -> Input {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Input::Empty;
        }

        let Some(body) = trimmed.strip_prefix(Self::COMMAND_PREFIX) else {
            return Input::Text(trimmed.to_string());
        };

        Input::Command(CommandLine::parse(body))
    }

    /// Splits free text into lowercase words, stripping punctuation.
    ///
    /// Apostrophes are kept so contractions survive as one word.
    #[must_use]
    pub fn words(text: &str) -> Vec<String> {
        text.split(|c: char| c.is_whitespace() || matches!(c, '.' | ',' | '!' | '?' | ';' | ':'))
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}
