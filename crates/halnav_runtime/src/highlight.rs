//! Input highlighting for the REPL.

use std::borrow::Cow;

use halnav_parser::{CommandKind, InputTokenizer};

const KNOWN: &str = "\x1b[1;36m";
const UNKNOWN: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Colors the command word of a slash command.
///
/// Known commands are bold cyan, unknown ones red. Free text is left alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct HalHighlighter;

impl HalHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let indent = line.len() - line.trim_start().len();
        let rest = &line[indent..];
        if !rest.starts_with(InputTokenizer::COMMAND_PREFIX) {
            return Cow::Borrowed(line);
        }

        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(end);
        let name = &word[InputTokenizer::COMMAND_PREFIX.len_utf8()..];
        let color = if CommandKind::lookup(name).is_some() {
            KNOWN
        } else {
            UNKNOWN
        };

        Cow::Owned(format!("{}{color}{word}{RESET}{tail}", &line[..indent]))
    }
}
