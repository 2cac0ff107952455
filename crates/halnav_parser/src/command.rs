//! Command lines and the command vocabulary.
//!
//! Every command word maps to exactly one [`CommandKind`] through a fixed
//! alias table. Unknown words map to nothing, and the interpreter answers
//! them with a refusal.

use std::fmt;

use halnav_foundation::normalize_name;

/// A slash command as typed: the command word and its argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    /// The command word, lowercased.
    pub name: String,
    /// The argument, lowercased with whitespace collapsed. Possibly empty.
    pub argument: String,
    /// Everything after the slash, as typed.
    pub raw: String,
}

impl CommandLine {
    /// Parses the text after the slash.
    ///
    /// The first word is the command name; the rest, normalized like a room
    /// or door name, is the argument.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let body = body.trim();
        let (name, rest) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
        Self {
            name: name.to_lowercase(),
            argument: normalize_name(rest),
            raw: body.to_string(),
        }
    }

    /// Resolves the command word against the vocabulary.
    #[must_use]
    pub fn kind(&self) -> Option<CommandKind> {
        CommandKind::lookup(&self.name)
    }
}

/// The commands the agent understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandKind {
    /// Where am I, where does a door lead, how do I reach a room.
    Where,
    /// Every neighbor and the doors leading to it.
    Transitions,
    /// Move to a neighboring room.
    Relocate,
    /// Open a door.
    Open,
    /// Close a door.
    Close,
    /// List commands.
    Help,
    /// End the session.
    Quit,
}

/// Command word -> command. The first alias of each command is its name.
const ALIASES: &[(&str, CommandKind)] = &[
    ("where", CommandKind::Where),
    ("transitions", CommandKind::Transitions),
    ("goto", CommandKind::Relocate),
    ("relocate", CommandKind::Relocate),
    ("open", CommandKind::Open),
    ("close", CommandKind::Close),
    ("help", CommandKind::Help),
    ("?", CommandKind::Help),
    ("quit", CommandKind::Quit),
    ("exit", CommandKind::Quit),
];

impl CommandKind {
    /// Every command, in help order.
    pub const ALL: [Self; 7] = [
        Self::Where,
        Self::Transitions,
        Self::Relocate,
        Self::Open,
        Self::Close,
        Self::Help,
        Self::Quit,
    ];

    /// Looks up a command word (case-insensitive).
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        let word = word.trim().to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == word)
            .map(|(_, kind)| *kind)
    }

    /// Returns the primary command word.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.aliases().next().unwrap_or("?")
    }

    /// Returns every word that resolves to this command.
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        ALIASES
            .iter()
            .filter(move |(_, kind)| *kind == self)
            .map(|(alias, _)| *alias)
    }

    /// Returns a usage string, e.g. `/goto <room>`.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Where => "/where [door | room]",
            Self::Transitions => "/transitions",
            Self::Relocate => "/goto <room>",
            Self::Open => "/open <door>",
            Self::Close => "/close <door>",
            Self::Help => "/help",
            Self::Quit => "/quit",
        }
    }

    /// Returns a one-line description.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Where => "tell where you are, where a door leads or how to reach a room",
            Self::Transitions => "list the rooms reachable from here",
            Self::Relocate => "move to a neighboring room through an open door",
            Self::Open => "open a door in this room",
            Self::Close => "close a door in this room",
            Self::Help => "list commands",
            Self::Quit => "end the session",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
