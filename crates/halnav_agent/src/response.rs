//! Agent responses.
//!
//! A response is a list of tagged lines plus the state change it caused, if
//! any. How lines are drawn is up to the front end; the tags only say who is
//! speaking and where the line belongs.

use halnav_foundation::DoorState;

/// Horizontal placement of a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Align {
    /// Flush left (the operator's side).
    Left,
    /// Centered (narration).
    Center,
    /// Flush right (the agent's side).
    Right,
}

/// Who or what a line comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tone {
    /// The agent speaking.
    Agent,
    /// Narration of something that happened.
    Narrative,
    /// A rejected input.
    Error,
    /// Session notices.
    System,
}

impl Tone {
    /// Returns the hex color lines of this tone are drawn in.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Agent => "#00805A",
            Self::Narrative => "#404040",
            Self::Error => "#ff3000",
            Self::System => "#808080",
        }
    }

    /// Returns where lines of this tone go unless told otherwise.
    #[must_use]
    pub const fn default_align(self) -> Align {
        match self {
            Self::Agent => Align::Right,
            Self::Narrative => Align::Center,
            Self::Error | Self::System => Align::Left,
        }
    }
}

/// One line of output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// The text.
    pub text: String,
    /// Who is speaking.
    pub tone: Tone,
    /// Where the line goes.
    pub align: Align,
}

impl Line {
    /// Creates a line with the tone's default alignment.
    #[must_use]
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            align: tone.default_align(),
        }
    }

    /// The agent speaking.
    #[must_use]
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Agent)
    }

    /// Narration.
    #[must_use]
    pub fn narrative(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Narrative)
    }

    /// A rejected input.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Error)
    }

    /// A session notice with explicit placement.
    #[must_use]
    pub fn system(text: impl Into<String>, align: Align) -> Self {
        Self {
            text: text.into(),
            tone: Tone::System,
            align,
        }
    }
}

/// A state change caused by a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// The navigator moved.
    Relocated {
        /// Room left.
        from: String,
        /// Room entered.
        to: String,
        /// Door passed through.
        door: String,
    },
    /// A door was opened or closed.
    DoorChanged {
        /// The door.
        door: String,
        /// Its new state.
        state: DoorState,
    },
    /// The operator asked to end the session.
    Quit,
}

/// What the agent answers to one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    lines: Vec<Line>,
    effect: Option<Effect>,
}

impl Response {
    /// Creates an empty response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line in the agent's voice.
    #[must_use]
    pub fn say(self, text: impl Into<String>) -> Self {
        self.with_line(Line::agent(text))
    }

    /// Adds a line.
    #[must_use]
    pub fn with_line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    /// Records the state change.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Returns the lines in order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the state change, if any.
    #[must_use]
    pub fn effect(&self) -> Option<&Effect> {
        self.effect.as_ref()
    }

    /// Returns true if there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns true if the operator asked to end the session.
    #[must_use]
    pub fn is_quit(&self) -> bool {
        matches!(self.effect, Some(Effect::Quit))
    }

    /// Returns all line texts joined by newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
