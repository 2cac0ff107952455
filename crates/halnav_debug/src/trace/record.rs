//! Trace events and records.
//!
//! One event per thing that happened in a session: input read, command
//! dispatched, room changed, door toggled.

use halnav_foundation::DoorState;
use serde::Serialize;

/// Something that happened during a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum TraceEvent {
    /// The session started.
    SessionStart {
        /// The start room.
        room: String,
        /// Rooms on the map.
        rooms: usize,
        /// Doors on the map.
        doors: usize,
    },

    /// The session ended.
    SessionEnd {
        /// Turns played.
        turns: u64,
    },

    /// A line of input was read.
    Input {
        /// The line, trimmed.
        line: String,
    },

    /// A known command was dispatched.
    Command {
        /// The command's canonical name.
        name: String,
        /// The normalized argument.
        argument: String,
    },

    /// A command word nobody handles.
    Unrecognized {
        /// The command text after the slash.
        raw: String,
    },

    /// Free text went to the chatbot.
    Chat {
        /// The text.
        text: String,
    },

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
}

impl TraceEvent {
    /// Every event type name, in the order events usually occur in a turn.
    pub const TYPES: [&'static str; 8] = [
        "session-start",
        "input",
        "command",
        "unrecognized",
        "chat",
        "relocated",
        "door-changed",
        "session-end",
    ];

    /// Returns the event type name, as used in JSON and event filters.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SessionStart { .. } => "session-start",
            Self::SessionEnd { .. } => "session-end",
            Self::Input { .. } => "input",
            Self::Command { .. } => "command",
            Self::Unrecognized { .. } => "unrecognized",
            Self::Chat { .. } => "chat",
            Self::Relocated { .. } => "relocated",
            Self::DoorChanged { .. } => "door-changed",
        }
    }
}

/// An event stamped with its place in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    /// Sequence number, unique within the session.
    pub id: u64,
    /// The input line the event belongs to (0 before the first line).
    pub turn: u64,
    /// Nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// What happened.
    #[serde(flatten)]
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
