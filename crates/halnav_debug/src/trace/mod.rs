//! Tracing system for HAL navigator sessions.
//!
//! Records what each input line did with no overhead when disabled. Records
//! are kept in a bounded buffer and optionally echoed to stderr in
//! human-readable or JSON form.
//!
//! # Example
//!
//! ```text
//! $ halnav --trace
//! > /open cryo door
//! T0001 > /open cryo door
//! T0001   COMMAND /open cryo door
//! T0001     DOOR cryo door = open
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceSummary};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use halnav_foundation::DoorState;

// =============================================================================
// Configuration
// =============================================================================

/// Where records go besides the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// Buffer only.
    #[default]
    None,
    /// Also print each record to stderr as it happens.
    Stderr,
}

/// Tracer settings.
#[derive(Clone, Debug, Default)]
pub struct TracerConfig {
    /// Whether anything is recorded at all.
    pub enabled: bool,
    /// Where records are echoed.
    pub output: TraceOutput,
    /// Echo as JSON instead of text.
    pub json_format: bool,
    /// Event types to keep; empty keeps all.
    pub event_filter: Vec<String>,
}

impl TracerConfig {
    /// Creates a disabled configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns recording on.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Echoes records to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Echoes records as JSON.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Keeps only the given event types (see [`TraceEvent::TYPES`]).
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }

    fn keeps(&self, event: &TraceEvent) -> bool {
        self.event_filter.is_empty() || self.event_filter.iter().any(|t| t == event.event_type())
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records session events, turn by turn.
///
/// `record` returns immediately when tracing is off.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    formatter: Box<dyn TraceFormatter>,
    current_turn: u64,
    start_time: Instant,
}

impl Tracer {
    /// Creates a tracer.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let formatter: Box<dyn TraceFormatter> = if config.json_format {
            Box::new(JsonFormatter)
        } else {
            Box::new(HumanFormatter)
        };
        Self {
            config,
            buffer: TraceBuffer::default(),
            formatter,
            current_turn: 0,
            start_time: Instant::now(),
        }
    }

    /// Advances to the next turn and returns its number (starting at 1).
    pub fn next_turn(&mut self) -> u64 {
        self.current_turn += 1;
        self.current_turn
    }

    /// Returns the current turn number.
    #[must_use]
    pub fn current_turn(&self) -> u64 {
        self.current_turn
    }

    /// Records an event under the current turn.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled || !self.config.keeps(&event) {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(self.current_turn, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let _ = writeln!(io::stderr(), "{}", self.format_record(record));
            }
        }
    }

    /// Formats a record the way this tracer echoes it.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        self.formatter.format(record)
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Counts the recorded events.
    #[must_use]
    pub fn summary(&self) -> TraceSummary {
        self.buffer.summary()
    }

    // -------------------------------------------------------------------------
    // Convenience methods for common events
    // -------------------------------------------------------------------------

    /// Records the start of a session.
    #[inline]
    pub fn session_start(&mut self, room: &str, rooms: usize, doors: usize) {
        self.record(TraceEvent::SessionStart {
            room: room.to_string(),
            rooms,
            doors,
        });
    }

    /// Records the end of a session.
    #[inline]
    pub fn session_end(&mut self) {
        let turns = self.current_turn;
        self.record(TraceEvent::SessionEnd { turns });
    }

    /// Records an input line.
    #[inline]
    pub fn input(&mut self, line: &str) {
        self.record(TraceEvent::Input {
            line: line.to_string(),
        });
    }

    /// Records a dispatched command.
    #[inline]
    pub fn command(&mut self, name: &str, argument: &str) {
        self.record(TraceEvent::Command {
            name: name.to_string(),
            argument: argument.to_string(),
        });
    }

    /// Records an unrecognized command.
    #[inline]
    pub fn unrecognized(&mut self, raw: &str) {
        self.record(TraceEvent::Unrecognized {
            raw: raw.to_string(),
        });
    }

    /// Records free text sent to the chatbot.
    #[inline]
    pub fn chat(&mut self, text: &str) {
        self.record(TraceEvent::Chat {
            text: text.to_string(),
        });
    }

    /// Records a move between rooms.
    #[inline]
    pub fn relocated(&mut self, from: &str, to: &str, door: &str) {
        self.record(TraceEvent::Relocated {
            from: from.to_string(),
            to: to.to_string(),
            door: door.to_string(),
        });
    }

    /// Records a door state change.
    #[inline]
    pub fn door_changed(&mut self, door: &str, state: DoorState) {
        self.record(TraceEvent::DoorChanged {
            door: door.to_string(),
            state,
        });
    }
}
