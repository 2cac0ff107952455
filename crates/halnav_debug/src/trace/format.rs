//! Trace record formatting.
//!
//! `--trace` prints records for people, `--trace-json` one JSON object per
//! line for tools.

use super::record::{TraceEvent, TraceRecord};

/// Turns a record into one line of output.
pub trait TraceFormatter {
    /// Formats a record.
    fn format(&self, record: &TraceRecord) -> String;
}

/// Indented, turn-prefixed text.
///
/// Events nest under the input line that caused them:
///
/// ```text
/// T0002 > /goto corridor
/// T0002   COMMAND /goto corridor
/// T0002     MOVE cryosleep -> corridor via cryo door
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HumanFormatter;

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let body = match &record.event {
            TraceEvent::SessionStart { room, rooms, doors } => {
                format!("=== SESSION START in {room} ({rooms} rooms, {doors} doors) ===")
            }
            TraceEvent::SessionEnd { turns } => format!("=== SESSION END after {turns} turns ==="),
            TraceEvent::Input { line } => format!("> {line}"),
            TraceEvent::Command { name, argument } if argument.is_empty() => {
                format!("  COMMAND /{name}")
            }
            TraceEvent::Command { name, argument } => format!("  COMMAND /{name} {argument}"),
            TraceEvent::Unrecognized { raw } => format!("  UNRECOGNIZED /{raw}"),
            TraceEvent::Chat { text } => format!("  CHAT {text:?}"),
            TraceEvent::Relocated { from, to, door } => {
                format!("    MOVE {from} -> {to} via {door}")
            }
            TraceEvent::DoorChanged { door, state } => format!("    DOOR {door} = {state}"),
        };
        format!("T{:04} {body}", record.turn)
    }
}

/// Compact JSON, with the event fields inline.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormatter;

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        serde_json::to_string(record)
            .unwrap_or_else(|e| format!("{{\"error\":{:?}}}", e.to_string()))
    }
}
