//! Integration tests for the REPL loop and scripts

use std::io::Write;

use halnav_agent::Hal9000;
use halnav_debug::{Tracer, TracerConfig};
use halnav_foundation::{DoorState, ErrorKind, Result};
use halnav_map::Topology;
use halnav_runtime::{LineEditor, ReadResult, Renderer, Repl, RuntimeConfig, Session};

/// Plays back canned input lines.
#[derive(Default)]
struct ScriptedEditor {
    pending: Vec<ReadResult>,
    prompts: usize,
    names: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            pending: lines
                .iter()
                .rev()
                .map(|line| ReadResult::Line((*line).to_string()))
                .collect(),
            ..Self::default()
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        self.prompts += 1;
        Ok(self.pending.pop().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_names(&mut self, names: Vec<String>) {
        self.names = names;
    }
}

fn repl(lines: &[&str]) -> Repl<ScriptedEditor> {
    let hal = Hal9000::new(&Topology::spaceship()).unwrap();
    let session = Session::new(hal, Tracer::new(TracerConfig::new().enabled()));
    Repl::with_editor(ScriptedEditor::new(lines), session)
        .without_banner()
        .with_renderer(Renderer::new(60, false))
}

fn script(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

#[test]
fn loop_drives_the_agent() {
    let mut repl = repl(&["/open cryo door", "/goto corridor", "/open engine door"]);
    repl.run().unwrap();

    let hal = repl.session().hal();
    assert_eq!(hal.current_room_name(), "corridor");
    assert_eq!(
        hal.door_state("engine door"),
        Some(DoorState::Open)
    );
}

#[test]
fn quit_ends_the_trace() {
    let mut repl = repl(&["/quit", "/where"]);
    repl.run().unwrap();

    let tracer = repl.session().tracer();
    assert_eq!(tracer.current_turn(), 1);
    assert_eq!(tracer.buffer().last().unwrap().event_type(), "session-end");
}

#[test]
fn eval_matches_the_agent() {
    let mut repl = repl(&[]);
    let response = repl.eval("/where");
    assert_eq!(response.text(), "You are in the cryosleep.");
}

#[test]
fn script_then_prompt_share_state() {
    let file = script(&["# tour", "/open cryo door", "", "/goto corridor"]);
    let mut repl = repl(&["/where"]);

    let responses = repl.eval_script(file.path()).unwrap();
    assert_eq!(responses.len(), 2);

    repl.run().unwrap();
    assert_eq!(repl.session().hal().current_room_name(), "corridor");
    assert_eq!(repl.session().tracer().current_turn(), 3);
}

fn event_types(repl: &Repl<ScriptedEditor>) -> Vec<&'static str> {
    repl.session()
        .tracer()
        .buffer()
        .iter()
        .map(|r| r.event_type())
        .collect()
}

#[test]
fn batch_scripts_are_one_traced_session() {
    let file = script(&["/open cryo door"]);
    let mut repl = repl(&["/where"]);

    repl.run_with_scripts(&[file.path().to_path_buf()], false).unwrap();

    assert_eq!(
        event_types(&repl),
        vec!["session-start", "input", "command", "door-changed", "session-end"]
    );
    assert_eq!(repl.session().tracer().current_turn(), 1);
}

#[test]
fn prompt_continues_the_scripted_session() {
    let file = script(&["/open cryo door"]);
    let mut repl = repl(&["/goto corridor"]);

    repl.run_with_scripts(&[file.path().to_path_buf()], true).unwrap();

    let types = event_types(&repl);
    assert_eq!(types.iter().filter(|t| **t == "session-start").count(), 1);
    assert_eq!(types.first(), Some(&"session-start"));
    assert_eq!(types.last(), Some(&"session-end"));
    assert_eq!(repl.session().hal().current_room_name(), "corridor");
}

#[test]
fn quitting_script_skips_the_prompt() {
    let file = script(&["/quit"]);
    let mut repl = repl(&["/open cryo door"]);

    repl.run_with_scripts(&[file.path().to_path_buf()], true).unwrap();

    assert_eq!(
        repl.session().hal().door_state("cryo door"),
        Some(DoorState::Closed)
    );
    assert_eq!(event_types(&repl).last(), Some(&"session-end"));
}

#[test]
fn script_stops_at_quit() {
    let file = script(&["/open cryo door", "/quit", "/goto corridor"]);
    let mut repl = repl(&[]);

    let responses = repl.eval_script(file.path()).unwrap();
    assert_eq!(responses.len(), 2);
    assert!(responses.last().unwrap().is_quit());
    assert_eq!(repl.session().hal().current_room_name(), "cryosleep");
}

#[test]
fn missing_script_names_the_file() {
    let mut repl = repl(&[]);
    let err = repl
        .eval_script(std::path::Path::new("/nowhere/tour.hal"))
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.to_string().contains("tour.hal"));
}

#[test]
fn config_with_custom_topology() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"start": "dock", "rooms": ["dock", "hangar"],
            "doors": [{{"name": "blast door", "between": ["dock", "hangar"], "state": "open"}}]}}"#
    )
    .unwrap();

    let config = RuntimeConfig::new()
        .with_topology(file.path())
        .with_color(false)
        .with_banner(false);
    let session = Session::from_config(&config).unwrap();
    let mut repl = Repl::with_editor(ScriptedEditor::new(&["/goto hangar"]), session)
        .configured(&config);

    assert_eq!(repl.session().names(), vec!["dock", "hangar", "blast door"]);
    repl.run().unwrap();
    assert_eq!(repl.session().hal().current_room_name(), "hangar");
}

#[test]
fn bad_topology_fails_to_start() {
    let config = RuntimeConfig::new().with_topology("/nowhere/ship.json");
    assert!(Session::from_config(&config).is_err());
}
