//! Integration tests for session tracing

use halnav_agent::Hal9000;
use halnav_debug::{TraceEvent, Tracer, TracerConfig};
use halnav_foundation::DoorState;
use halnav_map::Topology;
use halnav_runtime::Session;

fn session(config: TracerConfig) -> Session {
    Session::new(Hal9000::new(&Topology::spaceship()).unwrap(), Tracer::new(config))
}

#[test]
fn every_line_is_a_turn() {
    let mut session = session(TracerConfig::new().enabled());
    for line in ["/open cryo door", "", "/goto corridor", "hello HAL"] {
        session.handle_line(line);
    }

    let summary = session.tracer().summary();
    assert_eq!(session.tracer().current_turn(), 3);
    assert_eq!(session.tracer().buffer().last().unwrap().turn, 3);
    assert_eq!(summary.count("input"), 3);
    assert_eq!(summary.count("chat"), 1);
}

#[test]
fn state_changes_are_recorded() {
    let mut session = session(TracerConfig::new().enabled());
    session.handle_line("/open cryo door");
    session.handle_line("/close cryo door");

    let changes: Vec<&TraceEvent> = session
        .tracer()
        .buffer()
        .iter()
        .map(|r| &r.event)
        .filter(|e| {
            matches!(
                e,
                TraceEvent::DoorChanged { .. } | TraceEvent::Relocated { .. }
            )
        })
        .collect();
    assert_eq!(
        changes,
        vec![
            &TraceEvent::DoorChanged {
                door: "cryo door".to_string(),
                state: DoorState::Open,
            },
            &TraceEvent::DoorChanged {
                door: "cryo door".to_string(),
                state: DoorState::Closed,
            },
        ]
    );
}

#[test]
fn json_trace_is_one_object_per_record() {
    let mut session = session(TracerConfig::new().enabled().json());
    session.handle_line("/open cryo door");
    session.handle_line("/goto corridor");

    let tracer = session.tracer();
    let values: Vec<serde_json::Value> = tracer
        .buffer()
        .iter()
        .filter(|r| r.turn == 2)
        .map(|r| serde_json::from_str(&tracer.format_record(r)).unwrap())
        .collect();

    assert_eq!(values.len(), 3);
    assert_eq!(values[2]["event"], "relocated");
    assert_eq!(values[2]["to"], "corridor");
    assert_eq!(values[2]["turn"], 2);
}

#[test]
fn filtered_tracer_keeps_only_moves() {
    let config = TracerConfig::new()
        .enabled()
        .filter_events(vec!["relocated".to_string()]);
    let mut session = session(config);
    session.handle_line("/open cryo door");
    session.handle_line("/goto corridor");

    assert_eq!(session.tracer().buffer().len(), 1);
}

#[test]
fn summary_lists_what_happened() {
    let mut session = session(TracerConfig::new().enabled());
    session.start();
    session.handle_line("/open cryo door");
    session.handle_line("/goto corridor");
    session.finish();

    let summary = session.tracer().summary().to_string();
    assert!(summary.starts_with("8 trace records"));
    assert!(summary.contains("relocated      1"));
    assert!(summary.contains("door-changed   1"));
}

#[test]
fn dump_map_reflects_moves() {
    let mut session = session(TracerConfig::new());
    session.handle_line("/open cryo door");
    session.handle_line("/goto corridor");

    let dump = session.dump_map();
    assert!(dump.starts_with("=== Map ===\n"));
    assert!(dump.contains("Current room: corridor"));
    assert!(dump.contains("Doors: 7"));
    assert!(dump.contains("  - cargo bay -> corridor, engine room, airlock"));
}
