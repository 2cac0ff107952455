//! Session state for the REPL.
//!
//! A session is the agent plus the tracer watching it. Every input line goes
//! through [`Session::handle_line`], which records what the line was and what
//! it changed.

use std::fmt::Write;

use halnav_agent::{Effect, Hal9000, Response};
use halnav_debug::Tracer;
use halnav_foundation::Result;
use halnav_parser::{Input, InputTokenizer};

use crate::config::RuntimeConfig;

/// One chat with HAL9000.
pub struct Session {
    hal: Hal9000,
    tracer: Tracer,
    started: bool,
}

impl Session {
    /// Creates a session around an agent.
    #[must_use]
    pub fn new(hal: Hal9000, tracer: Tracer) -> Self {
        Self {
            hal,
            tracer,
            started: false,
        }
    }

    /// Creates a session from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the topology cannot be loaded or built.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let topology = config.load_topology()?;
        let hal = Hal9000::new(&topology)?.with_seed(config.seed);
        Ok(Self::new(hal, Tracer::new(config.tracer_config())))
    }

    /// Returns the agent.
    #[must_use]
    pub fn hal(&self) -> &Hal9000 {
        &self.hal
    }

    /// Returns the tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Marks the start of the session. Only the first call is recorded.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        let map = self.hal.map();
        let (rooms, doors) = (map.room_count(), map.door_count());
        self.tracer
            .session_start(self.hal.current_room_name(), rooms, doors);
    }

    /// Marks the end of a started session. Only the first call is recorded.
    pub fn finish(&mut self) {
        if self.started {
            self.started = false;
            self.tracer.session_end();
        }
    }

    /// Handles one raw input line.
    pub fn handle_line(&mut self, line: &str) -> Response {
        let input = InputTokenizer::tokenize(line);
        if input == Input::Empty {
            return Response::new();
        }

        self.tracer.next_turn();
        self.tracer.input(line.trim());
        match &input {
            Input::Command(command) => match command.kind() {
                Some(kind) => self.tracer.command(kind.name(), &command.argument),
                None => self.tracer.unrecognized(&command.raw),
            },
            Input::Text(text) => self.tracer.chat(text),
            Input::Empty => {}
        }

        let response = self.hal.handle(&input);
        match response.effect() {
            Some(Effect::Relocated { from, to, door }) => self.tracer.relocated(from, to, door),
            Some(Effect::DoorChanged { door, state }) => self.tracer.door_changed(door, *state),
            Some(Effect::Quit) | None => {}
        }
        response
    }

    /// Returns every word worth completing: room and door names.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let map = self.hal.map();
        map.rooms()
            .map(|room| room.name().to_string())
            .chain(map.doors().map(|door| door.name().to_string()))
            .collect()
    }

    /// Describes the map and the session's position in it.
    #[must_use]
    pub fn dump_map(&self) -> String {
        let map = self.hal.map();
        let mut out = String::new();

        let _ = writeln!(out, "=== Map ===");
        let _ = writeln!(out, "Current room: {}", self.hal.current_room_name());
        let _ = writeln!(out, "Rooms: {}", map.room_count());
        for room in map.rooms() {
            let neighbors: Vec<&str> = room.possible_transitions().iter().map(|t| t.to()).collect();
            if neighbors.is_empty() {
                let _ = writeln!(out, "  - {}", room.name());
            } else {
                let _ = writeln!(out, "  - {} -> {}", room.name(), neighbors.join(", "));
            }
        }
        let _ = writeln!(out, "Doors: {}", map.door_count());
        for door in map.doors() {
            let [a, b] = door.between();
            let _ = writeln!(out, "  - {} ({a} <-> {b}): {}", door.name(), door.state());
        }

        out
    }
}
