//! The HAL9000 agent.
//!
//! Owns the map, the navigator, the interpreter and the chatbot, and routes
//! each classified input line to the right one.

use halnav_foundation::{DoorState, Result};
use halnav_map::{Map, Topology, Transition};
use halnav_parser::{CommandLine, Input, InputTokenizer};

use crate::chat::{ChatContext, Chatbot};
use crate::clock::{Clock, LocalClock};
use crate::interpreter::Interpreter;
use crate::navigator::Navigator;
use crate::response::Response;

/// The agent behind the terminal.
pub struct Hal9000 {
    map: Map,
    navigator: Navigator,
    interpreter: Interpreter,
    chatbot: Chatbot,
    clock: Box<dyn Clock>,
}

impl Hal9000 {
    /// Builds the map from `topology` and places the agent in its start room.
    ///
    /// # Errors
    ///
    /// Returns an error if the topology does not build into a valid map.
    pub fn new(topology: &Topology) -> Result<Self> {
        let map = topology.build()?;
        Self::from_parts(map, &topology.start)
    }

    /// Creates an agent over an existing map.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not a room of `map`.
    pub fn from_parts(map: Map, start: &str) -> Result<Self> {
        let navigator = Navigator::new(&map, start)?;
        Ok(Self {
            map,
            navigator,
            interpreter: Interpreter::new(),
            chatbot: Chatbot::default(),
            clock: Box::new(LocalClock),
        })
    }

    /// Reseeds the chatbot.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.chatbot = Chatbot::new(seed);
        self
    }

    /// Replaces the clock used for greetings.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Responds to one classified input.
    pub fn handle(&mut self, input: &Input) -> Response {
        match input {
            Input::Command(line) => self.execute(line),
            Input::Text(text) => self.chat(text),
            Input::Empty => Response::new(),
        }
    }

    /// Tokenizes and responds to a raw input line.
    pub fn handle_line(&mut self, line: &str) -> Response {
        self.handle(&InputTokenizer::tokenize(line))
    }

    /// Executes a command line.
    pub fn execute(&mut self, line: &CommandLine) -> Response {
        self.interpreter
            .dispatch(line, &mut self.navigator, &mut self.map)
    }

    /// Answers free text with one agent line.
    pub fn chat(&mut self, text: &str) -> Response {
        let context = ChatContext {
            location: self.navigator.current_room_name(),
            hour: self.clock.hour(),
        };
        let reply = self.chatbot.respond(text, &context);
        Response::new().say(reply)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the current room name.
    #[must_use]
    pub fn current_room_name(&self) -> &str {
        self.navigator.current_room_name()
    }

    /// Returns every neighbor of the current room with its doors.
    #[must_use]
    pub fn possible_transitions(&self) -> Vec<&Transition> {
        self.navigator.possible_transitions(&self.map)
    }

    /// Returns the state of a door anywhere on the map.
    #[must_use]
    pub fn door_state(&self, name: &str) -> Option<DoorState> {
        self.map.door_state(name)
    }

    /// Returns the map.
    #[must_use]
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Returns the navigator.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }
}

impl std::fmt::Debug for Hal9000 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hal9000")
            .field("current_room", &self.navigator.current_room_name())
            .field("rooms", &self.map.room_count())
            .field("doors", &self.map.door_count())
            .finish_non_exhaustive()
    }
}
