//! Command interpreter.
//!
//! Maps each [`CommandKind`] to the handler executing it. The table is filled
//! once when the interpreter is created; input whose command word is not in
//! the vocabulary, or has no handler, gets the refusal response.

use std::collections::HashMap;

use halnav_map::Map;
use halnav_parser::{CommandKind, CommandLine};

use crate::command::{
    Command, DoorCommand, HelpCommand, QuitCommand, RelocateCommand, TransitionsCommand,
    WhereCommand,
};
use crate::navigator::Navigator;
use crate::response::{Line, Response};

/// Dispatches command lines to their handlers.
pub struct Interpreter {
    handlers: HashMap<CommandKind, Box<dyn Command>>,
}

impl Interpreter {
    /// Creates an interpreter with every standard command registered.
    #[must_use]
    pub fn new() -> Self {
        let mut interpreter = Self::empty();
        interpreter.register(CommandKind::Where, WhereCommand);
        interpreter.register(CommandKind::Transitions, TransitionsCommand);
        interpreter.register(CommandKind::Relocate, RelocateCommand);
        interpreter.register(CommandKind::Open, DoorCommand::open());
        interpreter.register(CommandKind::Close, DoorCommand::close());
        interpreter.register(CommandKind::Help, HelpCommand);
        interpreter.register(CommandKind::Quit, QuitCommand);
        interpreter
    }

    /// Creates an interpreter with no handlers.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers (or replaces) the handler for a command.
    pub fn register(&mut self, kind: CommandKind, handler: impl Command + 'static) {
        self.handlers.insert(kind, Box::new(handler));
    }

    /// Returns true if a handler is registered for `kind`.
    #[must_use]
    pub fn handles(&self, kind: CommandKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Executes a command line.
    pub fn dispatch(
        &self,
        line: &CommandLine,
        navigator: &mut Navigator,
        map: &mut Map,
    ) -> Response {
        match line.kind().and_then(|kind| self.handlers.get(&kind)) {
            Some(handler) => handler.execute(navigator, map, &line.argument),
            None => Self::unrecognized(&line.raw),
        }
    }

    /// The response to a command nobody handles.
    #[must_use]
    pub fn unrecognized(raw: &str) -> Response {
        Response::new()
            .with_line(Line::error(format!("Command `{raw}` unknown.")))
            .say("I'm afraid I can't do that.")
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
