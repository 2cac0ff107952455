//! Command handlers.
//!
//! Each command the agent understands is a type implementing [`Command`].
//! Handlers validate their argument against the navigator and the map, apply
//! at most one change, and describe the outcome in the agent's voice. A bad
//! argument is never an error: it is something to explain to the operator.

use halnav_foundation::DoorState;
use halnav_map::{Map, Transition};
use halnav_parser::CommandKind;

use crate::navigator::{DoorChange, Navigator, Relocation};
use crate::response::{Align, Effect, Line, Response};

/// A command the agent can execute.
pub trait Command {
    /// Executes the command with its (lowercased, possibly empty) argument.
    fn execute(&self, navigator: &mut Navigator, map: &mut Map, argument: &str) -> Response;
}

// =============================================================================
// Wording helpers
// =============================================================================

/// Joins names as `a`, `a or b`, `a, b or c`.
fn join_with<S: AsRef<str>>(names: &[S], last: &str) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., tail] => {
            let head: Vec<&str> = init.iter().map(|n| AsRef::<str>::as_ref(n)).collect();
            format!("{} {last} {}", head.join(", "), tail.as_ref())
        }
    }
}

fn describe_door(map: &Map, name: &str) -> String {
    match map.door_state(name) {
        Some(state) => format!("{name} ({state})"),
        None => name.to_string(),
    }
}

fn describe_transition(map: &Map, transition: &Transition) -> String {
    let doors: Vec<String> = transition
        .doors()
        .iter()
        .map(|d| describe_door(map, d))
        .collect();
    format!("the {} through the {}", transition.to(), join_with(&doors, "or"))
}

// =============================================================================
// where
// =============================================================================

/// `/where [door | room]`.
pub struct WhereCommand;

impl Command for WhereCommand {
    fn execute(&self, navigator: &mut Navigator, map: &mut Map, argument: &str) -> Response {
        let here = navigator.current_room_name().to_string();

        if argument.is_empty() {
            return Response::new().say(format!("You are in the {here}."));
        }

        if argument == here {
            return TransitionsCommand.execute(navigator, map, "");
        }

        if let Some(door) = navigator.door_here(map, argument) {
            let other = door.other_side(&here).unwrap_or(&here);
            return Response::new().say(format!(
                "The {argument} leads to the {other}. It is {}.",
                door.state()
            ));
        }

        let doors: Vec<&str> = navigator
            .current_room(map)
            .map(|room| room.get_doors(Some(argument)))
            .unwrap_or_default();
        if !doors.is_empty() {
            return Response::new().say(format!(
                "You can get to the {argument} through the {}.",
                join_with(&doors, "or")
            ));
        }

        Response::new().say(format!("There is no such place near here: {argument}."))
    }
}

// =============================================================================
// transitions
// =============================================================================

/// `/transitions`.
pub struct TransitionsCommand;

impl Command for TransitionsCommand {
    fn execute(&self, navigator: &mut Navigator, map: &mut Map, _argument: &str) -> Response {
        let here = navigator.current_room_name();
        let transitions = navigator.possible_transitions(map);

        if transitions.is_empty() {
            return Response::new().say(format!("There is no way out of the {here}."));
        }

        transitions.iter().fold(
            Response::new().say(format!("From the {here} you can go to:")),
            |response, transition| response.say(describe_transition(map, transition)),
        )
    }
}

// =============================================================================
// goto / relocate
// =============================================================================

/// `/goto <room>` and `/relocate <room>`.
pub struct RelocateCommand;

impl Command for RelocateCommand {
    fn execute(&self, navigator: &mut Navigator, map: &mut Map, argument: &str) -> Response {
        if argument.is_empty() {
            let neighbors: Vec<&str> = navigator
                .possible_transitions(map)
                .iter()
                .map(|t| t.to())
                .collect();
            let hint = if neighbors.is_empty() {
                "There is nowhere to go from here.".to_string()
            } else {
                format!("From here you can go to the {}.", join_with(&neighbors, "or"))
            };
            return Response::new().say("Where do you want to go?").say(hint);
        }

        match navigator.relocate(map, argument) {
            Relocation::Moved { from, door } => Response::new()
                .with_line(Line::narrative(""))
                .with_line(Line::narrative(format!("\u{2014} Now in the {argument}. \u{2014}")))
                .with_effect(Effect::Relocated {
                    from,
                    to: argument.to_string(),
                    door,
                }),
            Relocation::AlreadyThere => {
                Response::new().say(format!("You are already in the {argument}!"))
            }
            Relocation::UnknownRoom => {
                Response::new().say(format!("I don't know where the {argument} is."))
            }
            Relocation::NoPassage => {
                Response::new().say(format!("You can't get to the {argument} from here."))
            }
            Relocation::AllClosed { doors } => Response::new()
                .say(format!("All doors to the {argument} are closed."))
                .say(format!("Open the {} first.", join_with(&doors, "or"))),
        }
    }
}

// =============================================================================
// open / close
// =============================================================================

/// `/open <door>` and `/close <door>`.
pub struct DoorCommand {
    target: DoorState,
}

impl DoorCommand {
    /// A handler that opens doors.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            target: DoorState::Open,
        }
    }

    /// A handler that closes doors.
    #[must_use]
    pub const fn close() -> Self {
        Self {
            target: DoorState::Closed,
        }
    }

    const fn verb(&self) -> &'static str {
        match self.target {
            DoorState::Open => "open",
            DoorState::Closed => "close",
        }
    }
}

impl Command for DoorCommand {
    fn execute(&self, navigator: &mut Navigator, map: &mut Map, argument: &str) -> Response {
        if argument.is_empty() {
            let doors: Vec<String> = navigator
                .doors_here(map)
                .iter()
                .map(|d| describe_door(map, d.name()))
                .collect();
            let hint = if doors.is_empty() {
                "There are no doors here.".to_string()
            } else {
                format!("Doors here: {}.", doors.join(", "))
            };
            return Response::new()
                .say(format!("Which door do you want to {}?", self.verb()))
                .say(hint);
        }

        match navigator.set_door_state(map, argument, self.target) {
            DoorChange::Changed => Response::new()
                .say(format!("The {argument} is now {}.", self.target))
                .with_effect(Effect::DoorChanged {
                    door: argument.to_string(),
                    state: self.target,
                }),
            DoorChange::AlreadyInState => {
                Response::new().say(format!("The {argument} is already {}.", self.target))
            }
            DoorChange::NotHere => {
                Response::new().say(format!("There is no door called '{argument}' here."))
            }
        }
    }
}

// =============================================================================
// help / quit
// =============================================================================

/// `/help`.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _navigator: &mut Navigator, _map: &mut Map, _argument: &str) -> Response {
        CommandKind::ALL.iter().fold(
            Response::new().say("I understand these commands:"),
            |response, kind| {
                response.with_line(Line::system(
                    format!("{:<22} {}", kind.usage(), kind.summary()),
                    Align::Left,
                ))
            },
        )
    }
}

/// `/quit`.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn execute(&self, _navigator: &mut Navigator, _map: &mut Map, _argument: &str) -> Response {
        Response::new()
            .say("Goodbye.")
            .with_effect(Effect::Quit)
    }
}
