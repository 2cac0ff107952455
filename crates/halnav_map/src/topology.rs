//! Startup topology: the rooms, doors and start room a [`Map`] is built from.
//!
//! A topology is either the built-in spaceship or a JSON document:
//!
//! ```json
//! {
//!   "start": "cryosleep",
//!   "rooms": ["cryosleep", "corridor"],
//!   "doors": [
//!     { "name": "cryo door", "between": ["cryosleep", "corridor"] },
//!     { "name": "vent", "between": ["cryosleep", "corridor"], "state": "open" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use halnav_foundation::{DoorState, Error, ErrorContext, Result, is_normalized};
use serde::{Deserialize, Serialize};

use crate::map::Map;

/// A door in a topology description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSpec {
    /// Door name.
    pub name: String,
    /// The two rooms it connects.
    pub between: [String; 2],
    /// Initial state.
    #[serde(default)]
    pub state: DoorState,
}

impl DoorSpec {
    /// Creates a closed door description.
    #[must_use]
    pub fn new(name: &str, from: &str, to: &str) -> Self {
        Self {
            name: name.to_string(),
            between: [from.to_string(), to.to_string()],
            state: DoorState::Closed,
        }
    }

    /// Sets the initial state.
    #[must_use]
    pub fn with_state(mut self, state: DoorState) -> Self {
        self.state = state;
        self
    }
}

/// The fixed layout of the ship.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// The room the session starts in.
    pub start: String,
    /// Room names, in the order they are added.
    pub rooms: Vec<String>,
    /// Doors, in the order they are added.
    #[serde(default)]
    pub doors: Vec<DoorSpec>,
}

impl Topology {
    /// The built-in spaceship layout.
    ///
    /// The engine room and the cargo bay are joined by two doors.
    #[must_use]
    pub fn spaceship() -> Self {
        let rooms = [
            "cryosleep",
            "corridor",
            "bridge",
            "engine room",
            "cargo bay",
            "airlock",
        ];
        Self {
            start: "cryosleep".to_string(),
            rooms: rooms.iter().map(ToString::to_string).collect(),
            doors: vec![
                DoorSpec::new("cryo door", "cryosleep", "corridor"),
                DoorSpec::new("bridge door", "corridor", "bridge"),
                DoorSpec::new("engine door", "corridor", "engine room"),
                DoorSpec::new("cargo door", "corridor", "cargo bay"),
                DoorSpec::new("service hatch", "engine room", "cargo bay"),
                DoorSpec::new("maintenance shaft", "engine room", "cargo bay"),
                DoorSpec::new("airlock door", "cargo bay", "airlock"),
            ],
        }
    }

    /// Parses a topology from JSON.
    ///
    /// # Errors
    ///
    /// Returns a topology error carrying the offending line if the document
    /// is not a valid topology.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| {
            Error::topology(e.to_string()).with_context(ErrorContext::new().with_line(e.line()))
        })
    }

    /// Reads and parses a topology file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json(&source).map_err(|mut err| {
            let line = err.context.as_ref().and_then(|c| c.line);
            let mut context = ErrorContext::new().with_source(path.display().to_string());
            if let Some(line) = line {
                context = context.with_line(line);
            }
            err.context = Some(context);
            err
        })
    }

    /// Serializes the topology as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::internal(e.to_string()))
    }

    /// Builds the map.
    ///
    /// A topology is configuration, so unlike [`Map::add_room`] and
    /// [`Map::add_door`] a rejected entry is an error. Names must be in the
    /// form typed arguments are normalized to (see [`halnav_foundation::normalize_name`]),
    /// otherwise no command could ever reach them.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first room or door that could not be added,
    /// or the start room if it is not on the map.
    pub fn build(&self) -> Result<Map> {
        let mut map = Map::new();

        for room in &self.rooms {
            if !is_normalized(room) || !map.add_room(room) {
                return Err(Error::invalid_room(room));
            }
        }

        for spec in &self.doors {
            let [from, to] = &spec.between;
            if !is_normalized(&spec.name) || !map.add_door(&spec.name, from, to) {
                return Err(Error::invalid_door(&spec.name, from, to));
            }
            if let Some(door) = map.get_door_mut(&spec.name) {
                door.set_state(spec.state);
            }
        }

        if !map.has_room(&self.start) {
            return Err(Error::unknown_start_room(&self.start));
        }

        Ok(map)
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::spaceship()
    }
}
