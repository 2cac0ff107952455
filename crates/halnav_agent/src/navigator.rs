//! The navigator: where the session currently is, and how it may move.
//!
//! The navigator answers questions and performs moves but never talks. Each
//! operation returns an outcome value, and the command handlers decide what
//! to say about it.

use halnav_foundation::{DoorState, Error, Result};
use halnav_map::{Door, Map, Room, Transition};

/// Outcome of a relocation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Relocation {
    /// Moved through `door`.
    Moved {
        /// The room left behind.
        from: String,
        /// The open door used.
        door: String,
    },
    /// The destination is the current room.
    AlreadyThere,
    /// No room has that name.
    UnknownRoom,
    /// The room exists but no door leads there from here.
    NoPassage,
    /// Every door leading there is closed.
    AllClosed {
        /// The closed doors, in attachment order.
        doors: Vec<String>,
    },
}

/// Outcome of opening or closing a door.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DoorChange {
    /// The door now has the requested state.
    Changed,
    /// The door already had the requested state.
    AlreadyInState,
    /// No door with that name is attached to the current room.
    NotHere,
}

/// The session's position in the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    current_room: String,
}

impl Navigator {
    /// Places the navigator in `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not a room of `map`.
    pub fn new(map: &Map, start: &str) -> Result<Self> {
        if !map.has_room(start) {
            return Err(Error::unknown_start_room(start));
        }
        Ok(Self {
            current_room: start.to_string(),
        })
    }

    /// Returns the current room name.
    #[must_use]
    pub fn current_room_name(&self) -> &str {
        &self.current_room
    }

    /// Returns the current room.
    #[must_use]
    pub fn current_room<'m>(&self, map: &'m Map) -> Option<&'m Room> {
        map.get_room(&self.current_room)
    }

    /// Returns every neighbor of the current room with its doors.
    #[must_use]
    pub fn possible_transitions<'m>(&self, map: &'m Map) -> Vec<&'m Transition> {
        self.current_room(map)
            .map(|room| room.possible_transitions().iter().collect())
            .unwrap_or_default()
    }

    /// Returns the doors attached to the current room, in attachment order.
    #[must_use]
    pub fn doors_here<'m>(&self, map: &'m Map) -> Vec<&'m Door> {
        self.current_room(map)
            .map(|room| {
                room.get_doors(None)
                    .into_iter()
                    .filter_map(|name| map.get_door(name))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the door named `name` if it is attached to the current room.
    #[must_use]
    pub fn door_here<'m>(&self, map: &'m Map, name: &str) -> Option<&'m Door> {
        self.current_room(map)
            .filter(|room| room.has_door(name))
            .and_then(|_| map.get_door(name))
    }

    /// Tries to move to `destination`.
    ///
    /// The first open door in attachment order is used. The navigator only
    /// changes on [`Relocation::Moved`].
    pub fn relocate(&mut self, map: &Map, destination: &str) -> Relocation {
        if !map.has_room(destination) {
            return Relocation::UnknownRoom;
        }
        if destination == self.current_room {
            return Relocation::AlreadyThere;
        }

        let Some(transition) = self
            .current_room(map)
            .and_then(|room| room.transition_to(destination))
        else {
            return Relocation::NoPassage;
        };

        let open = transition
            .doors()
            .iter()
            .find(|name| map.door_state(name).is_some_and(DoorState::is_open));

        match open {
            Some(door) => {
                let door = door.clone();
                let from = std::mem::replace(&mut self.current_room, destination.to_string());
                Relocation::Moved { from, door }
            }
            None => Relocation::AllClosed {
                doors: transition.doors().iter().cloned().collect(),
            },
        }
    }

    /// Sets the state of a door attached to the current room.
    pub fn set_door_state(&self, map: &mut Map, door: &str, state: DoorState) -> DoorChange {
        if self.door_here(map, door).is_none() {
            return DoorChange::NotHere;
        }
        match map.get_door_mut(door) {
            Some(d) if d.state() == state => DoorChange::AlreadyInState,
            Some(d) => {
                d.set_state(state);
                DoorChange::Changed
            }
            None => DoorChange::NotHere,
        }
    }
}
