//! The graph store owning every room and door.
//!
//! The map uses persistent data structures, so cloning it is O(1) and clones
//! share structure until one of them changes a door.

use halnav_foundation::DoorState;
use im::OrdMap;

use crate::door::Door;
use crate::room::{Room, Transition};

/// The navigation graph.
///
/// Construction operations never fail loudly: they report whether the item
/// was added, and a rejected item leaves the map untouched.
#[derive(Clone, Debug, Default)]
pub struct Map {
    rooms: OrdMap<String, Room>,
    doors: OrdMap<String, Door>,
}

impl Map {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room.
    ///
    /// Every room must have a name and names are unique. Returns whether the
    /// room was added.
    pub fn add_room(&mut self, name: &str) -> bool {
        if name.is_empty() || self.rooms.contains_key(name) {
            return false;
        }
        self.rooms.insert(name.to_string(), Room::new(name));
        true
    }

    /// Adds several rooms. Names that cannot be added are skipped.
    pub fn add_rooms<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_room(name.as_ref());
        }
    }

    /// Adds a closed door between two existing rooms.
    ///
    /// The door name must be non-empty and unused, and both rooms must already
    /// be on the map. On success the door is attached to both rooms.
    pub fn add_door(&mut self, name: &str, from: &str, to: &str) -> bool {
        if name.is_empty() || self.doors.contains_key(name) {
            return false;
        }
        if !self.rooms.contains_key(from) || !self.rooms.contains_key(to) {
            return false;
        }

        let door = Door::new(name, from, to);
        for endpoint in [from, to] {
            if let Some(room) = self.rooms.get_mut(endpoint) {
                room.add_door(&door);
            }
            if from == to {
                break;
            }
        }
        self.doors.insert(name.to_string(), door);
        true
    }

    /// Looks up a room by name.
    #[must_use]
    pub fn get_room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    /// Looks up a door by name.
    #[must_use]
    pub fn get_door(&self, name: &str) -> Option<&Door> {
        self.doors.get(name)
    }

    /// Looks up a door by name for mutation.
    pub fn get_door_mut(&mut self, name: &str) -> Option<&mut Door> {
        self.doors.get_mut(name)
    }

    /// Returns the state of a door.
    #[must_use]
    pub fn door_state(&self, name: &str) -> Option<DoorState> {
        self.doors.get(name).map(Door::state)
    }

    /// Returns the transitions out of a room, or `None` for an unknown room.
    #[must_use]
    pub fn possible_transitions(&self, room: &str) -> Option<&im::Vector<Transition>> {
        self.rooms.get(room).map(Room::possible_transitions)
    }

    /// Returns true if the room exists.
    #[must_use]
    pub fn has_room(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    /// Iterates rooms in name order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Iterates doors in name order.
    pub fn doors(&self) -> impl Iterator<Item = &Door> {
        self.doors.values()
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Returns the number of doors.
    #[must_use]
    pub fn door_count(&self) -> usize {
        self.doors.len()
    }
}
