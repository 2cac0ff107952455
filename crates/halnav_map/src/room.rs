//! Rooms and the transitions leading out of them.

use im::Vector;

use crate::door::Door;

/// A neighbor room together with the doors leading to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    to: String,
    doors: Vector<String>,
}

impl Transition {
    fn new(to: &str, door: &str) -> Self {
        Self {
            to: to.to_string(),
            doors: Vector::unit(door.to_string()),
        }
    }

    /// Returns the neighbor room name.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns the doors leading to the neighbor, in attachment order.
    #[must_use]
    pub fn doors(&self) -> &Vector<String> {
        &self.doors
    }
}

/// A room in the navigation graph.
///
/// A room only knows door and room names. The doors themselves, with their
/// state, live in the [`Map`](crate::Map).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    name: String,
    /// Neighbors in first-attach order.
    transitions: Vector<Transition>,
    /// Incident doors in attachment order.
    doors: Vector<String>,
}

impl Room {
    /// Creates a room with no doors.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Vector::new(),
            doors: Vector::new(),
        }
    }

    /// Returns the room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attaches a door to this room.
    ///
    /// Every endpoint other than this room becomes a transition through the
    /// door. A door looping back into this room adds nothing and is not
    /// recorded. Returns whether the door was recorded.
    pub fn add_door(&mut self, door: &Door) -> bool {
        let mut recorded = false;
        for room in door.between() {
            if room != &self.name {
                self.add_transition(room, door.name());
                recorded = true;
            }
        }
        if recorded {
            self.doors.push_back(door.name().to_string());
        }
        recorded
    }

    fn add_transition(&mut self, to: &str, through: &str) {
        match self.transitions.iter_mut().find(|t| t.to == to) {
            Some(transition) => transition.doors.push_back(through.to_string()),
            None => self.transitions.push_back(Transition::new(to, through)),
        }
    }

    /// Returns every reachable neighbor with the doors leading to it.
    #[must_use]
    pub fn possible_transitions(&self) -> &Vector<Transition> {
        &self.transitions
    }

    /// Returns the transition to `room`, if there is a door leading there.
    #[must_use]
    pub fn transition_to(&self, room: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.to == room)
    }

    /// Returns true if a door leads from this room to `room`.
    #[must_use]
    pub fn leads_to(&self, room: &str) -> bool {
        self.transition_to(room).is_some()
    }

    /// Returns true if `door` is attached to this room.
    #[must_use]
    pub fn has_door(&self, door: &str) -> bool {
        self.doors.iter().any(|d| d == door)
    }

    /// Returns door names in attachment order.
    ///
    /// With `to_room`, only the doors leading to that room; empty when none do.
    #[must_use]
    pub fn get_doors(&self, to_room: Option<&str>) -> Vec<&str> {
        match to_room {
            None => self.doors.iter().map(String::as_str).collect(),
            Some(room) => self
                .transition_to(room)
                .map(|t| t.doors.iter().map(String::as_str).collect())
                .unwrap_or_default(),
        }
    }
}
