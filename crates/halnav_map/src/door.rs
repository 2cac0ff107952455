//! Doors: named two-state edges between rooms.

use halnav_foundation::DoorState;

/// A door connecting two rooms.
///
/// Doors are created closed. The endpoint order is kept as given but carries
/// no meaning: a door leads both ways.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Door {
    name: String,
    state: DoorState,
    between: [String; 2],
}

impl Door {
    /// Creates a closed door between two rooms.
    #[must_use]
    pub fn new(name: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: DoorState::Closed,
            between: [from.into(), to.into()],
        }
    }

    /// Returns the door name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> DoorState {
        self.state
    }

    /// Sets the state.
    pub fn set_state(&mut self, state: DoorState) {
        self.state = state;
    }

    /// Sets the state from a raw value such as a code or a state name.
    ///
    /// Returns `false` and leaves the door untouched when the value does not
    /// name a door state.
    pub fn set_state_from<T>(&mut self, value: T) -> bool
    where
        T: TryInto<DoorState>,
    {
        match value.try_into() {
            Ok(state) => {
                self.state = state;
                true
            }
            Err(_) => false,
        }
    }

    /// Returns the two endpoint room names.
    #[must_use]
    pub const fn between(&self) -> &[String; 2] {
        &self.between
    }

    /// Returns true if one of the endpoints is `room`.
    #[must_use]
    pub fn connects(&self, room: &str) -> bool {
        self.between.iter().any(|r| r == room)
    }

    /// Returns the endpoint on the other side of `room`.
    ///
    /// `None` if the door does not touch `room`, or if it loops back into it.
    #[must_use]
    pub fn other_side(&self, room: &str) -> Option<&str> {
        let [a, b] = &self.between;
        if a == room && b != room {
            Some(b.as_str())
        } else if b == room && a != room {
            Some(a.as_str())
        } else {
            None
        }
    }
}
