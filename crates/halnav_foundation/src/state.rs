//! Door state.
//!
//! A door is either closed or open. Every way of producing a [`DoorState`]
//! from outside data goes through a fallible conversion, so a malformed value
//! can never reach a door.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The state of a door.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DoorState {
    /// The door blocks passage. Every door starts closed.
    #[default]
    Closed,
    /// The door can be passed through.
    Open,
}

impl DoorState {
    /// Raw code of the closed state.
    pub const CLOSED_CODE: u8 = 0;
    /// Raw code of the open state.
    pub const OPEN_CODE: u8 = 1;

    /// Returns the lowercase name of this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }

    /// Returns the raw code of this state.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Closed => Self::CLOSED_CODE,
            Self::Open => Self::OPEN_CODE,
        }
    }

    /// Returns true if the door can be passed through.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns the other state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that does not name a door state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("not a door state: {0}")]
pub struct InvalidDoorState(pub String);

impl TryFrom<u8> for DoorState {
    type Error = InvalidDoorState;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            Self::CLOSED_CODE => Ok(Self::Closed),
            Self::OPEN_CODE => Ok(Self::Open),
            other => Err(InvalidDoorState(other.to_string())),
        }
    }
}

impl FromStr for DoorState {
    type Err = InvalidDoorState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "closed" => Ok(Self::Closed),
            "open" => Ok(Self::Open),
            _ => Err(InvalidDoorState(s.to_string())),
        }
    }
}

impl TryFrom<&str> for DoorState {
    type Error = InvalidDoorState;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
