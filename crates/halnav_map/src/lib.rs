//! Rooms, doors and the navigation graph for the HAL navigator.
//!
//! This crate provides:
//! - [`Door`] - A named two-state edge between two rooms
//! - [`Room`] - A named node with its doors and reachable neighbors
//! - [`Map`] - The graph store owning every room and door
//! - [`Topology`] - The startup description a [`Map`] is built from
//!
//! Rooms and doors never hold references to each other. Both live in the
//! [`Map`] and point at one another by name only.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod door;
pub mod map;
pub mod room;
pub mod topology;

pub use door::Door;
pub use map::Map;
pub use room::{Room, Transition};
pub use topology::{DoorSpec, Topology};
