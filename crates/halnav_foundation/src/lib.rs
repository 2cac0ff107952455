//! Core types and errors shared by every layer of the HAL navigator.
//!
//! This crate provides:
//! - [`DoorState`] - The two states a door can be in
//! - [`normalize_name`] - The form room and door names are matched in
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod name;
pub mod state;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use name::{is_normalized, normalize_name};
pub use state::{DoorState, InvalidDoorState};
