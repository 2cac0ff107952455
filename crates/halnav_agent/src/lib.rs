//! The HAL9000 agent: navigation state, command interpretation and chat.
//!
//! This crate provides:
//! - [`Navigator`] - The session's current room and the moves it allows
//! - [`Command`] - The capability every command handler implements
//! - [`Interpreter`] - The fixed table from [`CommandKind`](halnav_parser::CommandKind) to handler
//! - [`Chatbot`] - Canned replies to free text
//! - [`Hal9000`] - The agent tying them together
//! - [`Response`] - What the agent says back, and what it changed

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod agent;
pub mod chat;
pub mod clock;
pub mod command;
pub mod interpreter;
pub mod navigator;
pub mod response;

pub use agent::Hal9000;
pub use chat::{ChatContext, Chatbot};
pub use clock::{Clock, FixedClock, LocalClock};
pub use command::Command;
pub use interpreter::Interpreter;
pub use navigator::{DoorChange, Navigator, Relocation};
pub use response::{Align, Effect, Line, Response, Tone};
