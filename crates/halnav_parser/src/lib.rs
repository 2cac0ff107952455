//! Terminal input parsing for the HAL navigator.
//!
//! This crate turns a raw terminal line into something the agent can act on.
//!
//! # Architecture
//!
//! ```text
//! "/goto  Engine Room"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → Input::Command { name: "goto", argument: "engine room" }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → CommandKind::Relocate
//! │ LOOKUP          │
//! └─────────────────┘
//! ```
//!
//! Anything that does not start with `/` is free text for the chatbot.
//!
//! # Modules
//!
//! - [`tokenizer`] - Classify raw input as command, text or nothing
//! - [`command`] - Command lines and the fixed command vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod tokenizer;

pub use command::{CommandKind, CommandLine};
pub use tokenizer::{Input, InputTokenizer};
