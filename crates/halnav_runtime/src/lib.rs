//! REPL and CLI for the HAL navigator.
//!
//! This crate provides:
//! - [`Repl`] - The interactive chat with HAL9000
//! - [`Session`] - The agent plus its tracer
//! - [`Renderer`] - Aligned, colored terminal output
//! - [`RuntimeConfig`] - Everything the command line can set

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod render;
pub mod repl;
pub mod session;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use render::Renderer;
pub use repl::Repl;
pub use session::Session;
