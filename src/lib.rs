//! HAL navigator - Chat with HAL9000 and move around the ship
//!
//! This crate re-exports all layers of the navigator for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: halnav_runtime    - REPL, CLI, rendering
//!          halnav_debug      - Session tracing
//! Layer 3: halnav_agent      - Navigator, command interpreter, chatbot
//! Layer 2: halnav_parser     - Slash commands and free text
//! Layer 1: halnav_map        - Rooms, doors, topology files
//! Layer 0: halnav_foundation - Door state, errors
//! ```

pub use halnav_agent as agent;
pub use halnav_debug as debug;
pub use halnav_foundation as foundation;
pub use halnav_map as map;
pub use halnav_parser as parser;
pub use halnav_runtime as runtime;
