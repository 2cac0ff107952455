//! Integration tests for Layer 2: Parser
//!
//! Tests for input classification and the command vocabulary.

mod commands;
mod tokenizer;
