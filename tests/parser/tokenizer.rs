//! Integration tests for the input tokenizer

use halnav_parser::{CommandKind, CommandLine, Input, InputTokenizer};
use proptest::prelude::*;

fn command(text: &str) -> CommandLine {
    match InputTokenizer::tokenize(text) {
        Input::Command(line) => line,
        other => panic!("expected a command, got {other:?}"),
    }
}

#[test]
fn slash_starts_a_command() {
    let line = command("/goto bridge");
    assert_eq!(line.name, "goto");
    assert_eq!(line.argument, "bridge");
    assert_eq!(line.kind(), Some(CommandKind::Relocate));
}

#[test]
fn leading_blanks_before_the_slash_are_ignored() {
    assert_eq!(command("   /where").kind(), Some(CommandKind::Where));
}

#[test]
fn argument_is_normalized() {
    let line = command("/GOTO   Engine \t Room  ");
    assert_eq!(line.name, "goto");
    assert_eq!(line.argument, "engine room");
}

#[test]
fn raw_keeps_what_was_typed() {
    let line = command("/Dance  Wildly");
    assert_eq!(line.raw, "Dance  Wildly");
    assert_eq!(line.kind(), None);
}

#[test]
fn lone_slash_is_an_unknown_command() {
    let line = command("/");
    assert!(line.name.is_empty());
    assert_eq!(line.kind(), None);
}

#[test]
fn text_and_blank_lines() {
    assert_eq!(
        InputTokenizer::tokenize("  Hello HAL  "),
        Input::Text("Hello HAL".to_string())
    );
    assert_eq!(InputTokenizer::tokenize(" \t "), Input::Empty);
    assert_eq!(InputTokenizer::tokenize(""), Input::Empty);
}

#[test]
fn slash_inside_text_is_not_a_command() {
    assert!(matches!(
        InputTokenizer::tokenize("either/or"),
        Input::Text(_)
    ));
}

proptest! {
    #[test]
    fn arguments_have_no_extra_whitespace(words in prop::collection::vec("[a-zA-Z]{1,8}", 0..5)) {
        let text = format!("/open  {}  ", words.join("   "));
        let line = command(&text);
        prop_assert_eq!(line.argument, words.join(" ").to_lowercase());
    }

    #[test]
    fn tokenize_never_panics(text in ".*") {
        let _ = InputTokenizer::tokenize(&text);
    }
}
