//! Integration tests for the command vocabulary

use halnav_parser::CommandKind;

#[test]
fn aliases_resolve() {
    let cases = [
        ("where", CommandKind::Where),
        ("transitions", CommandKind::Transitions),
        ("goto", CommandKind::Relocate),
        ("relocate", CommandKind::Relocate),
        ("open", CommandKind::Open),
        ("close", CommandKind::Close),
        ("help", CommandKind::Help),
        ("?", CommandKind::Help),
        ("quit", CommandKind::Quit),
        ("exit", CommandKind::Quit),
    ];
    for (word, kind) in cases {
        assert_eq!(CommandKind::lookup(word), Some(kind), "{word}");
    }
}

#[test]
fn lookup_ignores_case() {
    assert_eq!(CommandKind::lookup("WhErE"), Some(CommandKind::Where));
}

#[test]
fn unknown_words() {
    assert_eq!(CommandKind::lookup("dance"), None);
    assert_eq!(CommandKind::lookup(""), None);
    assert_eq!(CommandKind::lookup("go"), None);
}

#[test]
fn every_command_has_help_text() {
    for kind in CommandKind::ALL {
        assert!(kind.usage().starts_with('/'), "{kind}");
        assert!(!kind.summary().is_empty(), "{kind}");
        assert_eq!(CommandKind::lookup(kind.name()), Some(kind));
    }
}

#[test]
fn names_are_the_first_alias() {
    assert_eq!(CommandKind::Relocate.name(), "goto");
    assert_eq!(CommandKind::Help.to_string(), "help");
    let aliases: Vec<_> = CommandKind::Quit.aliases().collect();
    assert_eq!(aliases, vec!["quit", "exit"]);
}
