//! Integration tests for DoorState
//!
//! Tests the two states and every way of converting into them.

use halnav_foundation::{DoorState, InvalidDoorState};
use proptest::prelude::*;

#[test]
fn new_doors_are_closed() {
    assert_eq!(DoorState::default(), DoorState::Closed);
}

#[test]
fn codes() {
    assert_eq!(DoorState::Closed.code(), DoorState::CLOSED_CODE);
    assert_eq!(DoorState::Open.code(), DoorState::OPEN_CODE);
    assert_eq!(DoorState::try_from(0u8), Ok(DoorState::Closed));
    assert_eq!(DoorState::try_from(1u8), Ok(DoorState::Open));
}

#[test]
fn names_parse() {
    assert_eq!("open".parse::<DoorState>(), Ok(DoorState::Open));
    assert_eq!(" Closed ".parse::<DoorState>(), Ok(DoorState::Closed));
    assert_eq!(DoorState::try_from("OPEN"), Ok(DoorState::Open));
}

#[test]
fn other_values_are_rejected() {
    assert!(matches!(DoorState::try_from(2u8), Err(InvalidDoorState(_))));
    assert!("ajar".parse::<DoorState>().is_err());
    assert!("".parse::<DoorState>().is_err());
}

#[test]
fn toggling() {
    assert_eq!(DoorState::Closed.toggled(), DoorState::Open);
    assert!(DoorState::Closed.toggled().is_open());
}

proptest! {
    #[test]
    fn display_parses_back(open in any::<bool>()) {
        let state = if open { DoorState::Open } else { DoorState::Closed };
        prop_assert_eq!(state.to_string().parse::<DoorState>(), Ok(state));
    }
}
