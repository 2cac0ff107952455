//! Integration tests for the navigation graph
//!
//! Tests construction rules, neighbor bookkeeping and door lookups.

use halnav_foundation::DoorState;
use halnav_map::Map;
use proptest::prelude::*;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn rooms_need_unique_names() {
    let mut map = Map::new();
    assert!(map.add_room("bridge"));
    assert!(!map.add_room("bridge"));
    assert!(!map.add_room(""));
    assert_eq!(map.room_count(), 1);
}

#[test]
fn doors_need_both_rooms() {
    let mut map = Map::new();
    map.add_rooms(["a", "b"]);

    assert!(!map.add_door("d", "a", "z"));
    assert!(!map.add_door("d", "z", "a"));
    assert!(!map.add_door("", "a", "b"));
    assert_eq!(map.door_count(), 0);

    assert!(map.add_door("d", "a", "b"));
    assert!(!map.add_door("d", "a", "b"));
    assert_eq!(map.door_count(), 1);
}

#[test]
fn rejected_door_leaves_rooms_untouched() {
    let mut map = Map::new();
    map.add_rooms(["a", "b"]);
    map.add_door("d", "a", "missing");

    assert!(map.get_room("a").unwrap().possible_transitions().is_empty());
    assert!(map.get_room("a").unwrap().get_doors(None).is_empty());
}

#[test]
fn new_doors_are_closed() {
    let mut map = Map::new();
    map.add_rooms(["a", "b"]);
    map.add_door("d", "a", "b");
    assert_eq!(map.door_state("d"), Some(DoorState::Closed));
    assert_eq!(map.door_state("nope"), None);
}

// =============================================================================
// Neighbors
// =============================================================================

#[test]
fn door_is_visible_from_both_sides() {
    let mut map = Map::new();
    map.add_rooms(["a", "b"]);
    map.add_door("d", "a", "b");

    assert!(map.get_room("a").unwrap().leads_to("b"));
    assert!(map.get_room("b").unwrap().leads_to("a"));
    assert_eq!(map.get_room("b").unwrap().get_doors(Some("a")), vec!["d"]);
}

#[test]
fn parallel_doors_share_one_transition() {
    let mut map = Map::new();
    map.add_rooms(["a", "b"]);
    map.add_door("d1", "a", "b");
    map.add_door("d2", "b", "a");

    let transitions = map.possible_transitions("a").unwrap();
    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].to(), "b");
    let doors: Vec<&str> = transitions[0].doors().iter().map(String::as_str).collect();
    assert_eq!(doors, vec!["d1", "d2"]);
}

#[test]
fn self_loop_adds_no_transition() {
    let mut map = Map::new();
    map.add_room("a");
    map.add_door("loop", "a", "a");

    let room = map.get_room("a").unwrap();
    assert!(room.possible_transitions().is_empty());
    assert!(!room.has_door("loop"));
    assert!(!room.leads_to("a"));
}

#[test]
fn get_doors_to_unrelated_room_is_empty() {
    let mut map = Map::new();
    map.add_rooms(["a", "b", "c"]);
    map.add_door("d", "a", "b");
    assert!(map.get_room("a").unwrap().get_doors(Some("c")).is_empty());
}

#[test]
fn clones_are_independent() {
    let mut map = Map::new();
    map.add_rooms(["a", "b"]);
    map.add_door("d", "a", "b");

    let snapshot = map.clone();
    map.get_door_mut("d").unwrap().set_state(DoorState::Open);

    assert_eq!(snapshot.door_state("d"), Some(DoorState::Closed));
    assert_eq!(map.door_state("d"), Some(DoorState::Open));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn no_room_is_its_own_neighbor(
        edges in prop::collection::vec((0usize..5, 0usize..5), 0..20)
    ) {
        let mut map = Map::new();
        map.add_rooms((0..5).map(|i| format!("r{i}")));
        for (n, (a, b)) in edges.iter().enumerate() {
            map.add_door(&format!("d{n}"), &format!("r{a}"), &format!("r{b}"));
        }

        for room in map.rooms() {
            prop_assert!(!room.leads_to(room.name()));
            for transition in room.possible_transitions() {
                prop_assert!(!transition.doors().is_empty());
                for door in transition.doors() {
                    let door = map.get_door(door).unwrap();
                    prop_assert!(door.connects(room.name()));
                    prop_assert!(door.connects(transition.to()));
                }
            }
        }
    }
}
