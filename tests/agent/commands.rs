//! Integration tests for query commands and the fallback

use halnav_agent::{Align, Hal9000, Tone};
use halnav_map::Topology;

fn spaceship() -> Hal9000 {
    Hal9000::new(&Topology::spaceship()).unwrap()
}

fn in_corridor() -> Hal9000 {
    let mut hal = spaceship();
    hal.handle_line("/open cryo door");
    hal.handle_line("/goto corridor");
    hal
}

#[test]
fn where_without_argument() {
    assert_eq!(spaceship().handle_line("/where").text(), "You are in the cryosleep.");
}

#[test]
fn where_door_names_the_other_side() {
    let mut hal = in_corridor();
    assert_eq!(
        hal.handle_line("/where bridge door").text(),
        "The bridge door leads to the bridge. It is closed."
    );
}

#[test]
fn where_room_names_the_doors() {
    let mut hal = in_corridor();
    hal.handle_line("/open engine door");
    hal.handle_line("/goto engine room");
    hal.handle_line("/open maintenance shaft");

    assert_eq!(
        hal.handle_line("/where cargo bay").text(),
        "You can get to the cargo bay through the service hatch or maintenance shaft."
    );
}

#[test]
fn where_own_room_lists_transitions() {
    let mut hal = in_corridor();
    let here = hal.handle_line("/where corridor");
    let transitions = hal.handle_line("/transitions");
    assert_eq!(here, transitions);
}

#[test]
fn where_far_away() {
    let mut hal = spaceship();
    assert_eq!(
        hal.handle_line("/where bridge").text(),
        "There is no such place near here: bridge."
    );
}

#[test]
fn transitions_lists_every_neighbor() {
    let mut hal = in_corridor();
    let response = hal.handle_line("/transitions");
    let lines = response.lines();

    assert_eq!(lines[0].text, "From the corridor you can go to:");
    assert_eq!(lines.len(), 5);
    assert!(response.text().contains("the bridge through the bridge door (closed)"));
    assert!(response.text().contains("the cryosleep through the cryo door (open)"));
}

#[test]
fn goto_without_argument_suggests_neighbors() {
    let mut hal = spaceship();
    assert_eq!(
        hal.handle_line("/goto").text(),
        "Where do you want to go?\nFrom here you can go to the corridor."
    );
}

#[test]
fn open_without_argument_lists_doors() {
    let mut hal = spaceship();
    assert_eq!(
        hal.handle_line("/open").text(),
        "Which door do you want to open?\nDoors here: cryo door (closed)."
    );
}

#[test]
fn unknown_command_is_refused() {
    let mut hal = spaceship();
    let response = hal.handle_line("/fly to Jupiter");
    let lines = response.lines();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "Command `fly to Jupiter` unknown.");
    assert_eq!(lines[0].tone, Tone::Error);
    assert_eq!(lines[1].text, "I'm afraid I can't do that.");
    assert_eq!(lines[1].tone, Tone::Agent);
    assert_eq!(lines[1].align, Align::Right);
}

#[test]
fn help_lists_every_command() {
    let mut hal = spaceship();
    let response = hal.handle_line("/?");
    assert_eq!(response.lines().len(), 8);
    assert!(response.text().contains("/goto <room>"));
}

#[test]
fn quit_says_goodbye() {
    let mut hal = spaceship();
    let response = hal.handle_line("/exit");
    assert!(response.is_quit());
    assert_eq!(response.text(), "Goodbye.");
}
