//! Integration tests for free-text chat

use halnav_agent::{ChatContext, Chatbot, FixedClock, Hal9000, Tone};
use halnav_map::Topology;

#[test]
fn where_am_i_follows_the_navigator() {
    let mut hal = Hal9000::new(&Topology::spaceship()).unwrap();
    assert_eq!(hal.handle_line("Where am I?").text(), "You are in the cryosleep now.");

    hal.handle_line("/open cryo door");
    hal.handle_line("/goto corridor");
    assert_eq!(hal.handle_line("where am i").text(), "You are in the corridor now.");
}

#[test]
fn chat_is_one_agent_line() {
    let mut hal = Hal9000::new(&Topology::spaceship()).unwrap();
    let response = hal.handle_line("tell me about the mission");
    assert_eq!(response.lines().len(), 1);
    assert_eq!(response.lines()[0].tone, Tone::Agent);
    assert!(response.effect().is_none());
}

#[test]
fn night_greeting() {
    let context = ChatContext {
        location: "bridge",
        hour: 2,
    };
    let mut bot = Chatbot::new(3);
    for _ in 0..20 {
        let reply = bot.respond("good evening", &context);
        assert!(
            ["Good night! This is HAL.", "Hello.", "Good night."].contains(&reply.as_str()),
            "{reply}"
        );
    }
}

#[test]
fn acknowledgements_and_incredulity() {
    let context = ChatContext {
        location: "bridge",
        hour: 12,
    };
    let mut bot = Chatbot::new(0);
    assert!(["Good.", "Do you think so?", "Awesome.", "Perfect."]
        .contains(&bot.respond("cool", &context).as_str()));
    assert!(["Of course!", "Sure!", "Yes!", "Absolutely."]
        .contains(&bot.respond("Are you serious?", &context).as_str()));
}

#[test]
fn seeded_sessions_replay() {
    let transcript = |seed| {
        let mut hal = Hal9000::new(&Topology::spaceship())
            .unwrap()
            .with_seed(seed)
            .with_clock(FixedClock(8));
        ["hal", "hi", "ok", "what is this place", "??"]
            .iter()
            .map(|line| hal.handle_line(line).text())
            .collect::<Vec<_>>()
    };
    assert_eq!(transcript(11), transcript(11));
}
