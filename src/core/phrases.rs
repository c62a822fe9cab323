//! Challenge phrase corpus
//!
//! Phrases are compiled in and drawn uniformly at session start. They are
//! short, neutral sentences meant to be read aloud, and they feed the seal
//! as opaque strings afterwards.

use rand::Rng;

/// Built-in challenge phrases
pub const PHRASES: &[&str] = &[
    "the silver fox waits by the river",
    "seven lanterns hang over the harbor",
    "a quiet garden grows behind the wall",
    "the northern train leaves at dawn",
    "blue kites drift above the old bridge",
    "the baker counts his loaves twice",
    "rain settles softly on the tin roof",
    "two clocks disagree in the hallway",
    "the lighthouse turns against the fog",
    "green apples fall far from the gate",
    "a paper boat crosses the fountain",
    "the violinist tunes before the storm",
];

/// Draw one phrase uniformly at random.
pub fn draw_phrase() -> &'static str {
    let idx = rand::thread_rng().gen_range(0..PHRASES.len());
    PHRASES[idx]
}
