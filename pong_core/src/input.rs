//! Keyboard input handling
//!
//! Pure mapping from key names (as delivered by `KeyboardEvent.key`) to
//! paddle velocity intents. The left player uses W/S, the right player the
//! arrow keys; the legacy `Up`/`Down` names are accepted too. Last key state
//! wins, with no repeat or debounce logic.

use crate::components::World;

/// Apply a key-down event: set the matching paddle's velocity intent
pub fn apply_key_down(world: &mut World, key: &str) {
    match key {
        "w" | "W" => world.left.dv = -world.left.speed,
        "s" | "S" => world.left.dv = world.left.speed,
        "ArrowUp" | "Up" => world.right.dv = -world.right.speed,
        "ArrowDown" | "Down" => world.right.dv = world.right.speed,
        _ => {}
    }
}

/// Apply a key-up event: releasing either of a paddle's keys stops it
pub fn apply_key_up(world: &mut World, key: &str) {
    match key {
        "w" | "W" | "s" | "S" => world.left.dv = 0.0,
        "ArrowUp" | "Up" | "ArrowDown" | "Down" => world.right.dv = 0.0,
        _ => {}
    }
}
