//! Per-frame simulation tick and key handling
//!
//! The host calls `tick` once per animation frame and `handle_key` once per
//! key release.

use super::avatar::Key;
use super::collision::first_overlap;
use super::state::GameState;

/// Advance the game by `dt` seconds.
///
/// Order within a tick: due respawns fire, every car moves, then the
/// avatar is checked against the cars.
pub fn tick(state: &mut GameState, dt: f32) {
    state.advance_respawns(dt);

    let GameState { obstacles, rng, .. } = &mut *state;
    for obstacle in obstacles.iter_mut() {
        obstacle.update(dt, &mut *rng);
    }

    check_collisions(state);
}

/// First car overlapping the avatar costs a life; one life per tick at most
pub fn check_collisions(state: &mut GameState) {
    if !state.is_active() {
        return;
    }

    let avatar = state.avatar.bounds();
    let boxes: Vec<_> = state.obstacles.iter().map(|o| o.bounds()).collect();
    if first_overlap(&avatar, &boxes).is_some() {
        state.die();
    }
}

/// Apply one key release.
///
/// Movement only happens while the game is active. `Confirm` while the
/// avatar is dead or the run is over restarts the game.
pub fn handle_key(state: &mut GameState, key: Key) {
    if state.is_active() {
        if key == Key::Confirm {
            return;
        }
        state.avatar.step(key);
        if state.avatar.crossed() {
            state.win();
        }
    } else if key == Key::Confirm {
        state.reset();
    }
}
