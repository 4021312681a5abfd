//! Game state and core simulation types
//!
//! `GameState` owns every entity on the road plus the bookkeeping for
//! lives, score, pending respawns and the events the HUD listens to.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::avatar::{Avatar, Look};
use super::life::{LifeIndicator, add_lives};
use super::obstacle::{Obstacle, create_batch};
use super::random::seeded;
use crate::consts::*;
use crate::renderer::DrawRequest;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Avatar accepts movement, collisions are checked
    Active,
    /// Avatar was hit and is waiting to respawn
    RespawnDelay,
    /// Out of lives; waiting for Confirm
    GameOver,
}

/// Notifications for the presentation layer (score text, banner)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged(u32),
    LifeLost { remaining: u32 },
    Respawned,
    GameOver { score: u32 },
    GameReset,
}

/// A respawn waiting for its delay to elapse.
///
/// Tagged with the session it was scheduled in: a full reset starts a new
/// session and the stale respawn is discarded when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingRespawn {
    pub session: u32,
    /// Seconds until it fires
    pub remaining: f32,
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub avatar: Avatar,
    /// Cars in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Hearts, one per remaining life
    pub lives: Vec<LifeIndicator>,
    /// Bumped on every full reset
    pub session: u32,
    pub pending_respawns: Vec<PendingRespawn>,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = seeded(seed);
        let obstacles = create_batch(ENEMY_COUNT, &mut rng);
        Self {
            seed,
            phase: GamePhase::Active,
            avatar: Avatar::default(),
            obstacles,
            lives: add_lives(LIFE_COUNT),
            session: 0,
            pending_respawns: Vec::new(),
            rng,
            events: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn score(&self) -> u32 {
        self.avatar.score
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Avatar reached the far side
    pub fn win(&mut self) {
        self.avatar.score += SCORE_PER_CROSSING;
        log::debug!("Crossed! score {}", self.avatar.score);
        self.emit(GameEvent::ScoreChanged(self.avatar.score));
        self.respawn_avatar();
    }

    /// Avatar got hit: lose a life, then respawn or end the run
    pub fn die(&mut self) {
        self.avatar.lives = self.avatar.lives.saturating_sub(1);
        self.lives.pop();
        self.avatar.look = Look::Dead;
        let remaining = self.avatar.lives;
        log::debug!("Hit by a car, {} lives left", remaining);
        self.emit(GameEvent::LifeLost { remaining });

        if remaining > 0 {
            self.phase = GamePhase::RespawnDelay;
            self.pending_respawns.push(PendingRespawn {
                session: self.session,
                remaining: RESPAWN_DELAY,
            });
        } else {
            self.over();
        }
    }

    /// Freeze traffic and show the game over banner
    pub fn over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.obstacles.clear();
        log::info!("Game over with score {}", self.avatar.score);
        self.emit(GameEvent::GameOver {
            score: self.avatar.score,
        });
    }

    /// Start a fresh run: full lives, zero score, new traffic
    pub fn reset(&mut self) {
        self.session = self.session.wrapping_add(1);
        self.emit(GameEvent::GameReset);
        self.respawn_avatar();
        self.avatar.lives = LIFE_COUNT;
        self.avatar.score = 0;
        self.emit(GameEvent::ScoreChanged(0));
        self.obstacles = create_batch(ENEMY_COUNT, &mut self.rng);
        self.lives = add_lives(LIFE_COUNT);
        log::info!("Game reset (session {})", self.session);
    }

    /// Avatar back to start, game running again
    fn respawn_avatar(&mut self) {
        self.avatar.reset();
        self.phase = GamePhase::Active;
    }

    /// Count down pending respawns and fire the ones that are due.
    /// Respawns from an earlier session are dropped without effect.
    pub fn advance_respawns(&mut self, dt: f32) {
        if self.pending_respawns.is_empty() {
            return;
        }

        for pending in &mut self.pending_respawns {
            pending.remaining -= dt;
        }

        let (due, waiting): (Vec<_>, Vec<_>) = self
            .pending_respawns
            .drain(..)
            .partition(|p| p.remaining <= 0.0);
        self.pending_respawns = waiting;

        for pending in due {
            if pending.session != self.session {
                log::debug!("Dropping stale respawn from session {}", pending.session);
                continue;
            }
            if self.phase != GamePhase::RespawnDelay {
                continue;
            }
            self.respawn_avatar();
            self.emit(GameEvent::Respawned);
        }
    }

    /// Everything to draw this frame, back to front
    pub fn draw_list(&self) -> Vec<DrawRequest> {
        let mut list = Vec::with_capacity(self.obstacles.len() + self.lives.len() + 1);
        list.extend(self.obstacles.iter().map(Obstacle::draw_request));
        list.push(self.avatar.draw_request());
        list.extend(self.lives.iter().map(LifeIndicator::draw_request));
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::start_pos;

    #[test]
    fn test_new_game() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.obstacles.len(), ENEMY_COUNT);
        assert_eq!(state.lives.len(), LIFE_COUNT as usize);
        assert_eq!(state.avatar.pos, start_pos());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_die_keeps_hearts_in_sync() {
        let mut state = GameState::new(1);
        state.die();
        assert_eq!(state.avatar.lives, LIFE_COUNT - 1);
        assert_eq!(state.lives.len(), state.avatar.lives as usize);
        assert_eq!(state.phase, GamePhase::RespawnDelay);
        assert_eq!(state.avatar.look, Look::Dead);
        assert_eq!(state.pending_respawns.len(), 1);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::LifeLost { remaining: 3 }]
        );
    }

    #[test]
    fn test_respawn_fires_after_delay() {
        let mut state = GameState::new(1);
        state.avatar.pos.y -= MOVE_Y;
        state.die();
        state.drain_events();

        state.advance_respawns(RESPAWN_DELAY / 2.0);
        assert_eq!(state.phase, GamePhase::RespawnDelay);

        state.advance_respawns(RESPAWN_DELAY);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.avatar.pos, start_pos());
        assert_eq!(state.avatar.look, Look::Normal);
        assert!(state.pending_respawns.is_empty());
        assert_eq!(state.drain_events(), vec![GameEvent::Respawned]);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut state = GameState::new(1);
        state.avatar.lives = 1;
        state.lives.truncate(1);
        state.die();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.obstacles.is_empty());
        assert!(state.lives.is_empty());
        assert!(state.pending_respawns.is_empty());
    }

    #[test]
    fn test_reset_discards_stale_respawn() {
        let mut state = GameState::new(1);
        state.die();
        state.reset();
        assert_eq!(state.phase, GamePhase::Active);

        // Move after the reset; the old respawn must not snap us back
        state.avatar.pos.x = 0.0;
        state.advance_respawns(1.0);
        assert_eq!(state.avatar.pos.x, 0.0);
        assert!(state.pending_respawns.is_empty());
        assert!(!state.drain_events().contains(&GameEvent::Respawned));
    }

    #[test]
    fn test_reset_twice_same_observable_state() {
        let mut state = GameState::new(5);
        state.avatar.score = 40;
        state.die();

        state.reset();
        let first = (
            state.avatar.pos,
            state.avatar.lives,
            state.score(),
            state.obstacles.len(),
            state.lives.clone(),
            state.phase,
        );
        state.reset();
        let second = (
            state.avatar.pos,
            state.avatar.lives,
            state.score(),
            state.obstacles.len(),
            state.lives.clone(),
            state.phase,
        );
        assert_eq!(first, second);
        assert_eq!(second.1, LIFE_COUNT);
        assert_eq!(second.2, 0);
        assert_eq!(second.3, ENEMY_COUNT);
    }

    #[test]
    fn test_draw_list_order() {
        use crate::renderer::Sprite;

        let state = GameState::new(9);
        let list = state.draw_list();
        assert_eq!(list.len(), ENEMY_COUNT + 1 + LIFE_COUNT as usize);
        assert!(matches!(list[0].sprite, Sprite::Car(_)));
        assert_eq!(list[ENEMY_COUNT].sprite, Sprite::Chicken);
        assert_eq!(list.last().map(|r| r.sprite), Some(Sprite::Heart));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(3);
        let json = serde_json::to_value(&state).expect("serialize");
        assert_eq!(json["phase"], "Active");
        assert_eq!(json["obstacles"].as_array().map(Vec::len), Some(ENEMY_COUNT));
    }
}
