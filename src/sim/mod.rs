//! Simulation module
//!
//! All gameplay logic lives here:
//! - Randomness comes from the RNG owned by `GameState`
//! - Traffic moves before collisions are checked
//! - No rendering or platform dependencies

pub mod avatar;
pub mod collision;
pub mod life;
pub mod obstacle;
pub mod random;
pub mod state;
pub mod tick;

pub use avatar::{Avatar, Key, Look};
pub use collision::{Rect, first_overlap};
pub use life::{LifeIndicator, add_lives};
pub use obstacle::{Obstacle, Variant, create_batch};
pub use random::{random_lane_y, random_speed, random_variant};
pub use state::{GameEvent, GamePhase, GameState, PendingRespawn};
pub use tick::{check_collisions, handle_key, tick};
