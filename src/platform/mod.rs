//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (raw key codes to game keys)

pub mod input;

pub use input::{key_from_code, key_from_name};
