//! Core game state, transitions and the state container.

#![allow(unused_imports)]

pub mod constants;
pub mod game_state;
pub mod store;

pub use constants::*;
pub use game_state::*;
pub use store::*;
