//! Game state contract for the tree engine.
//!
//! Games implement `GameState` to define:
//! - Which moves are legal
//! - How a move changes the state
//! - When the game is over and who won
//!
//! The tree engine calls into `GameState` but never interprets
//! board-specific concepts directly.

pub mod engine;

pub use engine::{GameState, Outcome};
