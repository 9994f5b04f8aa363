//! Generalized tic-tac-toe board.
//!
//! `BoardState` implements `GameState`, so the tree engine can expand it
//! without knowing how lines are detected.

mod lines;
mod state;

pub use lines::LineChecker;
pub use state::BoardState;
