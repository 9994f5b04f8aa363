//! Core types: players, cells, configuration, errors.
//!
//! This module contains the building blocks shared by the board and the
//! tree engine.

pub mod player;
pub mod config;
pub mod error;

pub use player::{Cell, Player};
pub use config::{BoardConfig, TreeConfig};
pub use error::{Error, Result};
