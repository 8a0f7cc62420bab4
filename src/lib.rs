//! # Ants vs. Bees
//!
//! A turn-based skirmish: ants dig in along a set of tunnels leading to
//! their queen while waves of bees fly in from the hive.
//!
//! This library provides the simulation engine (places, ants, bees, the
//! per-turn phase order and the win/loss rules) plus a text board and a
//! small command shell to drive it.

pub mod ant;
pub mod bee;
pub mod boost;
pub mod cli;
pub mod colony;
pub mod config;
pub mod error;
pub mod insect;
pub mod render;
pub mod shell;
pub mod simulation;

pub use ant::{Ant, AntKind, Digestion};
pub use bee::{Bee, BeeStatus};
pub use boost::Boost;
pub use cli::Args;
pub use colony::{Colony, Hive, Place, PlaceId};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use insect::Insect;
pub use simulation::{Event, Game, Outcome};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, AntKind, Args, Bee, Boost, Colony, Digestion, Event, Game, GameConfig, GameError,
        Hive, Insect, Outcome, Place, PlaceId, Result,
    };
}
