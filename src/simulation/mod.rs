pub mod event;
pub mod game;

pub use event::Event;
pub use game::{Game, Outcome};
