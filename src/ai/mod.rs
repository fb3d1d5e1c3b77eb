pub mod difficulty;
pub mod player;

pub use difficulty::*;
pub use player::*;
