pub mod perft;
pub mod rules;

pub use perft::*;
pub use rules::*;
