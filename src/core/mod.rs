pub mod board;
pub mod error;
pub mod position;
pub mod types;

pub use board::*;
pub use error::*;
pub use position::*;
pub use types::*;
