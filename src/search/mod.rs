pub mod alpha_beta;
pub mod evaluation;

pub use alpha_beta::*;
pub use evaluation::*;
