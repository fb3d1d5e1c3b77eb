// Motor de Damas - Regras, geração de lances e IA Minimax com poda Alpha-Beta

pub mod ai;
pub mod core;
pub mod engine;
pub mod moves;
pub mod search;
pub mod session;

pub use core::*;
