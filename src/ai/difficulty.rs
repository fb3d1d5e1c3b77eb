// Ficheiro: src/ai/difficulty.rs
// Descrição: Níveis de dificuldade da IA (profundidade e probabilidade de erro).

use std::fmt;
use std::str::FromStr;

use crate::core::DamasError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Profundidade máxima da busca Minimax.
    pub fn max_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    /// Probabilidade (0.0 a 1.0) de jogar um lance aleatório em vez de buscar.
    pub fn random_move_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.1,
            Difficulty::Hard => 0.0,
        }
    }
}

impl FromStr for Difficulty {
    type Err = DamasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" | "facil" | "fácil" => Ok(Difficulty::Easy),
            "medium" | "medio" | "médio" => Ok(Difficulty::Medium),
            "hard" | "dificil" | "difícil" => Ok(Difficulty::Hard),
            _ => Err(DamasError::UnknownOption { kind: "dificuldade", value: s.to_string() }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Médio",
            Difficulty::Hard => "Difícil",
        };
        write!(f, "{}", s)
    }
}
