// Ficheiro: src/ai/player.rs
// Descrição: Jogador controlado por IA (Minimax + perfil de dificuldade).

use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::difficulty::Difficulty;
use crate::core::*;
use crate::moves::legal_moves;
use crate::search::{Evaluator, MinimaxSearcher, SearchConfig, SearchStats};

pub struct AiPlayer {
    color: Color,
    difficulty: Difficulty,
    name: String,
    searcher: MinimaxSearcher,
    rng: StdRng,
    last_stats: Option<SearchStats>,
}

impl AiPlayer {
    pub fn new(color: Color, evaluator: Box<dyn Evaluator>, difficulty: Difficulty) -> Self {
        AiPlayer {
            color,
            difficulty,
            name: "IA".to_string(),
            searcher: MinimaxSearcher::new(evaluator, difficulty.max_depth()),
            rng: StdRng::from_entropy(),
            last_stats: None,
        }
    }

    /// Igual a `new`, mas com sorteios reprodutíveis.
    pub fn with_seed(color: Color, evaluator: Box<dyn Evaluator>, difficulty: Difficulty, seed: u64) -> Self {
        AiPlayer {
            rng: StdRng::seed_from_u64(seed),
            ..AiPlayer::new(color, evaluator, difficulty)
        }
    }

    /// Configuração de busca explícita; a profundidade vem sempre da dificuldade.
    pub fn with_config(
        color: Color,
        evaluator: Box<dyn Evaluator>,
        difficulty: Difficulty,
        config: SearchConfig,
        seed: Option<u64>,
    ) -> DamasResult<Self> {
        let config = SearchConfig { max_depth: difficulty.max_depth(), ..config };
        Ok(AiPlayer {
            color,
            difficulty,
            name: "IA".to_string(),
            searcher: MinimaxSearcher::with_config(evaluator, config)?,
            rng: match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
            last_stats: None,
        })
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Escolhe um lance para a posição, ou `None` se não houver lances.
    ///
    /// Com a probabilidade da dificuldade sorteia um lance legal e não busca;
    /// caso contrário usa o Minimax.
    pub fn choose_move(&mut self, board: &BoardState) -> DamasResult<Option<Move>> {
        let moves = legal_moves(self.color, board);
        if moves.is_empty() {
            return Ok(None);
        }

        let probability = self.difficulty.random_move_probability();
        if self.rng.gen::<f64>() < probability {
            let choice = moves.choose(&mut self.rng).cloned();
            // nenhuma busca correu: profundidade e nós ficam a zero
            self.last_stats = Some(SearchStats {
                random_move: true,
                ..SearchStats::default()
            });
            if let Some(mv) = &choice {
                debug!("{} jogou ao acaso: {}", self.name, mv);
            }
            return Ok(choice);
        }

        let result = self.searcher.search(board, self.color)?;
        self.last_stats = Some(result.stats);
        Ok(result.best_move)
    }

    /// Estatísticas da última escolha (nós visitados, profundidade).
    pub fn get_last_statistics(&self) -> Option<SearchStats> {
        self.last_stats
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn depth(&self) -> u8 {
        self.searcher.max_depth()
    }
}

impl fmt::Display for AiPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.name, self.color, self.searcher.evaluator().name())
    }
}
