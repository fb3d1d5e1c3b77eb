use crate::core::*;
use crate::engine::rules::apply_move;
use crate::moves::legal_moves;
use crate::search::evaluation::{clamp_heuristic, Evaluator, WIN_SCORE};
use log::debug;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Valor usado como infinito nas janelas alpha-beta.
pub const INFINITY: i32 = i32::MAX;

/// Profundidade por omissão.
pub const DEFAULT_MAX_DEPTH: u8 = 4;

/// Configuração da busca
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Profundidade máxima em meios-lances
    pub max_depth: u8,
    /// Threads para avaliar os lances da raiz (1 = sequencial)
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            threads: 1,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(max_depth: u8) -> Self {
        SearchConfig { max_depth, ..SearchConfig::default() }
    }

    /// Usa todos os núcleos disponíveis na raiz.
    pub fn all_cores(max_depth: u8) -> Self {
        SearchConfig {
            max_depth,
            threads: num_cpus::get().max(1),
        }
    }
}

/// Estatísticas de uma busca
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub depth: u8,
    pub time_elapsed: Duration,
    /// O lance foi sorteado e a busca não chegou a correr
    pub random_move: bool,
}

/// Resultado da busca Minimax
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub stats: SearchStats,
}

/// Pontuação de uma posição terminal do ponto de vista de `root_color`.
///
/// Vitórias mais rápidas (mais profundidade restante) valem mais; derrotas
/// mais lentas valem menos negativo. Empate vale 0.
pub fn terminal_score(status: GameStatus, root_color: Color, depth_remaining: u8) -> i32 {
    match status.winner() {
        Some(winner) if winner == root_color => WIN_SCORE + depth_remaining as i32,
        Some(_) => -WIN_SCORE - depth_remaining as i32,
        None => 0,
    }
}

/// Estado de uma busca em curso: cor da raiz e nós contados até agora.
/// Cada chamada tem o seu, por isso buscas simultâneas não se misturam.
struct NodeContext {
    root_color: Color,
    nodes: u64,
}

/// Minimax com poda Alpha-Beta, limitado por profundidade.
///
/// Os lances são visitados pela ordem de geração, sem ordenação heurística.
pub struct MinimaxSearcher {
    evaluator: Box<dyn Evaluator>,
    config: SearchConfig,
    pool: Option<rayon::ThreadPool>,
    nodes_searched: AtomicU64,
}

impl MinimaxSearcher {
    /// Busca sequencial com a profundidade indicada.
    pub fn new(evaluator: Box<dyn Evaluator>, max_depth: u8) -> Self {
        MinimaxSearcher {
            evaluator,
            config: SearchConfig::with_depth(max_depth),
            pool: None,
            nodes_searched: AtomicU64::new(0),
        }
    }

    /// Com `threads > 1` cria um pool rayon dedicado para a raiz.
    pub fn with_config(evaluator: Box<dyn Evaluator>, config: SearchConfig) -> DamasResult<Self> {
        let pool = if config.threads > 1 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(config.threads)
                    .build()?,
            )
        } else {
            None
        };

        Ok(MinimaxSearcher {
            evaluator,
            config,
            pool,
            nodes_searched: AtomicU64::new(0),
        })
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn max_depth(&self) -> u8 {
        self.config.max_depth
    }

    pub fn evaluator(&self) -> &dyn Evaluator {
        self.evaluator.as_ref()
    }

    /// Melhor lance para `color`, ou `None` se não houver lances.
    pub fn find_best_move(&self, board: &BoardState, color: Color) -> DamasResult<Option<Move>> {
        Ok(self.search(board, color)?.best_move)
    }

    /// Busca completa a partir da raiz.
    ///
    /// Cada lance da raiz é aplicado e pontuado com uma chamada a `minimax`
    /// de profundidade `max_depth - 1`, a minimizar (responde o adversário),
    /// com janela completa. Fica o primeiro lance com a pontuação
    /// estritamente maior, pela ordem de geração.
    pub fn search(&self, board: &BoardState, color: Color) -> DamasResult<SearchResult> {
        let start_time = Instant::now();

        let moves = legal_moves(color, board);
        let child_depth = self.config.max_depth.saturating_sub(1);

        // As janelas da raiz são independentes, por isso a versão paralela
        // devolve exatamente as mesmas pontuações, pela mesma ordem.
        let scored: Vec<(i32, u64)> = match &self.pool {
            Some(pool) if moves.len() > 1 => pool.install(|| {
                moves
                    .par_iter()
                    .map(|mv| self.score_root_move(board, mv, child_depth, color))
                    .collect::<DamasResult<Vec<_>>>()
            })?,
            _ => moves
                .iter()
                .map(|mv| self.score_root_move(board, mv, child_depth, color))
                .collect::<DamasResult<Vec<_>>>()?,
        };

        let mut best_move = None;
        let mut best_score = -INFINITY;
        let mut nodes = 0;
        for (mv, (score, subtree)) in moves.into_iter().zip(scored) {
            nodes += subtree;
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        if best_move.is_none() {
            best_score = terminal_score(GameStatus::loss_for(color), color, self.config.max_depth);
        }
        self.nodes_searched.store(nodes, Ordering::Relaxed);

        let stats = SearchStats {
            nodes_visited: nodes,
            depth: self.config.max_depth,
            time_elapsed: start_time.elapsed(),
            random_move: false,
        };

        debug!(
            "busca {} depth {} score {} nodes {} time {}ms best {}",
            color,
            stats.depth,
            best_score,
            stats.nodes_visited,
            stats.time_elapsed.as_millis(),
            best_move.as_ref().map_or_else(|| "-".to_string(), |mv| mv.to_string())
        );

        Ok(SearchResult {
            best_move,
            score: best_score,
            stats,
        })
    }

    /// Pontuação de um lance da raiz e os nós da sua subárvore.
    fn score_root_move(&self, board: &BoardState, mv: &Move, depth: u8, color: Color) -> DamasResult<(i32, u64)> {
        let child = apply_move(board, mv)?;
        let mut node = NodeContext { root_color: color, nodes: 0 };
        let score = self.alpha_beta(&child, depth, -INFINITY, INFINITY, false, &mut node)?;
        Ok((score, node.nodes))
    }

    /// Recursão Minimax com poda Alpha-Beta.
    ///
    /// `maximizing` indica se joga `root_color`; a avaliação é sempre do
    /// ponto de vista de `root_color`. Cada chamada conta como um nó.
    pub fn minimax(
        &self,
        board: &BoardState,
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
        root_color: Color,
    ) -> DamasResult<i32> {
        let mut node = NodeContext { root_color, nodes: 0 };
        let score = self.alpha_beta(board, depth, alpha, beta, maximizing, &mut node)?;
        self.nodes_searched.store(node.nodes, Ordering::Relaxed);
        Ok(score)
    }

    fn alpha_beta(
        &self,
        board: &BoardState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        node: &mut NodeContext,
    ) -> DamasResult<i32> {
        node.nodes += 1;

        let root_color = node.root_color;
        let to_move = if maximizing { root_color } else { !root_color };

        // 1. Profundidade zero - avaliar posição
        if depth == 0 {
            return Ok(clamp_heuristic(self.evaluator.evaluate(board, root_color)));
        }

        // 2. Sem lances (o que inclui ficar sem peças): quem joga perdeu
        let moves = legal_moves(to_move, board);
        if moves.is_empty() {
            return Ok(terminal_score(GameStatus::loss_for(to_move), root_color, depth));
        }

        // 3. Recursão
        if maximizing {
            let mut best = -INFINITY;
            for mv in &moves {
                let child = apply_move(board, mv)?;
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, false, node)?;
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break; // poda beta
                }
            }
            Ok(best)
        } else {
            let mut best = INFINITY;
            for mv in &moves {
                let child = apply_move(board, mv)?;
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, true, node)?;
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break; // poda alpha
                }
            }
            Ok(best)
        }
    }

    /// Nós visitados pela última busca terminada neste buscador.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched.load(Ordering::Relaxed)
    }
}
