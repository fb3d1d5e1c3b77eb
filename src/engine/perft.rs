// Ficheiro: src/engine/perft.rs
// Descrição: Perft - contagem de folhas da árvore de lances, para validar o gerador.

use rayon::prelude::*;

use crate::core::*;
use crate::engine::rules::apply_move;
use crate::moves::legal_moves;

/// Conta as posições a exatamente `depth` meios-lances de distância, com as
/// cores a alternar a partir de `color`. Posições sem lances antes dessa
/// profundidade não contam.
pub fn perft(board: &BoardState, color: Color, depth: u8) -> DamasResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_moves(color, board);
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in &moves {
        let next = apply_move(board, mv)?;
        nodes += perft(&next, !color, depth - 1)?;
    }
    Ok(nodes)
}

/// Perft com os lances da raiz repartidos pelo pool global do rayon.
pub fn perft_parallel(board: &BoardState, color: Color, depth: u8) -> DamasResult<u64> {
    if depth <= 2 {
        return perft(board, color, depth);
    }

    legal_moves(color, board)
        .par_iter()
        .map(|mv| {
            let next = apply_move(board, mv)?;
            perft(&next, !color, depth - 1)
        })
        .sum()
}

/// Contagem por lance da raiz, útil para encontrar divergências.
pub fn perft_divide(board: &BoardState, color: Color, depth: u8) -> DamasResult<Vec<(Move, u64)>> {
    let mut result = Vec::new();
    for mv in legal_moves(color, board) {
        let next = apply_move(board, &mv)?;
        let nodes = perft(&next, !color, depth.saturating_sub(1))?;
        result.push((mv, nodes));
    }
    Ok(result)
}
