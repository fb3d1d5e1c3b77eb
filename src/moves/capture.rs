// Ficheiro: src/moves/capture.rs
// Descrição: Geração de capturas, incluindo capturas múltiplas em cadeia.

use crate::core::*;

/// Sequência de saltos ainda em aberto: onde a peça está e o que já capturou.
struct Chain {
    at: Position,
    captured: Vec<Position>,
}

/// Saltos possíveis a partir de `at`, como pares (casa saltada, casa de chegada).
///
/// O tabuleiro não é alterado durante a sequência: peças já capturadas
/// continuam a ocupar a casa (não se aterra nelas) e saem do conjunto de
/// candidatas apenas pela verificação de pertença em `captured`.
fn jumps_from(piece: &Piece, at: Position, captured: &[Position], board: &BoardState) -> Vec<(Position, Position)> {
    let mut jumps = Vec::with_capacity(4);

    // Peças comuns capturam nas quatro diagonais, tal como as damas.
    for (row_delta, col_delta) in DIAGONALS {
        let Some(over) = at.offset(row_delta, col_delta) else {
            continue;
        };
        match board.piece_at(over) {
            Some(victim) if victim.color != piece.color => {}
            _ => continue,
        }
        if captured.contains(&over) {
            continue;
        }
        let Some(landing) = over.offset(row_delta, col_delta) else {
            continue;
        };
        if board.is_empty(landing) {
            jumps.push((over, landing));
        }
    }

    jumps
}

/// Gera os lances de captura de uma peça.
///
/// Cada ramo é explorado até ao fim: só as sequências máximas são emitidas,
/// as casas intermédias nunca aparecem como lances completos. Ramos que
/// divergem produzem cada um o seu lance.
pub fn generate_capture_moves(piece: &Piece, board: &BoardState) -> Vec<Move> {
    let start = piece.position;
    let mut moves: Vec<Move> = Vec::new();
    let mut stack = vec![Chain { at: start, captured: Vec::new() }];

    while let Some(chain) = stack.pop() {
        let jumps = jumps_from(piece, chain.at, &chain.captured, board);

        if jumps.is_empty() {
            if chain.captured.is_empty() {
                continue;
            }
            let mv = Move::capture(start, chain.at, chain.captured);
            if !moves.contains(&mv) {
                moves.push(mv);
            }
            continue;
        }

        // Empilha ao contrário para visitar as direções pela ordem de DIAGONALS.
        for (over, landing) in jumps.into_iter().rev() {
            let mut captured = chain.captured.clone();
            captured.push(over);
            stack.push(Chain { at: landing, captured });
        }
    }

    moves
}

/// Todas as capturas de uma cor, juntando as de todas as peças.
pub fn get_all_capture_moves(color: Color, board: &BoardState) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|piece| generate_capture_moves(piece, board))
        .collect()
}
