// Ficheiro: src/moves/mod.rs
// Descrição: Declara os submódulos de geração de lances e a regra da captura obrigatória.

pub mod capture;
pub mod simple;

pub use capture::{generate_capture_moves, get_all_capture_moves};
pub use simple::{generate_simple_moves, get_all_simple_moves};

use crate::core::*;

/// Lances legais de uma cor.
///
/// Captura obrigatória ao nível da cor: se alguma peça pode capturar, só as
/// capturas (de todas as peças) são devolvidas; os lances simples só entram
/// quando não há nenhuma captura.
pub fn legal_moves(color: Color, board: &BoardState) -> Vec<Move> {
    let captures = get_all_capture_moves(color, board);
    if !captures.is_empty() {
        return captures;
    }
    get_all_simple_moves(color, board)
}

/// Lances de uma única peça, com a prioridade da captura aplicada só a ela.
/// Usado para destacar destinos da peça selecionada.
pub fn moves_for_piece(piece: &Piece, board: &BoardState) -> Vec<Move> {
    let captures = generate_capture_moves(piece, board);
    if !captures.is_empty() {
        return captures;
    }
    generate_simple_moves(piece, board)
}
