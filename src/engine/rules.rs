// Ficheiro: src/engine/rules.rs
// Descrição: Regras do jogo: aplicar lances, validar lances e estado final.

use crate::core::*;
use crate::moves::legal_moves;

/// Aplica um lance e devolve um tabuleiro novo; o original não é alterado.
///
/// Remove a peça da origem e todas as capturadas, recoloca a peça no destino
/// e promove-a a dama se for uma peça comum que chegou à linha de promoção.
pub fn apply_move(board: &BoardState, mv: &Move) -> DamasResult<BoardState> {
    let piece = *board
        .piece_at(mv.start)
        .ok_or(DamasError::IllegalState { position: mv.start })?;

    let mut next = board.clone();
    next.remove_piece(mv.start);
    for captured in &mv.captured {
        next.remove_piece(*captured);
    }

    let mut moved = piece.move_to(mv.end);
    if moved.should_be_promoted() {
        moved = moved.promote_to_king();
    }
    next.set_piece(moved);

    Ok(next)
}

/// Verdadeiro se há uma peça de `color` na origem e o lance pertence aos
/// lances legais da cor (igualdade por conjunto de capturas).
pub fn is_valid_move(board: &BoardState, mv: &Move, color: Color) -> bool {
    match board.piece_at(mv.start) {
        Some(piece) if piece.color == color => legal_moves(color, board).contains(mv),
        _ => false,
    }
}

/// Estado do jogo com `current_player` a jogar.
///
/// Quem tem a vez perde se não tiver peças ou não tiver lances (bloqueio conta
/// como derrota). `Draw` nunca é produzido aqui: não há regra de empate.
pub fn get_game_status(board: &BoardState, current_player: Color) -> GameStatus {
    if !board.has_pieces(current_player) {
        return GameStatus::loss_for(current_player);
    }
    if legal_moves(current_player, board).is_empty() {
        return GameStatus::loss_for(current_player);
    }
    GameStatus::Playing
}

pub fn is_game_over(board: &BoardState, current_player: Color) -> bool {
    get_game_status(board, current_player).is_over()
}

pub fn winner(board: &BoardState, current_player: Color) -> Option<Color> {
    get_game_status(board, current_player).winner()
}

pub fn can_player_move(board: &BoardState, color: Color) -> bool {
    !legal_moves(color, board).is_empty()
}
