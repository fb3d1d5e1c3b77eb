// Ficheiro: src/moves/simple.rs
// Descrição: Lógica para gerar os lances simples (sem captura).

use crate::core::*;

/// Direções de passo de uma peça: dama nas quatro diagonais, peça comum só
/// nas duas diagonais para a frente.
fn step_directions(piece: &Piece) -> Vec<(i8, i8)> {
    if piece.is_king() {
        DIAGONALS.to_vec()
    } else {
        let forward = piece.forward_direction();
        vec![(forward, -1), (forward, 1)]
    }
}

/// Gera os lances simples de uma peça: um passo diagonal para uma casa vazia.
pub fn generate_simple_moves(piece: &Piece, board: &BoardState) -> Vec<Move> {
    let mut moves = Vec::with_capacity(4);

    for (row_delta, col_delta) in step_directions(piece) {
        if let Some(target) = piece.position.offset(row_delta, col_delta) {
            if target.is_dark_square() && board.is_empty(target) {
                moves.push(Move::simple(piece.position, target));
            }
        }
    }

    moves
}

/// Todos os lances simples de uma cor.
pub fn get_all_simple_moves(color: Color, board: &BoardState) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|piece| generate_simple_moves(piece, board))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_man_steps_forward_only() {
        let red = Piece::man(Color::Red, pos(4, 3));
        let black = Piece::man(Color::Black, pos(3, 2));
        let board = BoardState::from_pieces([red, black]).unwrap();

        let red_moves = generate_simple_moves(&red, &board);
        let ends: Vec<Position> = red_moves.iter().map(|m| m.end).collect();
        assert_eq!(ends, vec![pos(3, 4)]); // (3, 2) está ocupada

        let black_moves = generate_simple_moves(&black, &board);
        let ends: Vec<Position> = black_moves.iter().map(|m| m.end).collect();
        assert_eq!(ends, vec![pos(4, 1)]); // (4, 3) está ocupada
    }

    #[test]
    fn test_king_steps_in_all_directions() {
        let king = Piece::king(Color::Red, pos(3, 4));
        let board = BoardState::from_pieces([king]).unwrap();
        let moves = generate_simple_moves(&king, &board);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_edge_piece_has_single_step() {
        let man = Piece::man(Color::Red, pos(5, 0));
        let board = BoardState::from_pieces([man]).unwrap();
        assert_eq!(generate_simple_moves(&man, &board), vec![Move::simple(pos(5, 0), pos(4, 1))]);
    }

    #[test]
    fn test_initial_simple_moves() {
        let board = BoardState::initial();
        assert_eq!(get_all_simple_moves(Color::Red, &board).len(), 7);
        assert_eq!(get_all_simple_moves(Color::Black, &board).len(), 7);
    }
}
