// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct BoardState e os seus métodos principais.

use std::collections::BTreeMap;
use std::fmt;

use super::error::{DamasError, DamasResult};
use super::position::{Position, BOARD_SIZE};
use super::types::*;

/// Fotografia de uma posição: mapa esparso casa -> peça.
///
/// A chave é sempre igual a `piece.position`. A iteração segue a ordem das
/// casas (linha, coluna), o que torna a geração de lances determinística.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pieces: BTreeMap<Position, Piece>,
}

impl BoardState {
    /// Tabuleiro vazio.
    pub fn new() -> Self {
        BoardState { pieces: BTreeMap::new() }
    }

    /// Posição inicial: 12 peças pretas nas casas escuras das linhas 0-2 e
    /// 12 vermelhas nas linhas 5-7.
    pub fn initial() -> Self {
        let mut board = BoardState::new();
        for position in Position::dark_squares() {
            let color = match position.row() {
                0..=2 => Color::Black,
                5..=7 => Color::Red,
                _ => continue,
            };
            board.set_piece(Piece::man(color, position));
        }
        board
    }

    /// Monta um tabuleiro validando casas escuras e casas repetidas.
    pub fn from_pieces<I>(pieces: I) -> DamasResult<Self>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut board = BoardState::new();
        for piece in pieces {
            board.try_place(piece)?;
        }
        Ok(board)
    }

    /// Coloca uma peça só se a casa for escura e estiver livre.
    pub fn try_place(&mut self, piece: Piece) -> DamasResult<()> {
        let position = piece.position;
        if !position.is_dark_square() {
            return Err(DamasError::LightSquare { position });
        }
        if self.pieces.contains_key(&position) {
            return Err(DamasError::SquareOccupied { position });
        }
        self.pieces.insert(position, piece);
        Ok(())
    }

    /// Coloca (ou substitui) a peça na sua própria casa.
    pub fn set_piece(&mut self, piece: Piece) -> Option<Piece> {
        self.pieces.insert(piece.position, piece)
    }

    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        self.pieces.remove(&position)
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.pieces.get(&position)
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        !self.pieces.contains_key(&position)
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.values().filter(move |p| p.color == color)
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.values()
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    pub fn count_kings(&self, color: Color) -> usize {
        self.pieces_of(color).filter(|p| p.is_king()).count()
    }

    pub fn has_pieces(&self, color: Color) -> bool {
        self.pieces_of(color).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_board_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let line: Vec<String> = (0..BOARD_SIZE)
                .map(|col| {
                    let Ok(position) = Position::new(row, col) else {
                        return " ".to_string();
                    };
                    match self.piece_at(position) {
                        Some(piece) => piece.symbol().to_string(),
                        None if position.is_dark_square() => ".".to_string(),
                        None => " ".to_string(),
                    }
                })
                .collect();
            writeln!(f, "{} {}", row, line.join(" "))?;
        }
        write!(f, "  0 1 2 3 4 5 6 7")
    }
}
