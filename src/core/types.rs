// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::position::Position;

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        !self
    }

    /// Vermelho anda para cima (linha decresce), preto para baixo.
    #[inline]
    pub fn forward_direction(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Linha onde uma peça comum desta cor é promovida a dama.
    #[inline]
    pub fn promotion_row(self) -> i32 {
        match self {
            Color::Red => 0,
            Color::Black => 7,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "RED"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

// Enum para representar o tipo de uma peça de damas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

// Peça no tabuleiro: cor, tipo e a casa onde está. Imutável; transições
// (mover, promover) produzem uma peça nova.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub position: Position,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, position: Position) -> Self {
        Piece { color, kind, position }
    }

    pub fn man(color: Color, position: Position) -> Self {
        Piece::new(color, PieceKind::Man, position)
    }

    pub fn king(color: Color, position: Position) -> Self {
        Piece::new(color, PieceKind::King, position)
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    pub fn promote_to_king(&self) -> Piece {
        Piece { kind: PieceKind::King, ..*self }
    }

    /// Peça comum que chegou à linha de promoção.
    pub fn should_be_promoted(&self) -> bool {
        !self.is_king() && self.position.row() == self.color.promotion_row()
    }

    pub fn move_to(&self, position: Position) -> Piece {
        Piece { position, ..*self }
    }

    #[inline]
    pub fn forward_direction(&self) -> i8 {
        self.color.forward_direction()
    }

    /// Caractere usado na representação textual do tabuleiro.
    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::Red, PieceKind::Man) => 'r',
            (Color::Red, PieceKind::King) => 'R',
            (Color::Black, PieceKind::Man) => 'b',
            (Color::Black, PieceKind::King) => 'B',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = if self.color == Color::Red { "R" } else { "B" };
        let kind = if self.is_king() { "K" } else { "N" };
        write!(f, "{}{}@{}", color, kind, self.position)
    }
}

// Lance: casa de origem, casa de destino e as casas capturadas pelo caminho,
// na ordem dos saltos.
#[derive(Debug, Clone)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    pub captured: Vec<Position>,
}

impl Move {
    pub fn simple(start: Position, end: Position) -> Self {
        Move { start, end, captured: Vec::new() }
    }

    pub fn capture(start: Position, end: Position, captured: Vec<Position>) -> Self {
        Move { start, end, captured }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    #[inline]
    pub fn is_multi_capture(&self) -> bool {
        self.captured.len() > 1
    }

    pub fn is_diagonal(&self) -> bool {
        let row_diff = (self.end.row() - self.start.row()).abs();
        let col_diff = (self.end.col() - self.start.col()).abs();
        row_diff == col_diff && row_diff > 0
    }

    /// Direção (-1, 0 ou 1 em cada eixo) de `start` para `end`.
    pub fn direction(&self) -> (i32, i32) {
        (
            (self.end.row() - self.start.row()).signum(),
            (self.end.col() - self.start.col()).signum(),
        )
    }

    // Casas capturadas como conjunto ordenado; base da igualdade e do hash.
    fn captured_set(&self) -> Vec<Position> {
        let mut set = self.captured.clone();
        set.sort_unstable();
        set
    }
}

// A igualdade ignora a ordem dos saltos: dois lances com a mesma origem,
// o mesmo destino e o mesmo conjunto de capturas são o mesmo lance.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.captured.len() == other.captured.len()
            && self.captured_set() == other.captured_set()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.captured_set().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)?;
        if self.is_capture() {
            write!(f, " (captura {})", self.captured.len())?;
        }
        Ok(())
    }
}

/// Estado do jogo do ponto de vista de quem tem a vez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    RedWins,
    BlackWins,
    Draw,
}

impl GameStatus {
    /// Estado em que `color` perdeu.
    pub fn loss_for(color: Color) -> GameStatus {
        match color {
            Color::Red => GameStatus::BlackWins,
            Color::Black => GameStatus::RedWins,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::RedWins => Some(Color::Red),
            GameStatus::BlackWins => Some(Color::Black),
            GameStatus::Playing | GameStatus::Draw => None,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameStatus::Playing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Playing => "PLAYING",
            GameStatus::RedWins => "RED_WINS",
            GameStatus::BlackWins => "BLACK_WINS",
            GameStatus::Draw => "DRAW",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_promotion_rows() {
        assert!(Piece::man(Color::Red, pos(0, 1)).should_be_promoted());
        assert!(Piece::man(Color::Black, pos(7, 2)).should_be_promoted());
        assert!(!Piece::man(Color::Red, pos(7, 2)).should_be_promoted());
        assert!(!Piece::king(Color::Red, pos(0, 1)).should_be_promoted());
    }

    #[test]
    fn test_transitions_produce_new_pieces() {
        let man = Piece::man(Color::Black, pos(6, 1));
        let moved = man.move_to(pos(7, 0));
        let king = moved.promote_to_king();
        assert_eq!(man.position, pos(6, 1));
        assert_eq!(moved.kind, PieceKind::Man);
        assert!(king.is_king());
        assert_eq!(king.position, pos(7, 0));
    }

    #[test]
    fn test_move_equality_ignores_capture_order() {
        let a = Move::capture(pos(5, 0), pos(1, 0), vec![pos(4, 1), pos(2, 1)]);
        let b = Move::capture(pos(5, 0), pos(1, 0), vec![pos(2, 1), pos(4, 1)]);
        let c = Move::capture(pos(5, 0), pos(1, 0), vec![pos(4, 1)]);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Move> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_move_predicates() {
        let step = Move::simple(pos(5, 2), pos(4, 3));
        assert!(!step.is_capture());
        assert!(step.is_diagonal());
        assert_eq!(step.direction(), (-1, 1));

        let double = Move::capture(pos(5, 2), pos(1, 2), vec![pos(4, 3), pos(2, 3)]);
        assert!(double.is_capture());
        assert!(double.is_multi_capture());
        assert!(!double.is_diagonal());
        assert_eq!(double.to_string(), "(5, 2) -> (1, 2) (captura 2)");
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::loss_for(Color::Black), GameStatus::RedWins);
        assert_eq!(GameStatus::RedWins.winner(), Some(Color::Red));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(!GameStatus::Playing.is_over());
    }
}
