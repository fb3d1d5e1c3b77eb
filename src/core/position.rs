// Ficheiro: src/core/position.rs
// Descrição: Coordenadas validadas do tabuleiro e aritmética diagonal.

use std::fmt;

use super::error::{DamasError, DamasResult};

/// Número de linhas/colunas do tabuleiro.
pub const BOARD_SIZE: i32 = 8;

/// As quatro direções diagonais, na ordem em que a geração as visita.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Casa do tabuleiro. Só existe dentro do tabuleiro: a construção falha
/// com `InvalidCoordinate` fora de [0, 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Cria uma posição validada.
    pub fn new(row: i32, col: i32) -> DamasResult<Self> {
        if !(0..BOARD_SIZE).contains(&row) || !(0..BOARD_SIZE).contains(&col) {
            return Err(DamasError::InvalidCoordinate { row, col });
        }
        Ok(Position { row: row as u8, col: col as u8 })
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.row as i32
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.col as i32
    }

    /// Casa escura = soma de linha e coluna é ímpar. Só estas são jogáveis.
    #[inline]
    pub fn is_dark_square(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Desloca a posição; `None` se sair do tabuleiro.
    #[inline]
    pub fn offset(&self, row_delta: i8, col_delta: i8) -> Option<Position> {
        Position::new(
            self.row() + row_delta as i32,
            self.col() + col_delta as i32,
        )
        .ok()
    }

    /// Distância Manhattan.
    pub fn distance_to(&self, other: &Position) -> i32 {
        (self.row() - other.row()).abs() + (self.col() - other.col()).abs()
    }

    /// Distância diagonal (máximo das diferenças absolutas).
    pub fn diagonal_distance_to(&self, other: &Position) -> i32 {
        (self.row() - other.row())
            .abs()
            .max((self.col() - other.col()).abs())
    }

    pub fn is_adjacent_diagonal(&self, other: &Position) -> bool {
        (self.row() - other.row()).abs() == 1 && (self.col() - other.col()).abs() == 1
    }

    /// Todas as casas escuras, linha a linha.
    pub fn dark_squares() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position { row, col }))
            .filter(|p| p.is_dark_square())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_off_board_coordinates() {
        for (row, col) in [(-1, 0), (0, -1), (8, 0), (0, 8), (100, 3)] {
            match Position::new(row, col) {
                Err(DamasError::InvalidCoordinate { row: r, col: c }) => {
                    assert_eq!((r, c), (row, col));
                }
                other => panic!("esperava InvalidCoordinate, obteve {:?}", other),
            }
        }
    }

    #[test]
    fn test_dark_square_predicate() {
        assert!(Position::new(0, 1).unwrap().is_dark_square());
        assert!(Position::new(3, 4).unwrap().is_dark_square());
        assert!(!Position::new(0, 0).unwrap().is_dark_square());
        assert!(!Position::new(2, 2).unwrap().is_dark_square());
        assert_eq!(Position::dark_squares().count(), 32);
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Position::new(0, 7).unwrap();
        assert_eq!(corner.offset(-1, 1), None);
        assert_eq!(corner.offset(1, -1), Some(Position::new(1, 6).unwrap()));
    }

    #[test]
    fn test_distances() {
        let a = Position::new(2, 3).unwrap();
        let b = Position::new(5, 4).unwrap();
        assert_eq!(a.distance_to(&b), 4);
        assert_eq!(a.diagonal_distance_to(&b), 3);
        assert!(a.is_adjacent_diagonal(&Position::new(3, 2).unwrap()));
        assert!(!a.is_adjacent_diagonal(&b));
    }

    #[test]
    fn test_usable_as_map_key() {
        use std::collections::HashSet;
        let set: HashSet<Position> = [Position::new(1, 2).unwrap(), Position::new(1, 2).unwrap()]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }
}
