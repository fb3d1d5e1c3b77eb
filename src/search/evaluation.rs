// Ficheiro: src/search/evaluation.rs
// Descrição: Funções de avaliação de posição, intercambiáveis.

use std::fmt;
use std::str::FromStr;

use crate::core::*;

/// Pontuação base de uma posição terminal. Tem de estar acima de qualquer
/// valor heurístico para que vitórias e derrotas dominem sempre.
pub const WIN_SCORE: i32 = 100_000;

/// Maior valor heurístico admitido; fica sempre abaixo de qualquer vitória.
pub const MAX_HEURISTIC: i32 = WIN_SCORE - 1;

/// Valor de uma peça comum (décimos de ponto).
pub const MAN_VALUE: i32 = 20;
/// Valor de uma dama.
pub const KING_VALUE: i32 = 40;
/// Bónus por peça numa coluna lateral.
pub const SIDE_BONUS: i32 = 3;
/// Bónus por cada captura imediata disponível.
pub const THREAT_BONUS: i32 = 10;
/// Bónus por cada casa de promoção livre à frente de uma peça na penúltima linha.
pub const PROMOTION_BONUS: i32 = 15;

/// Avalia uma posição do ponto de vista de `color`; positivo favorece `color`.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, board: &BoardState, color: Color) -> i32;

    fn name(&self) -> &'static str;
}

impl fmt::Debug for dyn Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Limita um valor heurístico a `[-MAX_HEURISTIC, MAX_HEURISTIC]`.
#[inline]
pub fn clamp_heuristic(score: i32) -> i32 {
    score.clamp(-MAX_HEURISTIC, MAX_HEURISTIC)
}

#[inline]
fn signed(piece: &Piece, color: Color, value: i32) -> i32 {
    if piece.color == color {
        value
    } else {
        -value
    }
}

/// Material: peças comuns e damas, as minhas menos as do adversário.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceCountEvaluator;

impl Evaluator for PieceCountEvaluator {
    fn evaluate(&self, board: &BoardState, color: Color) -> i32 {
        board
            .all_pieces()
            .map(|piece| {
                let value = if piece.is_king() { KING_VALUE } else { MAN_VALUE };
                signed(piece, color, value)
            })
            .sum()
    }

    fn name(&self) -> &'static str {
        "PieceCountEvaluator"
    }
}

/// Peças nas colunas 0 e 7 não podem ser capturadas.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidesEvaluator;

impl Evaluator for SidesEvaluator {
    fn evaluate(&self, board: &BoardState, color: Color) -> i32 {
        board
            .all_pieces()
            .filter(|piece| piece.position.col() == 0 || piece.position.col() == 7)
            .map(|piece| signed(piece, color, SIDE_BONUS))
            .sum()
    }

    fn name(&self) -> &'static str {
        "SidesEvaluator"
    }
}

/// Capturas imediatas: as que eu tenho contam a favor, as do adversário
/// sobre as minhas peças contam contra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatEvaluator;

impl ThreatEvaluator {
    fn jumps(piece: &Piece, board: &BoardState) -> i32 {
        let mut count = 0;
        for (row_delta, col_delta) in DIAGONALS {
            let Some(over) = piece.position.offset(row_delta, col_delta) else {
                continue;
            };
            let Some(landing) = over.offset(row_delta, col_delta) else {
                continue;
            };
            let victim = board.piece_at(over).map(|p| p.color);
            if victim == Some(!piece.color) && board.is_empty(landing) {
                count += 1;
            }
        }
        count
    }
}

impl Evaluator for ThreatEvaluator {
    fn evaluate(&self, board: &BoardState, color: Color) -> i32 {
        board
            .all_pieces()
            .map(|piece| signed(piece, color, Self::jumps(piece, board) * THREAT_BONUS))
            .sum()
    }

    fn name(&self) -> &'static str {
        "ThreatEvaluator"
    }
}

/// Peças comuns a um passo da promoção, por casa de promoção livre.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromotionEvaluator;

impl Evaluator for PromotionEvaluator {
    fn evaluate(&self, board: &BoardState, color: Color) -> i32 {
        let mut score = 0;
        for piece in board.all_pieces().filter(|p| !p.is_king()) {
            let forward = piece.forward_direction();
            if piece.position.row() + forward as i32 != piece.color.promotion_row() {
                continue;
            }
            let open = [-1, 1]
                .into_iter()
                .filter_map(|col_delta| piece.position.offset(forward, col_delta))
                .filter(|square| board.is_empty(*square))
                .count() as i32;
            score += signed(piece, color, open * PROMOTION_BONUS);
        }
        score
    }

    fn name(&self) -> &'static str {
        "PromotionEvaluator"
    }
}

/// Junta todas as heurísticas: material, ameaças, laterais e promoção.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmpEvaluator;

impl Evaluator for AmpEvaluator {
    fn evaluate(&self, board: &BoardState, color: Color) -> i32 {
        PieceCountEvaluator.evaluate(board, color)
            + ThreatEvaluator.evaluate(board, color)
            + SidesEvaluator.evaluate(board, color)
            + PromotionEvaluator.evaluate(board, color)
    }

    fn name(&self) -> &'static str {
        "AMPEvaluator"
    }
}

/// Soma ponderada de outros avaliadores. Pesos grandes saturam em
/// `MAX_HEURISTIC` em vez de transbordar.
#[derive(Default)]
pub struct WeightedEvaluator {
    terms: Vec<(i32, Box<dyn Evaluator>)>,
}

impl WeightedEvaluator {
    pub fn new() -> Self {
        WeightedEvaluator { terms: Vec::new() }
    }

    pub fn with(mut self, weight: i32, evaluator: Box<dyn Evaluator>) -> Self {
        self.terms.push((weight, evaluator));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Evaluator for WeightedEvaluator {
    fn evaluate(&self, board: &BoardState, color: Color) -> i32 {
        let total = self
            .terms
            .iter()
            .fold(0i32, |acc, (weight, evaluator)| {
                acc.saturating_add(weight.saturating_mul(evaluator.evaluate(board, color)))
            });
        clamp_heuristic(total)
    }

    fn name(&self) -> &'static str {
        "WeightedEvaluator"
    }
}

/// Seleção de avaliador por nome (linha de comando, modos de jogo).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluatorKind {
    PieceCount,
    Sides,
    Threats,
    Promotion,
    Amp,
}

impl EvaluatorKind {
    pub fn build(self) -> Box<dyn Evaluator> {
        match self {
            EvaluatorKind::PieceCount => Box::new(PieceCountEvaluator),
            EvaluatorKind::Sides => Box::new(SidesEvaluator),
            EvaluatorKind::Threats => Box::new(ThreatEvaluator),
            EvaluatorKind::Promotion => Box::new(PromotionEvaluator),
            EvaluatorKind::Amp => Box::new(AmpEvaluator),
        }
    }
}

impl FromStr for EvaluatorKind {
    type Err = DamasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "piece-count" | "piececount" | "material" => Ok(EvaluatorKind::PieceCount),
            "sides" => Ok(EvaluatorKind::Sides),
            "threats" => Ok(EvaluatorKind::Threats),
            "promotion" => Ok(EvaluatorKind::Promotion),
            "amp" => Ok(EvaluatorKind::Amp),
            _ => Err(DamasError::UnknownOption { kind: "avaliador", value: s.to_string() }),
        }
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EvaluatorKind::PieceCount => "piece-count",
            EvaluatorKind::Sides => "sides",
            EvaluatorKind::Threats => "threats",
            EvaluatorKind::Promotion => "promotion",
            EvaluatorKind::Amp => "amp",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_piece_count_is_antisymmetric() {
        let board = BoardState::from_pieces([
            Piece::man(Color::Red, pos(5, 0)),
            Piece::king(Color::Red, pos(3, 4)),
            Piece::man(Color::Black, pos(2, 1)),
        ])
        .unwrap();
        assert_eq!(PieceCountEvaluator.evaluate(&board, Color::Red), 40);
        assert_eq!(PieceCountEvaluator.evaluate(&board, Color::Black), -40);
        assert_eq!(PieceCountEvaluator.evaluate(&BoardState::initial(), Color::Red), 0);
    }

    #[test]
    fn test_sides() {
        let board = BoardState::from_pieces([
            Piece::man(Color::Red, pos(5, 0)),
            Piece::man(Color::Red, pos(4, 7)),
            Piece::man(Color::Black, pos(1, 0)),
            Piece::man(Color::Black, pos(2, 3)),
        ])
        .unwrap();
        assert_eq!(SidesEvaluator.evaluate(&board, Color::Red), 3);
    }

    #[test]
    fn test_threats_count_both_sides() {
        // Vermelho em (3, 4) salta (4, 5); o preto em (4, 5) também salta o
        // vermelho de volta para (2, 3).
        let board = BoardState::from_pieces([
            Piece::man(Color::Red, pos(3, 4)),
            Piece::man(Color::Black, pos(4, 5)),
        ])
        .unwrap();
        assert_eq!(ThreatEvaluator.evaluate(&board, Color::Red), 0);

        let board = BoardState::from_pieces([
            Piece::man(Color::Red, pos(3, 4)),
            Piece::man(Color::Black, pos(4, 5)),
            Piece::man(Color::Red, pos(2, 3)),
        ])
        .unwrap();
        assert_eq!(ThreatEvaluator.evaluate(&board, Color::Red), 10);
    }

    #[test]
    fn test_promotion_counts_open_squares() {
        let board = BoardState::from_pieces([
            Piece::man(Color::Red, pos(1, 2)),
            Piece::man(Color::Black, pos(0, 1)),
            Piece::man(Color::Black, pos(6, 7)),
        ])
        .unwrap();
        // vermelho: só (0, 3) livre; preto: (7, 6) livre, (7, 8) fora
        assert_eq!(PromotionEvaluator.evaluate(&board, Color::Red), 15 - 15);
        assert_eq!(PromotionEvaluator.evaluate(&board, Color::Black), 0);

        let kings = BoardState::from_pieces([Piece::king(Color::Red, pos(1, 2))]).unwrap();
        assert_eq!(PromotionEvaluator.evaluate(&kings, Color::Red), 0);
    }

    #[test]
    fn test_amp_is_sum_of_parts() {
        let board = BoardState::initial();
        let parts = PieceCountEvaluator.evaluate(&board, Color::Red)
            + ThreatEvaluator.evaluate(&board, Color::Red)
            + SidesEvaluator.evaluate(&board, Color::Red)
            + PromotionEvaluator.evaluate(&board, Color::Red);
        assert_eq!(AmpEvaluator.evaluate(&board, Color::Red), parts);
    }

    #[test]
    fn test_weighted_combinator() {
        let board = BoardState::from_pieces([Piece::man(Color::Red, pos(5, 0))]).unwrap();
        let weighted = WeightedEvaluator::new()
            .with(2, Box::new(PieceCountEvaluator))
            .with(-1, Box::new(SidesEvaluator));
        assert_eq!(weighted.len(), 2);
        assert_eq!(weighted.evaluate(&board, Color::Red), 2 * 20 - 3);
    }

    #[test]
    fn test_weighted_saturates_below_win_score() {
        let board = BoardState::from_pieces([Piece::king(Color::Red, pos(4, 3))]).unwrap();

        let exact = WeightedEvaluator::new().with(2500, Box::new(PieceCountEvaluator));
        assert_eq!(exact.evaluate(&board, Color::Red), MAX_HEURISTIC);
        assert_eq!(exact.evaluate(&board, Color::Black), -MAX_HEURISTIC);

        let huge = WeightedEvaluator::new()
            .with(i32::MAX, Box::new(PieceCountEvaluator))
            .with(i32::MAX, Box::new(PieceCountEvaluator));
        assert_eq!(huge.evaluate(&board, Color::Red), MAX_HEURISTIC);
        assert_eq!(huge.evaluate(&board, Color::Black), -MAX_HEURISTIC);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("amp".parse::<EvaluatorKind>().unwrap(), EvaluatorKind::Amp);
        assert_eq!("Piece-Count".parse::<EvaluatorKind>().unwrap(), EvaluatorKind::PieceCount);
        assert!("xadrez".parse::<EvaluatorKind>().is_err());
        assert_eq!(EvaluatorKind::Threats.build().name(), "ThreatEvaluator");
    }

    #[test]
    fn test_heuristics_stay_below_win_score() {
        let board = BoardState::initial();
        for kind in [EvaluatorKind::PieceCount, EvaluatorKind::Amp] {
            assert!(kind.build().evaluate(&board, Color::Red).abs() < WIN_SCORE);
        }
    }
}
