// Ficheiro: src/session/mod.rs
// Descrição: Sessão de jogo - estado autoritativo, turnos, histórico e jogadores de IA.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};

use crate::ai::{AiPlayer, Difficulty};
use crate::core::*;
use crate::engine::rules;
use crate::moves::moves_for_piece;
use crate::search::EvaluatorKind;

/// Modos de jogo disponíveis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    HumanVsHuman,
    /// Humano joga com as vermelhas.
    #[default]
    HumanVsAi,
    AiVsAi,
}

impl GameMode {
    pub fn has_ai(self) -> bool {
        self != GameMode::HumanVsHuman
    }

    pub fn is_human_turn(self, color: Color) -> bool {
        match self {
            GameMode::HumanVsHuman => true,
            GameMode::HumanVsAi => color == Color::Red,
            GameMode::AiVsAi => false,
        }
    }
}

impl FromStr for GameMode {
    type Err = DamasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hvh" | "human-vs-human" => Ok(GameMode::HumanVsHuman),
            "hva" | "human-vs-ai" => Ok(GameMode::HumanVsAi),
            "ava" | "ai-vs-ai" => Ok(GameMode::AiVsAi),
            _ => Err(DamasError::UnknownOption { kind: "modo", value: s.to_string() }),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameMode::HumanVsHuman => "Humano vs Humano",
            GameMode::HumanVsAi => "Humano vs IA",
            GameMode::AiVsAi => "IA vs IA",
        };
        write!(f, "{}", s)
    }
}

/// Orquestra uma partida: o tabuleiro atual, quem joga, o histórico e as IAs.
/// Toda a validação passa pelas regras; entradas inválidas são ignoradas.
pub struct GameSession {
    board: BoardState,
    current_player: Color,
    history: Vec<Move>,
    status: GameStatus,
    mode: GameMode,
    difficulty: Difficulty,
    red_player: Option<AiPlayer>,
    black_player: Option<AiPlayer>,
    selected: Option<Position>,
    selected_moves: Vec<Move>,
}

impl GameSession {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        let mut session = GameSession {
            board: BoardState::initial(),
            current_player: Color::Red,
            history: Vec::new(),
            status: GameStatus::Playing,
            mode,
            difficulty,
            red_player: None,
            black_player: None,
            selected: None,
            selected_moves: Vec::new(),
        };
        session.initialize_players();
        session
    }

    fn initialize_players(&mut self) {
        let (red, black) = match self.mode {
            GameMode::HumanVsHuman => (None, None),
            GameMode::HumanVsAi => (None, Some(EvaluatorKind::PieceCount)),
            GameMode::AiVsAi => (Some(EvaluatorKind::Amp), Some(EvaluatorKind::PieceCount)),
        };
        self.red_player = red.map(|kind| {
            AiPlayer::new(Color::Red, kind.build(), self.difficulty).named("IA Vermelha")
        });
        self.black_player = black.map(|kind| {
            AiPlayer::new(Color::Black, kind.build(), self.difficulty).named("IA Preta")
        });
    }

    /// Substitui o jogador de IA de uma cor (por exemplo com outro avaliador).
    pub fn set_ai_player(&mut self, player: AiPlayer) {
        match player.color() {
            Color::Red => self.red_player = Some(player),
            Color::Black => self.black_player = Some(player),
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn ai_player(&self, color: Color) -> Option<&AiPlayer> {
        match color {
            Color::Red => self.red_player.as_ref(),
            Color::Black => self.black_player.as_ref(),
        }
    }

    pub fn current_ai_player(&self) -> Option<&AiPlayer> {
        self.ai_player(self.current_player)
    }

    fn current_ai_player_mut(&mut self) -> Option<&mut AiPlayer> {
        match self.current_player {
            Color::Red => self.red_player.as_mut(),
            Color::Black => self.black_player.as_mut(),
        }
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_ai_player().is_none()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.current_ai_player().is_some()
    }

    /// Lances legais de quem tem a vez.
    pub fn legal_moves(&self) -> Vec<Move> {
        crate::moves::legal_moves(self.current_player, &self.board)
    }

    /// Seleciona uma peça do jogador humano que tem a vez.
    pub fn select_piece(&mut self, position: Position) -> bool {
        if self.status.is_over() || !self.is_human_turn() {
            return false;
        }
        let Some(piece) = self.board.piece_at(position) else {
            return false;
        };
        if piece.color != self.current_player {
            return false;
        }

        self.selected_moves = moves_for_piece(piece, &self.board);
        self.selected = Some(position);
        true
    }

    pub fn deselect_piece(&mut self) {
        self.selected = None;
        self.selected_moves.clear();
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn selected_moves(&self) -> &[Move] {
        &self.selected_moves
    }

    /// Move a peça selecionada para `destination`, se houver lance válido.
    pub fn make_human_move(&mut self, destination: Position) -> bool {
        if self.selected.is_none() {
            return false;
        }
        let Some(mv) = self.selected_moves.iter().find(|m| m.end == destination).cloned() else {
            debug!("destino {} não corresponde a nenhum lance da peça selecionada", destination);
            return false;
        };

        let applied = self.apply_move(mv);
        self.deselect_piece();
        applied
    }

    /// Valida e aplica um lance de quem tem a vez.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if self.status.is_over() {
            return false;
        }
        if !rules::is_valid_move(&self.board, &mv, self.current_player) {
            debug!("lance rejeitado para {}: {}", self.current_player, mv);
            return false;
        }
        let next = match rules::apply_move(&self.board, &mv) {
            Ok(next) => next,
            Err(e) => {
                debug!("lance rejeitado: {}", e);
                return false;
            }
        };

        info!("{} joga {}", self.current_player, mv);
        self.board = next;
        self.history.push(mv);
        self.current_player = !self.current_player;
        self.update_status();
        true
    }

    /// A IA que tem a vez escolhe e joga um lance.
    pub fn execute_ai_move(&mut self) -> DamasResult<Option<Move>> {
        if self.status.is_over() {
            return Ok(None);
        }
        let board = self.board.clone();
        let Some(ai) = self.current_ai_player_mut() else {
            return Ok(None);
        };

        match ai.choose_move(&board)? {
            Some(mv) => {
                if self.apply_move(mv.clone()) {
                    Ok(Some(mv))
                } else {
                    Ok(None)
                }
            }
            None => {
                self.update_status();
                Ok(None)
            }
        }
    }

    fn update_status(&mut self) {
        self.status = rules::get_game_status(&self.board, self.current_player);
        if self.status.is_over() {
            info!("fim de jogo: {} após {} lances", self.status, self.history.len());
        }
    }

    pub fn reset(&mut self) {
        self.board = BoardState::initial();
        self.current_player = Color::Red;
        self.history.clear();
        self.status = GameStatus::Playing;
        self.deselect_piece();
    }

    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.initialize_players();
        self.reset();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.initialize_players();
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}

impl fmt::Display for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GameSession(turno={}, lances={}, status={})",
            self.current_player,
            self.move_count(),
            self.status
        )
    }
}
