// Ficheiro: src/core/error.rs
// Descrição: Tipos de erro do motor de damas.

use thiserror::Error;

use super::position::Position;

/// Erros que podem ocorrer no motor de damas
#[derive(Error, Debug)]
pub enum DamasError {
    /// Coordenada fora do tabuleiro 8x8
    #[error("Coordenada inválida: ({row}, {col}) (linha e coluna devem estar entre 0 e 7)")]
    InvalidCoordinate { row: i32, col: i32 },

    /// Movimento aplicado a partir de uma casa vazia
    #[error("Estado ilegal: nenhuma peça na posição inicial {position}")]
    IllegalState { position: Position },

    /// Tentativa de colocar peça numa casa clara
    #[error("Casa clara não jogável: {position}")]
    LightSquare { position: Position },

    /// Tentativa de colocar duas peças na mesma casa
    #[error("Casa já ocupada: {position}")]
    SquareOccupied { position: Position },

    /// Nome desconhecido para uma opção (dificuldade, avaliador, modo)
    #[error("Valor desconhecido para {kind}: '{value}'")]
    UnknownOption { kind: &'static str, value: String },

    /// Falha ao criar o pool de threads da busca
    #[error("Falha ao criar pool de threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Thread de trabalho terminou em pânico
    #[error("Thread de trabalho da IA terminou em pânico")]
    WorkerPanicked,
}

/// Alias de Result para operações do motor
pub type DamasResult<T> = Result<T, DamasError>;
