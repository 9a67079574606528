use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("board of {len} cells is not a non-empty square")]
    InvalidBoardShape { len: usize },

    #[error("board width {board} does not match the rules width {rules}")]
    WidthMismatch { board: usize, rules: usize },

    #[error("unknown cell symbol {symbol:?}")]
    InvalidSymbol { symbol: char },

    #[error("no legal moves: the board is full")]
    NoLegalMoves,

    #[error("board width {width} is not supported (supported: {min}..={max})")]
    UnsupportedWidth { width: usize, min: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("cell {index} is out of bounds for a board of {len} cells")]
    OutOfBounds { index: usize, len: usize },

    #[error("cell {index} is already marked")]
    CellOccupied { index: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to read move: {0}")]
    Input(String),
}
