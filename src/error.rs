use thiserror::Error;

use crate::engine::GameState;

/// Reasons a tile code string cannot be read.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TileCodeError {
    #[error("unknown role prefix `{0}`")]
    UnknownRole(String),
    #[error("missing `-` after the role prefix")]
    MissingSeparator,
    #[error("`{0}` is not a port, expected 1 through 6")]
    BadPort(char),
    #[error("tile has no ports")]
    NoPorts,
}

/// Reasons level data cannot become an [`Engine`](crate::Engine). The engine is never constructed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed level json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("board must have at least one row and one column")]
    ZeroDimension,
    #[error("a {rows}x{columns} board is too large to address")]
    BoardTooLarge { rows: usize, columns: usize },
    #[error("swap budget must be positive")]
    ZeroSwapBudget,
    #[error("expected {expected} connectors, found {found}")]
    ConnectorCount { expected: usize, found: usize },
    #[error("connector {index}: {source}")]
    BadTileCode { index: usize, source: TileCodeError },
    #[error("board needs exactly one start connector, found {0}")]
    StartCount(usize),
    #[error("board needs exactly one end connector, found {0}")]
    EndCount(usize),
}

/// Reasons a swap or undo was refused. A refused operation changes nothing.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Rejection {
    #[error("game already finished: {0}")]
    GameNotPlaying(GameState),
    #[error("cannot swap non-existent connector {index} on a board of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cannot swap start or end connector at {index}")]
    AnchorTileSwap { index: usize },
    #[error("cannot swap the empty slot at {index}")]
    EmptySlot { index: usize },
    #[error("no connector `{0}` on the board")]
    UnknownConnector(String),
    #[error("nothing to undo")]
    EmptyHistory,
}
