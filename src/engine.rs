use std::fmt::{Display, Formatter};
use std::num::NonZero;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

use crate::board::Board;
use crate::cell::Tile;
use crate::error::{LoadError, Rejection};
use crate::history::History;
use crate::level::LevelData;
use crate::propagate::propagate;

/// Where a game stands. `Won` and `Lost` are terminal until an [`undo`](Engine::undo).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize, StrumDisplay, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

/// A single puzzle in progress: the board, the swap budget and the undo history.
///
/// Every operation either applies completely or returns a [`Rejection`] and leaves the engine as it was.
#[derive(Clone, Debug)]
pub struct Engine {
    board: Board,
    state: GameState,
    swaps: usize,
    max_swaps: NonZero<usize>,
    history: History,
}

impl Engine {
    /// Validate `level` and start a game from it.
    ///
    /// Tiles are taken exactly as given, including their connection states; nothing is propagated until the first swap.
    pub fn load(level: LevelData) -> Result<Self, LoadError> {
        let dims = NonZero::new(level.rows).zip(NonZero::new(level.columns))
            .ok_or(LoadError::ZeroDimension)?;
        let max_swaps = NonZero::new(level.max_number_of_swaps).ok_or(LoadError::ZeroSwapBudget)?;

        let expected = dims.0.get().checked_mul(dims.1.get())
            .ok_or(LoadError::BoardTooLarge { rows: level.rows, columns: level.columns })?;
        if level.connectors.len() != expected {
            return Err(LoadError::ConnectorCount { expected, found: level.connectors.len() });
        }

        let tiles = level.connectors.iter()
            .enumerate()
            .map(|(index, code)| code.parse::<Tile>().map_err(|source| LoadError::BadTileCode { index, source }))
            .collect::<Result<Vec<_>, _>>()?;

        let starts = tiles.iter().filter(|tile| tile.is_start()).count();
        if starts != 1 {
            return Err(LoadError::StartCount(starts));
        }
        let ends = tiles.iter().filter(|tile| tile.is_end()).count();
        if ends != 1 {
            return Err(LoadError::EndCount(ends));
        }

        let board = Board::from_tiles(dims, tiles)
            .ok_or(LoadError::ConnectorCount { expected, found: level.connectors.len() })?;

        log::info!(
            "level loaded: {}x{} board, {} / {} swaps, {}",
            board.rows(), board.columns(), level.number_of_swaps, max_swaps, level.state,
        );

        Ok(Self {
            board,
            state: level.state,
            swaps: level.number_of_swaps,
            max_swaps,
            history: History::default(),
        })
    }

    /// [`load`](Self::load) from the JSON form of [`LevelData`].
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Self::load(serde_json::from_str(json)?)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn swap_count(&self) -> usize {
        self.swaps
    }

    pub fn max_swaps(&self) -> usize {
        self.max_swaps.get()
    }

    /// How many swaps can currently be undone.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    fn check_in_range(&self, index: usize) -> Result<(), Rejection> {
        match index < self.board.len() {
            true => Ok(()),
            false => Err(Rejection::IndexOutOfRange { index, len: self.board.len() }),
        }
    }

    // only called once both indices are known to be in range
    fn check_movable(&self, index: usize) -> Result<(), Rejection> {
        match self.board.tile(index) {
            Some(tile) if tile.is_anchor() => Err(Rejection::AnchorTileSwap { index }),
            Some(Tile::Empty) => Err(Rejection::EmptySlot { index }),
            _ => Ok(()),
        }
    }

    /// Exchange the tiles at two linear indices, then recompute which tiles connect to the start tile.
    ///
    /// Reaching the end tile wins, even on the swap that uses up the budget.
    /// Otherwise the game is lost once the budget is spent.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<GameState, Rejection> {
        let checked = self.check_playing()
            .and_then(|_| self.check_in_range(a))
            .and_then(|_| self.check_in_range(b))
            .and_then(|_| self.check_movable(a))
            .and_then(|_| self.check_movable(b));
        if let Err(rejection) = checked {
            log::debug!("swap {} <-> {} rejected: {}", a, b, rejection);
            return Err(rejection);
        }

        self.history.push(self.board.clone());
        self.board.swap(a, b);
        self.swaps += 1;

        self.board.reset_to_potential();
        let reached = match self.board.start_location() {
            Some(start) => propagate(&mut self.board, start),
            None => false,
        };

        self.state = if reached {
            GameState::Won
        } else if self.swaps >= self.max_swaps.get() {
            GameState::Lost
        } else {
            GameState::Playing
        };

        log::debug!("swapped {} <-> {} ({} / {}), now {}\n{}", a, b, self.swaps, self.max_swaps, self.state, self.board);
        Ok(self.state)
    }

    /// [`swap`](Self::swap) the first tiles whose codes read `a` and `b`, e.g. `"rc-2-5"`.
    pub fn swap_codes(&mut self, a: &str, b: &str) -> Result<GameState, Rejection> {
        let codes = self.board.codes();
        let find = |code: &str| codes.iter()
            .position(|c| c == code)
            .ok_or_else(|| Rejection::UnknownConnector(code.to_owned()));

        let checked = self.check_playing().and_then(|_| Ok((find(a)?, find(b)?)));
        match checked {
            Ok((a, b)) => self.swap(a, b),
            Err(rejection) => {
                log::debug!("swap `{}` <-> `{}` rejected: {}", a, b, rejection);
                Err(rejection)
            }
        }
    }

    /// Roll back the most recent swap, restoring the board exactly as it was, and resume play.
    pub fn undo(&mut self) -> Result<GameState, Rejection> {
        let Some(board) = self.history.pop() else {
            log::debug!("undo rejected: {}", Rejection::EmptyHistory);
            return Err(Rejection::EmptyHistory);
        };

        self.board = board;
        self.swaps -= 1;
        self.state = GameState::Playing;

        log::debug!("undid swap ({} / {}), {} more in history", self.swaps, self.max_swaps, self.history.len());
        Ok(self.state)
    }

    /// The current game in level data form.
    pub fn snapshot(&self) -> LevelData {
        LevelData {
            rows: self.board.rows(),
            columns: self.board.columns(),
            state: self.state,
            number_of_swaps: self.swaps,
            max_number_of_swaps: self.max_swaps.get(),
            connectors: self.board.codes(),
        }
    }

    fn check_playing(&self) -> Result<(), Rejection> {
        match self.state {
            GameState::Playing => Ok(()),
            state => Err(Rejection::GameNotPlaying(state)),
        }
    }

    /// Indices of tiles currently proven connected to the start tile.
    pub fn active_indices(&self) -> Vec<usize> {
        self.board.tiles()
            .positions(Tile::is_active)
            .collect_vec()
    }
}

impl Display for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CONNECTORS:")?;
        write!(f, "{}", self.board)?;
        writeln!(f)?;
        writeln!(f, "SWAPS: {} / {}", self.swaps, self.max_swaps)?;
        write!(f, "STATE: {}", self.state)
    }
}
