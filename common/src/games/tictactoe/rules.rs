use super::board::Board;
use super::error::EngineError;
use super::types::{Cell, Player};

pub const MIN_WIDTH: usize = 3;
/// Widest board the line-sum encoding has been checked for.
pub const MAX_WIDTH: usize = 4;
pub const MAX_SEARCH_DEPTH: u32 = 12;

/// Line sums meaning "every cell of this line belongs to one player".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinSentinels {
    pub x: i32,
    pub o: i32,
}

impl WinSentinels {
    pub fn owner(&self, line_sum: i32) -> Option<Player> {
        if line_sum == self.x {
            Some(Player::X)
        } else if line_sum == self.o {
            Some(Player::O)
        } else {
            None
        }
    }
}

pub fn new_sentinels(width: usize) -> Result<WinSentinels, EngineError> {
    if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        return Err(EngineError::UnsupportedWidth {
            width,
            min: MIN_WIDTH,
            max: MAX_WIDTH,
        });
    }
    let width = width as i32;
    Ok(WinSentinels {
        x: Cell::Mark(Player::X).code() * width,
        o: Cell::Mark(Player::O).code() * width,
    })
}

/// Everything the engine needs to know about the game being played, fixed
/// when a new game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    width: usize,
    sentinels: WinSentinels,
    max_depth: u32,
}

impl Rules {
    pub fn new(width: usize) -> Result<Self, EngineError> {
        Ok(Self {
            width,
            sentinels: new_sentinels(width)?,
            max_depth: MAX_SEARCH_DEPTH,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn sentinels(&self) -> WinSentinels {
        self.sentinels
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn new_board(&self) -> Board {
        Board::new(self.width)
    }

    pub fn check_board(&self, board: &Board) -> Result<(), EngineError> {
        if board.width() != self.width {
            return Err(EngineError::WidthMismatch {
                board: board.width(),
                rules: self.width,
            });
        }
        Ok(())
    }
}
