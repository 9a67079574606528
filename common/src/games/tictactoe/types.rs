use std::fmt;

/// The two sides. X always moves first and is the maximizing side of the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn is_maximizer(self) -> bool {
        self == Player::X
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Mark(player) => player.symbol(),
        }
    }

    /// Numeric code summed by the line evaluator: the ASCII value of the
    /// cell's symbol (`X` = 88, `O` = 79, empty = 95).
    pub fn code(self) -> i32 {
        self.symbol() as i32
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(player),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self {
            row: index / width,
            col: index % width,
        }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }
}

/// One of the `2N + 2` lines of an N×N board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    fn cell_index(self, step: usize, width: usize) -> usize {
        match self {
            Line::Row(row) => row * width + step,
            Line::Column(col) => step * width + col,
            Line::Diagonal => step * width + step,
            Line::AntiDiagonal => step * width + (width - 1 - step),
        }
    }

    /// Flat indices of the line's cells, from its start to its end.
    pub fn cells(self, width: usize) -> impl Iterator<Item = usize> {
        (0..width).map(move |step| self.cell_index(step, width))
    }

    pub fn start(self, width: usize) -> Position {
        Position::from_index(self.cell_index(0, width), width)
    }

    pub fn end(self, width: usize) -> Position {
        Position::from_index(self.cell_index(width - 1, width), width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub line: Line,
}

impl WinningLine {
    pub fn new(player: Player, line: Line) -> Self {
        Self { player, line }
    }

    pub fn contains(&self, index: usize, width: usize) -> bool {
        self.line.cells(width).any(|cell| cell == index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(WinningLine),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(line) => Some(line.player),
            _ => None,
        }
    }
}
