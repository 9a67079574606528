use std::fmt;
use std::str::FromStr;

use super::error::EngineError;
use super::types::{Cell, Player, Position};

/// Flat, row-major N×N grid. Holds marks only; rules live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            cells: vec![Cell::Empty; width * width],
        }
    }

    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, EngineError> {
        let len = cells.len();
        let width = len.isqrt();
        if len == 0 || width * width != len {
            return Err(EngineError::InvalidBoardShape { len });
        }
        Ok(Self { width, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn position(&self, index: usize) -> Position {
        Position::from_index(index, self.width)
    }

    pub fn index_of(&self, position: Position) -> Option<usize> {
        if position.row >= self.width || position.col >= self.width {
            return None;
        }
        Some(position.to_index(self.width))
    }

    pub fn place(&mut self, index: usize, player: Player) {
        debug_assert_eq!(self.cells[index], Cell::Empty, "cell {} is already marked", index);
        self.cells[index] = Cell::Mark(player);
    }

    pub fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Empty cell indices in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }
}

/// Parses `X`, `O` and `_` symbols, skipping whitespace.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|symbol| match symbol {
                'X' | 'x' => Ok(Cell::Mark(Player::X)),
                'O' | 'o' => Ok(Cell::Mark(Player::O)),
                '_' | '.' => Ok(Cell::Empty),
                _ => Err(EngineError::InvalidSymbol { symbol }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(self.width).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}
