use super::board::Board;
use super::error::GameError;
use super::rules::Rules;
use super::types::{GameStatus, Player};
use super::win_detector::winning_line;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    rules: Rules,
    current_player: Player,
    status: GameStatus,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(rules: Rules) -> Self {
        Self {
            board: rules.new_board(),
            rules,
            current_player: Player::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.board.marks_placed()
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        match self.board.get(index) {
            None => {
                return Err(GameError::OutOfBounds {
                    index,
                    len: self.board.cell_count(),
                });
            }
            Some(cell) if cell.player().is_some() => {
                return Err(GameError::CellOccupied { index });
            }
            Some(_) => {}
        }

        self.board.place(index, self.current_player);
        self.last_move = Some(index);

        self.check_game_over();

        if !self.status.is_over() {
            self.current_player = self.current_player.opponent();
        }

        Ok(self.status)
    }

    fn check_game_over(&mut self) {
        if let Some(line) = winning_line(&self.board, &self.rules) {
            self.status = GameStatus::Won(line);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
