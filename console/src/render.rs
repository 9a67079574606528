use std::io::Write;
use std::thread;
use std::time::Duration;

use common::games::tictactoe::{Board, GameObserver, GameStatus, Player, TicTacToeGameState, WinningLine};

/// Draws the board with row and column numbers. Cells of `winning` are
/// bracketed.
pub fn render_board(board: &Board, winning: Option<WinningLine>) -> String {
    let width = board.width();
    let mut lines = Vec::with_capacity(width + 1);

    let mut header = String::from("  ");
    for col in 0..width {
        header.push_str(&format!(" {} ", col));
    }
    lines.push(header.trim_end().to_string());

    for row in 0..width {
        let mut text = format!("{} ", row);
        for col in 0..width {
            let index = row * width + col;
            let symbol = board.get(index).map(|cell| cell.symbol()).unwrap_or(' ');
            if winning.is_some_and(|line| line.contains(index, width)) {
                text.push_str(&format!("[{}]", symbol));
            } else {
                text.push_str(&format!(" {} ", symbol));
            }
        }
        lines.push(text.trim_end().to_string());
    }

    lines.join("\n")
}

pub fn outcome_message(status: GameStatus) -> String {
    match status {
        GameStatus::Won(line) => format!("{} wins!", line.player),
        GameStatus::Draw => "It's a tie!".to_string(),
        GameStatus::InProgress => "Game in progress".to_string(),
    }
}

pub struct ConsoleObserver<W> {
    output: W,
    engine_delay: Duration,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(output: W, engine_delay: Duration) -> Self {
        Self { output, engine_delay }
    }

    pub fn show_start(&mut self, game: &TicTacToeGameState) {
        self.write(&format!("{}\n\n", render_board(game.board(), None)));
    }

    fn write(&mut self, text: &str) {
        // A closed stdout leaves nothing to draw on; the game itself goes on.
        let _ = self.output.write_all(text.as_bytes());
        let _ = self.output.flush();
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn on_turn_start(&mut self, game: &TicTacToeGameState, is_engine: bool) {
        if !is_engine {
            return;
        }
        self.write(&format!("{} is thinking...\n", game.current_player()));
        if !self.engine_delay.is_zero() {
            thread::sleep(self.engine_delay);
        }
    }

    fn on_move(&mut self, game: &TicTacToeGameState, index: usize, player: Player) {
        let position = game.board().position(index);
        let winning = match game.status() {
            GameStatus::Won(line) => Some(line),
            _ => None,
        };
        self.write(&format!(
            "{} marks ({}, {})\n{}\n\n",
            player,
            position.row,
            position.col,
            render_board(game.board(), winning)
        ));
    }

    fn on_game_over(&mut self, game: &TicTacToeGameState) {
        self.write(&format!("{}\n", outcome_message(game.status())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{Line, Rules};

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(3);
        assert_eq!(render_board(&board, None), "   0  1  2\n0  _  _  _\n1  _  _  _\n2  _  _  _");
    }

    #[test]
    fn test_render_highlights_winning_row() {
        let board: Board = "XXX OO_ ___".parse().unwrap();
        let winning = WinningLine::new(Player::X, Line::Row(0));

        assert_eq!(
            render_board(&board, Some(winning)),
            "   0  1  2\n0 [X][X][X]\n1  O  O  _\n2  _  _  _"
        );
    }

    #[test]
    fn test_render_highlights_4x4_anti_diagonal() {
        let board: Board = "___O __O_ _O__ O___".parse().unwrap();
        let winning = WinningLine::new(Player::O, Line::AntiDiagonal);

        let rendered = render_board(&board, Some(winning));

        assert_eq!(rendered.lines().nth(1), Some("0  _  _  _ [O]"));
        assert_eq!(rendered.lines().nth(4), Some("3 [O] _  _  _"));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            outcome_message(GameStatus::Won(WinningLine::new(Player::O, Line::Column(1)))),
            "O wins!"
        );
        assert_eq!(outcome_message(GameStatus::Draw), "It's a tie!");
    }

    #[test]
    fn test_observer_draws_moves_and_result() {
        let mut output = Vec::new();
        let mut game = TicTacToeGameState::new(Rules::new(3).unwrap());
        {
            let mut observer = ConsoleObserver::new(&mut output, Duration::ZERO);
            for index in [0, 3, 1, 4, 2] {
                let player = game.current_player();
                observer.on_turn_start(&game, true);
                game.place_mark(index).unwrap();
                observer.on_move(&game, index, player);
            }
            observer.on_game_over(&game);
        }

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("X is thinking..."));
        assert!(transcript.contains("X marks (0, 2)"));
        assert!(transcript.contains("0 [X][X][X]"));
        assert!(transcript.ends_with("X wins!\n"));
    }
}
