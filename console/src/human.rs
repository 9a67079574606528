use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use common::games::tictactoe::{GameError, MoveSource, Position, TicTacToeGameState};

/// Input shared between both human sides and the rematch prompt.
pub type SharedInput<R> = Rc<RefCell<R>>;

/// Blocking human input: reads `row col` (0-based) lines until a free cell
/// is named.
pub struct StdinMoveSource<R, W> {
    input: SharedInput<R>,
    output: W,
}

impl<R: BufRead, W: Write> StdinMoveSource<R, W> {
    pub fn new(input: SharedInput<R>, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, text: &str) -> Result<(), GameError> {
        write!(self.output, "{}", text).map_err(|e| GameError::Input(e.to_string()))?;
        self.output.flush().map_err(|e| GameError::Input(e.to_string()))
    }
}

pub fn parse_position(line: &str, width: usize) -> Result<Position, String> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err("Enter a row and a column, e.g. `1 2`".to_string());
    };

    let parse = |value: &str| -> Result<usize, String> {
        match value.parse::<usize>() {
            Ok(n) if n < width => Ok(n),
            _ => Err(format!("`{}` is not between 0 and {}", value, width - 1)),
        }
    };

    Ok(Position::new(parse(row)?, parse(col)?))
}

/// Reads one line; `None` once the input is closed.
pub fn read_line<R: BufRead>(input: &RefCell<R>) -> Result<Option<String>, GameError> {
    let mut line = String::new();
    let read = input
        .borrow_mut()
        .read_line(&mut line)
        .map_err(|e| GameError::Input(e.to_string()))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

impl<R: BufRead, W: Write> MoveSource for StdinMoveSource<R, W> {
    fn next_move(&mut self, game: &TicTacToeGameState) -> Result<usize, GameError> {
        let board = game.board();
        let player = game.current_player();

        loop {
            self.say(&format!("{} to move (row col): ", player))?;

            let Some(line) = read_line(&self.input)? else {
                return Err(GameError::Input("input closed".to_string()));
            };

            let index = match parse_position(&line, board.width()) {
                Ok(position) => position.to_index(board.width()),
                Err(message) => {
                    self.say(&format!("{}\n", message))?;
                    continue;
                }
            };

            if board.get(index).and_then(|cell| cell.player()).is_some() {
                self.say("That cell is taken.\n")?;
                continue;
            }

            return Ok(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use common::games::tictactoe::Rules;

    fn game_with(moves: &[usize]) -> TicTacToeGameState {
        let mut game = TicTacToeGameState::new(Rules::new(3).unwrap());
        for &index in moves {
            game.place_mark(index).unwrap();
        }
        game
    }

    fn input(text: &str) -> SharedInput<Cursor<String>> {
        Rc::new(RefCell::new(Cursor::new(text.to_string())))
    }

    #[test]
    fn test_parse_position_accepts_spaces_and_commas() {
        assert_eq!(parse_position("1 2", 3), Ok(Position::new(1, 2)));
        assert_eq!(parse_position("0,3", 4), Ok(Position::new(0, 3)));
        assert_eq!(parse_position("  2   0 ", 3), Ok(Position::new(2, 0)));
    }

    #[test]
    fn test_parse_position_rejects_bad_input() {
        assert!(parse_position("3 0", 3).is_err());
        assert!(parse_position("0 -1", 3).is_err());
        assert!(parse_position("a b", 3).is_err());
        assert!(parse_position("1", 3).is_err());
        assert!(parse_position("1 1 1", 3).is_err());
        assert!(parse_position("", 3).is_err());
    }

    #[test]
    fn test_reprompts_until_a_free_cell_is_given() {
        let game = game_with(&[4]);
        let mut output = Vec::new();

        let index = StdinMoveSource::new(input("9 9\n1 1\n2 0\n"), &mut output)
            .next_move(&game)
            .unwrap();

        assert_eq!(index, 6);
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.starts_with("O to move (row col): "));
        assert!(transcript.contains("`9` is not between 0 and 2"));
        assert!(transcript.contains("That cell is taken."));
    }

    #[test]
    fn test_both_sides_share_one_input() {
        let shared = input("0 0\n0 1\n");
        let mut x = StdinMoveSource::new(shared.clone(), Vec::new());
        let mut o = StdinMoveSource::new(shared, Vec::new());

        let mut game = game_with(&[]);
        let first = x.next_move(&game).unwrap();
        game.place_mark(first).unwrap();
        let second = o.next_move(&game).unwrap();

        assert_eq!((first, second), (0, 1));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let game = game_with(&[]);

        let result = StdinMoveSource::new(input(""), Vec::new()).next_move(&game);

        assert_eq!(result, Err(GameError::Input("input closed".to_string())));
    }
}
