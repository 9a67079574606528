mod board;
mod bot_controller;
mod error;
mod game_state;
mod rules;
mod scorer;
mod search;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{MoveChoice, TieBreak, best_move, choose_move};
pub use error::{EngineError, GameError};
pub use game_state::TicTacToeGameState;
pub use rules::{MAX_SEARCH_DEPTH, MAX_WIDTH, MIN_WIDTH, Rules, WinSentinels, new_sentinels};
pub use scorer::{WIN_SCORE, evaluate};
pub use search::{SCORE_MAX, SCORE_MIN, search, solve};
pub use session::{EngineMoveSource, GameObserver, MoveSource, TicTacToeSession};
pub use types::{Cell, GameStatus, Line, Player, Position, WinningLine};
pub use win_detector::{first_winning_line, line_sum, lines, winning_line};
