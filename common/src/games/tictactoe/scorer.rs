use super::board::Board;
use super::rules::Rules;
use super::types::Player;
use super::win_detector::first_winning_line;

pub const WIN_SCORE: i32 = 10;

/// Static value of a position from X's point of view.
///
/// A decided position is worth `10 + remaining_depth`, so a win found closer
/// to the root outranks a slower one and a slow loss outranks a fast one.
/// Anything undecided is worth 0.
pub fn evaluate(board: &Board, rules: &Rules, remaining_depth: u32) -> i32 {
    match first_winning_line(board, rules) {
        Some(Player::X) => WIN_SCORE + remaining_depth as i32,
        Some(Player::O) => -(WIN_SCORE + remaining_depth as i32),
        None => 0,
    }
}
