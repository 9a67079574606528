use super::board::Board;
use super::rules::Rules;
use super::scorer::evaluate;
use super::types::Player;

pub const SCORE_MIN: i32 = i32::MIN;
pub const SCORE_MAX: i32 = i32::MAX;

/// Places `player` at `index`, runs `f`, and clears the cell again before
/// returning whatever `f` produced.
pub(crate) fn with_mark<T>(
    board: &mut Board,
    index: usize,
    player: Player,
    f: impl FnOnce(&mut Board) -> T,
) -> T {
    board.place(index, player);
    let result = f(board);
    board.clear(index);
    result
}

/// Depth-limited minimax with alpha-beta pruning. X maximizes, O minimizes.
///
/// The board is mutated while searching and is always left exactly as it was
/// passed in, cutoffs included.
pub fn search(
    board: &mut Board,
    rules: &Rules,
    remaining_depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    let score = evaluate(board, rules, remaining_depth);
    if score != 0 || remaining_depth == 0 || board.is_full() {
        return score;
    }

    if maximizing {
        let mut highest = SCORE_MIN;
        for index in board.legal_moves() {
            let value = with_mark(board, index, Player::X, |board| {
                search(board, rules, remaining_depth - 1, alpha, beta, false)
            });
            highest = highest.max(value);
            alpha = alpha.max(highest);
            if alpha >= beta {
                break;
            }
        }
        highest
    } else {
        let mut lowest = SCORE_MAX;
        for index in board.legal_moves() {
            let value = with_mark(board, index, Player::O, |board| {
                search(board, rules, remaining_depth - 1, alpha, beta, true)
            });
            lowest = lowest.min(value);
            beta = beta.min(lowest);
            if beta <= alpha {
                break;
            }
        }
        lowest
    }
}

/// Full-window search from the root with the rules' fixed depth.
pub fn solve(board: &mut Board, rules: &Rules, to_move: Player) -> i32 {
    search(
        board,
        rules,
        rules.max_depth(),
        SCORE_MIN,
        SCORE_MAX,
        to_move.is_maximizer(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_after(board: &Board, rules: &Rules, index: usize, player: Player) -> i32 {
        let mut board = board.clone();
        with_mark(&mut board, index, player, |board| {
            solve(board, rules, player.opponent())
        })
    }

    #[test]
    fn test_empty_3x3_is_a_draw() {
        let rules = Rules::new(3).unwrap();
        let mut board = Board::new(3);

        assert_eq!(solve(&mut board, &rules, Player::X), 0);
        assert_eq!(solve(&mut board, &rules, Player::O), 0);
        assert_eq!(board, Board::new(3));
    }

    #[test]
    fn test_search_restores_board_on_every_path() {
        let rules = Rules::new(3).unwrap();
        let boards = [
            "_________",
            "X___O____",
            "XX_OO____",
            "XX_O__O__",
            "XOXOXOO__",
            "XXOOOXX__",
            "XXXOO____",
            "XOXXOOOXX",
        ];
        for text in boards {
            for to_move in [Player::X, Player::O] {
                for (alpha, beta) in [(SCORE_MIN, SCORE_MAX), (-5, 5), (0, 0)] {
                    let mut board: Board = text.parse().unwrap();
                    let before = board.clone();
                    search(&mut board, &rules, 12, alpha, beta, to_move.is_maximizer());
                    assert_eq!(board, before, "{} {:?} ({}, {})", text, to_move, alpha, beta);
                }
            }
        }
    }

    #[test]
    fn test_decided_position_is_terminal() {
        let rules = Rules::new(3).unwrap();
        let mut board: Board = "XXX OO_ ___".parse().unwrap();
        assert_eq!(search(&mut board, &rules, 5, SCORE_MIN, SCORE_MAX, false), 15);
    }

    #[test]
    fn test_zero_depth_returns_static_value() {
        let rules = Rules::new(3).unwrap();
        let mut board: Board = "XX_ OO_ ___".parse().unwrap();
        assert_eq!(search(&mut board, &rules, 0, SCORE_MIN, SCORE_MAX, true), 0);
    }

    #[test]
    fn test_immediate_win_scores() {
        let rules = Rules::new(3).unwrap();
        let board: Board = "XX_ OO_ ___".parse().unwrap();

        assert_eq!(value_after(&board, &rules, 2, Player::X), 22);
        assert_eq!(value_after(&board, &rules, 5, Player::X), 0);
        assert_eq!(value_after(&board, &rules, 5, Player::O), -22);
    }

    #[test]
    fn test_faster_forced_win_scores_higher() {
        let rules = Rules::new(3).unwrap();
        let board: Board = "XX_ O__ O__".parse().unwrap();

        let immediate = value_after(&board, &rules, 2, Player::X);
        let in_three_plies = value_after(&board, &rules, 4, Player::X);

        assert_eq!(immediate, 22);
        assert_eq!(in_three_plies, 20);
        assert!(immediate > in_three_plies);
        assert!(in_three_plies > 0);
    }

    #[test]
    fn test_slower_loss_is_preferred_to_faster_loss() {
        let rules = Rules::new(3).unwrap();
        let board: Board = "XX_ O__ O__".parse().unwrap();

        // O blocking at 2 still loses, but later than letting X complete the row.
        let block = value_after(&board, &rules, 2, Player::O);
        let ignore = value_after(&board, &rules, 8, Player::O);
        assert!(block < ignore);
    }

    #[test]
    fn test_open_anti_diagonal_on_4x4() {
        let rules = Rules::new(4).unwrap();
        #[rustfmt::skip]
        let mut board: Board = "
            O X O X
            X O X O
            _ X _ O
            _ _ _ _
        ".parse().unwrap();
        let before = board.clone();

        assert_eq!(solve(&mut board, &rules, Player::X), 21);
        assert_eq!(solve(&mut board, &rules, Player::O), 0);
        assert_eq!(board, before);
    }
}
