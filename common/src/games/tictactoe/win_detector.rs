use super::board::Board;
use super::rules::Rules;
use super::types::{Line, Player, WinningLine};

/// All `2N + 2` lines in scan order: row `i` then column `i` for every `i`,
/// then both diagonals.
pub fn lines(width: usize) -> impl Iterator<Item = Line> {
    (0..width)
        .flat_map(|i| [Line::Row(i), Line::Column(i)])
        .chain([Line::Diagonal, Line::AntiDiagonal])
}

pub fn line_sum(board: &Board, line: Line) -> i32 {
    let cells = board.cells();
    line.cells(board.width()).map(|index| cells[index].code()).sum()
}

/// First line (in scan order) fully owned by one player.
pub fn winning_line(board: &Board, rules: &Rules) -> Option<WinningLine> {
    let sentinels = rules.sentinels();
    lines(board.width()).find_map(|line| {
        sentinels
            .owner(line_sum(board, line))
            .map(|player| WinningLine::new(player, line))
    })
}

pub fn first_winning_line(board: &Board, rules: &Rules) -> Option<Player> {
    winning_line(board, rules).map(|line| line.player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Cell;

    fn rules(width: usize) -> Rules {
        Rules::new(width).unwrap()
    }

    #[test]
    fn test_lines_count_and_order() {
        let all: Vec<Line> = lines(3).collect();
        assert_eq!(all.len(), 8);
        assert_eq!(
            all,
            vec![
                Line::Row(0),
                Line::Column(0),
                Line::Row(1),
                Line::Column(1),
                Line::Row(2),
                Line::Column(2),
                Line::Diagonal,
                Line::AntiDiagonal,
            ]
        );
        assert_eq!(lines(4).count(), 10);
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(winning_line(&Board::new(3), &rules(3)), None);
        assert_eq!(winning_line(&Board::new(4), &rules(4)), None);
    }

    #[test]
    fn test_row_win_reports_line() {
        let board: Board = "___ OOO X_X".parse().unwrap();
        let line = winning_line(&board, &rules(3)).unwrap();
        assert_eq!(line, WinningLine::new(Player::O, Line::Row(1)));
    }

    #[test]
    fn test_column_win_on_4x4() {
        #[rustfmt::skip]
        let board: Board = "
            _ _ X O
            _ _ X O
            _ _ X _
            O _ X _
        ".parse().unwrap();
        let line = winning_line(&board, &rules(4)).unwrap();
        assert_eq!(line, WinningLine::new(Player::X, Line::Column(2)));
        assert_eq!(line.line.cells(4).collect::<Vec<_>>(), vec![2, 6, 10, 14]);
    }

    #[test]
    fn test_diagonal_wins() {
        let board: Board = "X_O _XO __X".parse().unwrap();
        assert_eq!(
            winning_line(&board, &rules(3)),
            Some(WinningLine::new(Player::X, Line::Diagonal))
        );

        let board: Board = "X_O XO_ O_X".parse().unwrap();
        assert_eq!(
            winning_line(&board, &rules(3)),
            Some(WinningLine::new(Player::O, Line::AntiDiagonal))
        );
    }

    #[test]
    fn test_mixed_and_partial_lines_are_not_wins() {
        #[rustfmt::skip]
        let board: Board = "
            X X X O
            O O O X
            X O X _
            _ _ _ _
        ".parse().unwrap();
        assert_eq!(first_winning_line(&board, &rules(4)), None);
    }

    #[test]
    fn test_row_is_found_before_later_column() {
        let board: Board = "XXX X__ X__".parse().unwrap();
        assert_eq!(
            winning_line(&board, &rules(3)),
            Some(WinningLine::new(Player::X, Line::Row(0)))
        );
    }

    #[test]
    fn test_reported_line_is_fully_owned() {
        let boards = ["OXX _O_ X_O", "XOX XO_ XO_", "OOX _XX OOX", "_X_ OXO _X_"];
        for text in boards {
            let board: Board = text.parse().unwrap();
            let line = winning_line(&board, &rules(3)).unwrap();
            assert!(
                line.line
                    .cells(3)
                    .all(|index| board.get(index) == Some(Cell::Mark(line.player))),
                "{}",
                text
            );
        }
    }
}
