use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::error::EngineError;
use super::rules::Rules;
use super::search::{SCORE_MAX, SCORE_MIN, solve, with_mark};
use super::types::Player;

/// How the engine picks among moves that share the best score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Each later tie replaces the current pick on a fair coin flip. Later
    /// moves are favored once more than two moves tie.
    CoinFlip,
    /// Every tied move is equally likely.
    #[default]
    Uniform,
    /// Lowest index wins. Deterministic.
    FirstFound,
}

impl TieBreak {
    /// `tie_count` includes the move being considered.
    fn replaces_current(self, tie_count: usize, rng: &mut SessionRng) -> bool {
        match self {
            TieBreak::CoinFlip => rng.coin_flip(),
            TieBreak::Uniform => rng.one_in(tie_count),
            TieBreak::FirstFound => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveChoice {
    pub index: usize,
    pub score: i32,
    /// How many moves shared the winning score.
    pub tied: usize,
}

pub fn choose_move(
    board: &mut Board,
    rules: &Rules,
    player: Player,
    tie_break: TieBreak,
    rng: &mut SessionRng,
) -> Result<MoveChoice, EngineError> {
    rules.check_board(board)?;

    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }

    let mut best: Option<MoveChoice> = None;
    let mut best_score = if player.is_maximizer() { SCORE_MIN } else { SCORE_MAX };

    for index in moves {
        let score = with_mark(board, index, player, |board| {
            solve(board, rules, player.opponent())
        });

        let improves = if player.is_maximizer() {
            score > best_score
        } else {
            score < best_score
        };

        match best.as_mut() {
            Some(choice) if !improves && score == best_score => {
                choice.tied += 1;
                if tie_break.replaces_current(choice.tied, rng) {
                    choice.index = index;
                }
            }
            Some(_) if !improves => {}
            _ => {
                best_score = score;
                best = Some(MoveChoice {
                    index,
                    score,
                    tied: 1,
                });
            }
        }
    }

    best.ok_or(EngineError::NoLegalMoves)
}

/// Best cell for `player` to mark. The board is left unchanged.
pub fn best_move(
    board: &mut Board,
    rules: &Rules,
    player: Player,
    tie_break: TieBreak,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    choose_move(board, rules, player, tie_break, rng).map(|choice| choice.index)
}
