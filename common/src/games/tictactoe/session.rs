use crate::games::SessionRng;
use crate::log;
use super::bot_controller::{TieBreak, choose_move};
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::types::{GameStatus, Player};

/// Something that decides the next cell for the side to move. Implementations
/// may block (waiting on a human) but must return a cell index or an error.
pub trait MoveSource {
    fn next_move(&mut self, game: &TicTacToeGameState) -> Result<usize, GameError>;

    fn is_engine(&self) -> bool {
        false
    }
}

pub struct EngineMoveSource {
    tie_break: TieBreak,
    rng: SessionRng,
}

impl EngineMoveSource {
    pub fn new(tie_break: TieBreak, rng: SessionRng) -> Self {
        Self { tie_break, rng }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl MoveSource for EngineMoveSource {
    fn next_move(&mut self, game: &TicTacToeGameState) -> Result<usize, GameError> {
        let mut board = game.board().clone();
        let player = game.current_player();
        let choice = choose_move(&mut board, game.rules(), player, self.tie_break, &mut self.rng)?;
        log!(
            "Engine {} picked cell {} (score {}, {} tied)",
            player,
            choice.index,
            choice.score,
            choice.tied
        );
        Ok(choice.index)
    }

    fn is_engine(&self) -> bool {
        true
    }
}

/// Receives game progress, typically to draw it.
pub trait GameObserver {
    fn on_turn_start(&mut self, _game: &TicTacToeGameState, _is_engine: bool) {}
    fn on_move(&mut self, game: &TicTacToeGameState, index: usize, player: Player);
    fn on_game_over(&mut self, game: &TicTacToeGameState);
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    pub fn run(
        game: &mut TicTacToeGameState,
        player_x: &mut dyn MoveSource,
        player_o: &mut dyn MoveSource,
        observer: &mut dyn GameObserver,
    ) -> Result<GameStatus, GameError> {
        while !game.status().is_over() {
            let player = game.current_player();
            let index = match player {
                Player::X => take_turn(game, player_x, observer)?,
                Player::O => take_turn(game, player_o, observer)?,
            };
            game.place_mark(index)?;
            observer.on_move(game, index, player);
        }

        match game.status() {
            GameStatus::Won(line) => log!(
                "Player {} won after {} moves ({:?})",
                line.player,
                game.move_count(),
                line.line
            ),
            _ => log!("Game ended in a draw"),
        }
        observer.on_game_over(game);

        Ok(game.status())
    }
}

fn take_turn(
    game: &TicTacToeGameState,
    source: &mut dyn MoveSource,
    observer: &mut dyn GameObserver,
) -> Result<usize, GameError> {
    observer.on_turn_start(game, source.is_engine());
    source.next_move(game)
}
