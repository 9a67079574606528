use serde::{Deserialize, Serialize};

use crate::games::tictactoe::{EngineError, Rules, TieBreak, new_sentinels};
use super::Validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Engine,
}

/// The four line-ups offered when a game starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    PlayerVsPlayer,
    EngineFirst,
    EngineSecond,
    EngineVsEngine,
}

impl GameMode {
    pub fn players(self) -> (PlayerKind, PlayerKind) {
        match self {
            GameMode::PlayerVsPlayer => (PlayerKind::Human, PlayerKind::Human),
            GameMode::EngineFirst => (PlayerKind::Engine, PlayerKind::Human),
            GameMode::EngineSecond => (PlayerKind::Human, PlayerKind::Engine),
            GameMode::EngineVsEngine => (PlayerKind::Engine, PlayerKind::Engine),
        }
    }

    pub fn from_players(player_x: PlayerKind, player_o: PlayerKind) -> Self {
        match (player_x, player_o) {
            (PlayerKind::Human, PlayerKind::Human) => GameMode::PlayerVsPlayer,
            (PlayerKind::Engine, PlayerKind::Human) => GameMode::EngineFirst,
            (PlayerKind::Human, PlayerKind::Engine) => GameMode::EngineSecond,
            (PlayerKind::Engine, PlayerKind::Engine) => GameMode::EngineVsEngine,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: usize,
    pub player_x: PlayerKind,
    pub player_o: PlayerKind,
    pub tie_break: TieBreak,
    /// Fixed engine seed; a fresh one is drawn per game when absent.
    pub seed: Option<u64>,
    /// Pause before each engine move so a human can follow the game.
    pub engine_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 3,
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Engine,
            tie_break: TieBreak::default(),
            seed: None,
            engine_delay_ms: 500,
        }
    }
}

impl GameConfig {
    pub fn mode(&self) -> GameMode {
        GameMode::from_players(self.player_x, self.player_o)
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        (self.player_x, self.player_o) = mode.players();
    }

    pub fn rules(&self) -> Result<Rules, EngineError> {
        Rules::new(self.board_width)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        new_sentinels(self.board_width)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
