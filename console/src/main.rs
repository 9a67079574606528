mod human;
mod render;

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use common::config::{ConfigError, ConfigManager, FileContentConfigProvider, GameConfig, GameMode, PlayerKind, Validate};
use common::games::SessionRng;
use common::games::tictactoe::{EngineMoveSource, GameError, MoveSource, TicTacToeGameState, TicTacToeSession, TieBreak};
use common::{log, logger};
use human::{SharedInput, StdinMoveSource, read_line};
use render::ConsoleObserver;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Two humans at one keyboard
    Pvp,
    /// Engine plays X
    EngineFirst,
    /// Engine plays O
    EngineSecond,
    /// Engine on both sides
    Eve,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::EngineFirst => GameMode::EngineFirst,
            ModeArg::EngineSecond => GameMode::EngineSecond,
            ModeArg::Eve => GameMode::EngineVsEngine,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TieBreakArg {
    CoinFlip,
    Uniform,
    FirstFound,
}

impl From<TieBreakArg> for TieBreak {
    fn from(tie_break: TieBreakArg) -> Self {
        match tie_break {
            TieBreakArg::CoinFlip => TieBreak::CoinFlip,
            TieBreakArg::Uniform => TieBreak::Uniform,
            TieBreakArg::FirstFound => TieBreak::FirstFound,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a minimax engine")]
struct Args {
    /// YAML config; flags below override it
    #[arg(long, default_value = "tictactoe.yaml")]
    config: PathBuf,

    /// Board width (3 or 4)
    #[arg(long)]
    width: Option<usize>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    tie_break: Option<TieBreakArg>,

    /// Engine seed, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Delay before each engine move, in milliseconds
    #[arg(long)]
    engine_delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Play a single game without asking for a rematch
    #[arg(long)]
    once: bool,
}

impl Args {
    fn apply_to(&self, config: &mut GameConfig) {
        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(mode) = self.mode {
            config.set_mode(mode.into());
        }
        if let Some(tie_break) = self.tie_break {
            config.tie_break = tie_break.into();
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(delay) = self.engine_delay_ms {
            config.engine_delay_ms = delay;
        }
    }
}

fn load_config(args: &Args) -> Result<GameConfig, ConfigError> {
    let manager: ConfigManager<FileContentConfigProvider, GameConfig> = ConfigManager::from_yaml_file(&args.config);
    let mut config = manager.get_config()?;
    args.apply_to(&mut config);
    config.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}

fn make_player<R: io::BufRead + 'static>(
    kind: PlayerKind,
    config: &GameConfig,
    seed: Option<u64>,
    input: &SharedInput<R>,
) -> Box<dyn MoveSource> {
    match kind {
        PlayerKind::Human => Box::new(StdinMoveSource::new(input.clone(), io::stdout())),
        PlayerKind::Engine => {
            let engine = EngineMoveSource::new(config.tie_break, SessionRng::from_seed_or_random(seed));
            log!("Engine seeded with {}", engine.seed());
            Box::new(engine)
        }
    }
}

fn ask_rematch<R: io::BufRead>(input: &SharedInput<R>) -> Result<bool, GameError> {
    print!("Play again? [y/N]: ");
    io::stdout().flush().map_err(|e| GameError::Input(e.to_string()))?;
    Ok(read_line(input)?.is_some_and(|answer| answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args)?;
    let rules = config.rules()?;
    log!(
        "Starting {}x{} game, mode {:?}, tie-break {:?}",
        rules.width(),
        rules.width(),
        config.mode(),
        config.tie_break
    );

    let input: SharedInput<_> = Rc::new(RefCell::new(io::stdin().lock()));
    // With a fixed seed, O's engine runs on seed + 1.
    let mut player_x = make_player(config.player_x, &config, config.seed, &input);
    let mut player_o = make_player(config.player_o, &config, config.seed.map(|seed| seed.wrapping_add(1)), &input);
    let mut observer = ConsoleObserver::new(io::stdout(), Duration::from_millis(config.engine_delay_ms));

    loop {
        let mut game = TicTacToeGameState::new(rules);
        observer.show_start(&game);

        match TicTacToeSession::run(&mut game, player_x.as_mut(), player_o.as_mut(), &mut observer) {
            Ok(_) => {}
            Err(GameError::Input(reason)) => {
                log!("Stopping: {}", reason);
                break;
            }
            Err(e) => return Err(e.into()),
        }

        if args.once || !ask_rematch(&input)? {
            break;
        }
    }

    Ok(())
}
