use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use client::{
    run, Autopilot, InputSource, RunOptions, ScriptedInput, Session, Settings, SystemEnv,
    TextRenderer,
};
use game_core::{Difficulty, GameRng};
use leaderboard::{FileStorage, Leaderboard};

#[derive(Parser)]
#[command(name = "pong")]
#[command(about = "Pong with an AI opponent and a top-10 leaderboard")]
struct Args {
    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Leaderboard JSON file (overrides the settings file)
    #[arg(long)]
    leaderboard: Option<PathBuf>,

    /// Seed for serves and AI error; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// AI difficulty, 1 (easiest) to 4
    #[arg(long)]
    difficulty: Option<i32>,

    /// Name recorded for the left player
    #[arg(long)]
    name: Option<String>,

    /// Key event script to replay; without one the autopilot plays
    #[arg(long)]
    script: Option<PathBuf>,

    /// Close the game after this many ticks (0 runs until quit)
    #[arg(long, default_value_t = 3600)]
    max_ticks: u64,

    /// Print a frame every n ticks (0 prints only the last one)
    #[arg(long, default_value_t = 30)]
    render_every: u64,

    /// Run as fast as possible instead of at the tick rate
    #[arg(long)]
    no_sleep: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .level(level)
        .chain(io::stderr())
        .apply()
        .context("failed to set up logging")
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose)?;

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(path) = args.leaderboard {
        settings.leaderboard_path = path;
    }
    if let Some(level) = args.difficulty {
        settings.ai_difficulty = Difficulty::new(level);
    }
    if let Some(name) = args.name {
        settings.player_one = name;
    }

    let mut input: Box<dyn InputSource> = match &args.script {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read script {}", path.display()))?;
            let script = ScriptedInput::parse(&text)
                .with_context(|| format!("in {}", path.display()))?;
            Box::new(script)
        }
        None => Box::new(Autopilot::new()),
    };

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let storage = FileStorage::new(settings.leaderboard_path.clone());
    let leaderboard = Leaderboard::load(Box::new(storage));
    log::debug!("Leaderboard file {}", settings.leaderboard_path.display());

    let options = RunOptions {
        max_ticks: (args.max_ticks > 0).then_some(args.max_ticks),
        render_every: args.render_every,
        paced: !args.no_sleep,
    };

    let mut session = Session::new(settings, leaderboard, rng);
    let mut renderer = TextRenderer::new(io::stdout().lock());
    run(&mut session, input.as_mut(), &mut renderer, &SystemEnv::new(), options)
        .context("failed to draw frame")?;

    log::info!("Exited after {} ticks", session.tick_count());
    Ok(())
}
