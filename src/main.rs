use anyhow::{Context, Result};
use clap::Parser;
use countdown::{Console, Game, GameConfig, Report, DEFAULT_ROUNDS, DEFAULT_WORDFILE};
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "countdown",
    about = "Play the Countdown letters round in the terminal",
    version
)]
struct Cli {
    /// Wordfile with one word per line
    #[arg(short, long, default_value = DEFAULT_WORDFILE)]
    wordfile: String,

    /// Number of rounds
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,

    /// Seed for drawing letters
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show the best N words after each round
    #[arg(short, long, default_value_t = 0)]
    best: usize,

    /// Use these letters as the board every round, instead of drawing them
    #[arg(long)]
    board: Option<String>,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        GameConfig {
            rounds: cli.rounds,
            wordfile: cli.wordfile,
            seed: cli.seed,
            best: cli.best,
            board: cli.board,
        }
    }
}

fn run() -> Result<()> {
    let config = GameConfig::from(Cli::parse());
    let mut game = Game::from_config(config)?;
    println!("{}", game.wordlist());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let mut report = Report::new(io::stdout());
    game.setup(&mut console, &mut report)
        .context("could not register players")?;
    game.play(&mut console, &mut report)?;

    let leaders: Vec<&str> = game
        .players()
        .leaders()
        .into_iter()
        .map(|player| player.name.as_str())
        .collect();
    if !leaders.is_empty() {
        println!("Winner: {}", leaders.join(", "));
    }
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("countdown=warn")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
