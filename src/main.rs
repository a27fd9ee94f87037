use std::{fs, path::PathBuf};

use anyhow::Context;
use battleship_engine::{
    domain::Failure, init_logging, simulate, Game, GameActor, GameApi, GameConfig, Request,
    Response,
};
use clap::{Parser, Subcommand};
use log::warn;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with board dimensions, roster and first player.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full match between two random fleets and print a JSON summary.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run a JSON array of requests against a fresh game, printing one response per line.
    Script { path: PathBuf },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let game = Game::new(config)?;

    match cli.command {
        Commands::Sim { seed } => {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };
            let mut game = game;
            let summary = simulate(&mut game, &mut rng)?;
            let result = json!({
                "seed": seed,
                "winner": summary.winner,
                "shots": summary.shots,
                "turns": summary.turns,
            });
            println!("{}", serde_json::to_string(&result)?);
        }
        Commands::Script { path } => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading script {}", path.display()))?;
            let entries: Vec<serde_json::Value> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing script {}", path.display()))?;

            let (handle, task) = GameActor::spawn(game);
            for (index, entry) in entries.into_iter().enumerate() {
                let response = match serde_json::from_value::<Request>(entry) {
                    Ok(request) => handle.execute(request).await?,
                    Err(err) => {
                        warn!("script entry {} rejected: {}", index, err);
                        Response::Failed(Failure::bad_request(err.to_string()))
                    }
                };
                println!("{}", serde_json::to_string(&response)?);
            }
            drop(handle);
            let game = task.await?;
            println!("{}", serde_json::to_string(&game.status())?);
        }
    }
    Ok(())
}
