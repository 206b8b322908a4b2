//! Headless match runner: spawns two AI scripts and plays one game to
//! completion without any display.

use clap::Parser;
use pyrat_host::{run_match, RunnerConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Run a headless PyRat match between two AI subprocesses.
#[derive(Parser, Debug)]
#[command(name = "pyrat-headless", version, about)]
struct Args {
    /// Executable implementing the rat side of the protocol.
    rat_ai_script: PathBuf,
    /// Executable implementing the python side of the protocol.
    python_ai_script: PathBuf,

    #[arg(long, default_value_t = 21)]
    width: u8,
    #[arg(long, default_value_t = 15)]
    height: u8,
    #[arg(long, default_value_t = 41)]
    cheese: u16,
    #[arg(long)]
    seed: Option<u64>,
    /// Per-move budget in milliseconds.
    #[arg(long, default_value_t = 100)]
    timeout: u64,
    /// Preprocessing budget in milliseconds.
    #[arg(long, default_value_t = 3000)]
    preprocessing: u64,
    /// Extra delay inserted between turns, in milliseconds (for spectating).
    #[arg(long, default_value_t = 0)]
    delay: u64,
    /// Directory to write a PGN-like replay of the match to.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = RunnerConfig {
        width: args.width,
        height: args.height,
        cheese: args.cheese,
        seed: args.seed,
        max_turns: 300,
        move_timeout: Duration::from_millis(args.timeout),
        preprocessing_timeout: Duration::from_millis(args.preprocessing),
        postprocessing_timeout: Duration::from_secs(1),
    };

    let result = tokio::select! {
        outcome = run_match(&args.rat_ai_script, &args.python_ai_script, &config) => outcome,
        () = wait_for_interrupt() => {
            tracing::warn!("interrupted, aborting match");
            return ExitCode::from(130);
        }
    };

    match result {
        Ok(outcome) => {
            if !outcome.success {
                tracing::error!("match aborted: an AI process crashed");
                return ExitCode::FAILURE;
            }
            tracing::info!(
                winner = ?outcome.winner,
                rat_score = outcome.rat_score,
                python_score = outcome.python_score,
                "match complete"
            );
            if let Some(dir) = &args.log_dir {
                if let Err(err) = write_replay(dir, &outcome) {
                    tracing::warn!(%err, "failed to write replay");
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "match failed");
            ExitCode::FAILURE
        }
    }
}

async fn wait_for_interrupt() {
    let _ = tokio::signal::ctrl_c().await;
}

fn write_replay(dir: &Path, outcome: &pyrat_host::MatchOutcome) -> std::io::Result<()> {
    use pyrat_host::replay::{GameReplay, ReplayMove, ReplayTurn};

    std::fs::create_dir_all(dir)?;
    let mut replay = GameReplay {
        width: outcome.width,
        height: outcome.height,
        walls: outcome.walls.clone(),
        mud: outcome.mud.clone(),
        cheese: outcome.cheese.clone(),
        player1_start: outcome.player1_start,
        player2_start: outcome.player2_start,
        ..Default::default()
    };
    replay
        .tags
        .insert("Winner".to_string(), format!("{:?}", outcome.winner));
    for (rat, python) in &outcome.moves {
        replay.turns.push(ReplayTurn {
            rat: ReplayMove::Move(*rat),
            python: ReplayMove::Move(*python),
            rat_ms: 0,
            python_ms: 0,
            comment: None,
        });
    }
    std::fs::write(dir.join("game.pgn"), replay.to_pgn())
}
