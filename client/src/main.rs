mod config;
mod offline;
mod state;
mod ui;

use std::time::Duration;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, TicTacToeSession};
use common::{log, logger};

use config::{MAX_REPLY_DELAY_MS, get_config_manager};
use offline::run_tictactoe_game;
use state::HELP_TEXT;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// random or optimal; overrides the config file
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Pause before the computer answers; overrides the config file
    #[arg(long)]
    reply_delay_ms: Option<u64>,

    /// Fixed seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager().get_config()?;

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
    } else {
        None
    };
    logger::init_logger(prefix);

    let difficulty = args.difficulty.unwrap_or(config.tictactoe.difficulty);
    let reply_delay_ms = args.reply_delay_ms.unwrap_or(config.tictactoe.reply_delay_ms);
    if reply_delay_ms > MAX_REPLY_DELAY_MS {
        return Err(format!("--reply-delay-ms must not exceed {}", MAX_REPLY_DELAY_MS).into());
    }

    let rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    let session = TicTacToeSession::start_game(difficulty, rng);

    log!("Starting {} game, reply delay {} ms", difficulty, reply_delay_ms);
    println!("{}", HELP_TEXT);

    run_tictactoe_game(session, Duration::from_millis(reply_delay_ms)).await;

    Ok(())
}
