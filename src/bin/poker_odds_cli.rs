// src/bin/poker_odds_cli.rs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use poker_odds::api::{self, ApiError, EquityRequest, EquityResponse, EvaluateRequest};
use poker_odds::domain::hand::Street;
use poker_odds::engine::EquityConfig;
use poker_odds::infra::{deal_random, logging, DeterministicRng, RandomDeal, SystemRng};

#[derive(Parser, Debug)]
#[command(name = "poker_odds_cli", about = "Exact Texas Hold'em hand ranking and win probabilities")]
struct Cli {
    /// -v: info, -vv: debug, -vvv: trace.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Печатать результат как JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Лучшая рука из карманных карт и борда.
    Eval {
        #[arg(long, num_args = 2, required = true)]
        hole: Vec<String>,
        #[arg(long, num_args = 0..=5)]
        board: Vec<String>,
    },

    /// Точные вероятности победы для заданных рук.
    Equity {
        /// Рука игрока через запятую, например `AS,AH`. Повторять для каждого игрока.
        #[arg(long = "player", required = true)]
        players: Vec<String>,
        #[arg(long, num_args = 0..=5)]
        board: Vec<String>,
        #[arg(long, num_args = 0..)]
        dropped: Vec<String>,
        #[command(flatten)]
        run: RunArgs,
    },

    /// Раздать случайные руки и посчитать вероятности.
    Random {
        #[arg(long, default_value_t = 2)]
        players: usize,
        #[arg(long, value_enum, default_value_t = StreetArg::Flop)]
        street: StreetArg,
        /// Seed для воспроизводимой раздачи.
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        run: RunArgs,
    },
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// JSON-файл с `EquityConfig` (любое подмножество полей).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Перебирать в одном потоке.
    #[arg(long)]
    sequential: bool,
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StreetArg {
    Preflop,
    Flop,
    Turn,
    River,
}

impl From<StreetArg> for Street {
    fn from(s: StreetArg) -> Street {
        match s {
            StreetArg::Preflop => Street::Preflop,
            StreetArg::Flop => Street::Flop,
            StreetArg::Turn => Street::Turn,
            StreetArg::River => Street::River,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    // Логгер мог быть уже поставлен — это не ошибка для CLI.
    let _ = logging::init(logging::level_from_verbosity(cli.verbose));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Eval { hole, board } => {
            let req = EvaluateRequest {
                hole: hole.clone(),
                board: board.clone(),
            };
            let resp = api::evaluate(&req)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&resp)?);
            } else {
                println!("{} ({})", resp.description, resp.cards.join(" "));
                println!("key: {} {:?}", resp.code, resp.tie_break);
            }
        }

        Command::Equity {
            players,
            board,
            dropped,
            run,
        } => {
            let req = EquityRequest {
                players: players.iter().map(|p| split_hole(p)).collect(),
                board: board.clone(),
                dropped: dropped.clone(),
            };
            let resp = api::equity(&req, &load_config(run)?)?;
            print_equity(&resp, cli.json)?;
        }

        Command::Random {
            players,
            street,
            seed,
            run,
        } => {
            let n_board = Street::from(*street).n_revealed();
            let deal = match seed {
                Some(seed) => deal_random(*players, n_board, &mut DeterministicRng::from_seed(*seed)),
                None => deal_random(*players, n_board, &mut SystemRng),
            }
            .ok_or_else(|| ApiError::BadRequest(format!("cannot deal {players} players")))?;

            log::info!("dealt {} players on the {}", deal.players.len(), Street::from(*street));
            let resp = api::equity(&to_request(&deal), &load_config(run)?)?;
            print_equity(&resp, cli.json)?;
        }
    }
    Ok(())
}

fn split_hole(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn to_request(deal: &RandomDeal) -> EquityRequest {
    EquityRequest {
        players: deal
            .players
            .iter()
            .map(|hole| hole.iter().map(ToString::to_string).collect())
            .collect(),
        board: deal.board.iter().map(ToString::to_string).collect(),
        dropped: Vec::new(),
    }
}

/// Конфиг из файла (если указан), поверх — флаги командной строки.
fn load_config(run: &RunArgs) -> Result<EquityConfig, Box<dyn std::error::Error>> {
    let mut config = match &run.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => EquityConfig::default(),
    };
    if run.sequential {
        config.parallel = false;
    }
    if run.threads.is_some() {
        config.threads = run.threads;
    }
    log::debug!("equity config: {:?}", config);
    Ok(config)
}

fn print_equity(resp: &EquityResponse, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(resp)?);
        return Ok(());
    }
    println!("street: {} | boards enumerated: {}", resp.street, resp.boards);
    for (i, p) in resp.players.iter().enumerate() {
        println!(
            "  player {} [{}]: {:>7.3}%  (wins {}, ties {})",
            i + 1,
            p.hole.join(" "),
            p.equity * 100.0,
            p.wins,
            p.ties
        );
    }
    Ok(())
}
