use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use train_finder::cli::{QueryAnswers, run_query};
use train_finder::config::{DEFAULT_DATA_PATH, DEFAULT_LISTEN_ADDR};
use train_finder::store::RecordStore;
use train_finder::web::{AppState, serve};
use train_finder::{FinderConfig, Result};

#[derive(Parser, Debug)]
#[command(
    name = "train-finder",
    version,
    about = "Find the best scheduled trains between two stations"
)]
struct Args {
    /// Timetable JSON file
    #[arg(long, global = true, env = "TRAIN_FINDER_DATA", default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one query, prompting for anything not given as a flag
    Query {
        /// Departure station id
        #[arg(long)]
        departure: Option<String>,

        /// Arrival station id
        #[arg(long)]
        arrival: Option<String>,

        /// price, arrival-time or departure-time
        #[arg(long)]
        criteria: Option<String>,

        /// Number of trains to print
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Serve queries over HTTP
    Serve {
        /// Listen address
        #[arg(long, env = "TRAIN_FINDER_ADDR", default_value_t = DEFAULT_LISTEN_ADDR)]
        addr: SocketAddr,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = FinderConfig::default().with_data_path(args.data);

    match args.command.unwrap_or(Command::Query {
        departure: None,
        arrival: None,
        criteria: None,
        limit: None,
    }) {
        Command::Query {
            departure,
            arrival,
            criteria,
            limit,
        } => {
            init_tracing("warn");
            let answers = QueryAnswers {
                departure,
                arrival,
                criteria,
                limit,
            };
            run_query(io::stdin().lock(), io::stdout().lock(), answers, &config)
        }
        Command::Serve { addr } => {
            init_tracing("info");
            let config = config.with_listen_addr(addr);
            let store = RecordStore::load_file(&config.data_path)?;
            let state = AppState::new(store, config.query);

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(serve(config.listen_addr, state))?;
            Ok(())
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` or `default` when unset.
fn init_tracing(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
