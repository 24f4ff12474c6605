//! Terminal front-end for preflop range charts and practice.
//!
//! `range-drill chart --data strategy_database.json AA KQs t9s`
//! draws the chart; `range-drill quiz --data strategy_database.json AA KQs`
//! runs practice reading answers from stdin. Set `RUST_LOG=debug` for
//! diagnostics.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{debug, error};

use preflop_range_drill::{
    view_adapter, Action, RangeError, Session, SessionConfig, SessionEvent, StrategyTable,
};

/// Preflop range charts and a recall quiz.
#[derive(Debug, Parser)]
#[command(name = "range-drill", version)]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct Common {
    /// Strategy table JSON: `{ hand: { position: [all_in, raise, fold] } }`.
    #[arg(short, long, default_value = "strategy_database.json")]
    data: PathBuf,

    /// Optional session config JSON; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hands to chart, in any case or rank order (e.g. `ako`, `KAs`, `tt`).
    hands: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the chart for the given hands.
    Chart {
        #[command(flatten)]
        common: Common,

        /// Characters per cell.
        #[arg(short = 'w', long, default_value_t = 10)]
        cell_width: usize,

        /// Print the JSON view-model instead of the text grid.
        #[arg(long)]
        json: bool,
    },
    /// Practice the given hands (or the whole table with --full-table).
    Quiz {
        #[command(flatten)]
        common: Common,

        /// Seed for reproducible questions.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Stop after this many answers.
        #[arg(short = 'n', long)]
        questions: Option<u32>,

        /// Draw from every hand in the table when none are given.
        #[arg(long)]
        full_table: bool,
    },
}

fn load_config(common: &Common) -> Result<SessionConfig, RangeError> {
    match &common.config {
        Some(path) => SessionConfig::load(path),
        None => Ok(SessionConfig::default()),
    }
}

fn open_session(common: &Common, config: SessionConfig) -> Result<Session, RangeError> {
    config.validate()?;
    let session = Session::from_load(StrategyTable::load(&common.data), config);
    match session.unavailable_reason() {
        Some(reason) => Err(RangeError::DataUnavailable(reason.to_string())),
        None => Ok(session),
    }
}

fn run_chart(common: Common, cell_width: usize, json: bool) -> Result<(), RangeError> {
    let mut session = open_session(&common, load_config(&common)?)?;
    session.dispatch(SessionEvent::Generate(common.hands))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view_adapter::chart_to_json(session.chart()))?);
    } else {
        print!("{}", session.chart().to_text(cell_width));
    }
    Ok(())
}

fn run_quiz(
    common: Common,
    seed: Option<u64>,
    questions: Option<u32>,
    full_table: bool,
) -> Result<(), RangeError> {
    let mut config = load_config(&common)?;
    config.rng_seed = seed.or(config.rng_seed);
    config.allow_full_table_pool |= full_table;
    let mut session = open_session(&common, config)?;

    if !common.hands.is_empty() {
        session.dispatch(SessionEvent::Generate(common.hands))?;
        print!("{}", session.chart().to_text(10));
        println!();
    }
    session.dispatch(SessionEvent::StartPractice)?;

    println!("Answer with a(ll-in), r(aise) or f(old); q to quit.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if let Some(prompt) = session.prompt() {
            print!("\n{prompt} ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next().transpose()? else { break };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            break;
        }
        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        session.dispatch(SessionEvent::Answer(action))?;
        if let Some(feedback) = session.feedback() {
            println!("{feedback}   Score: {}", session.score_display());
        }
        if questions.is_some_and(|n| session.quiz().score().total >= n) {
            break;
        }
        session.dispatch(SessionEvent::NextQuestion)?;
    }

    session.dispatch(SessionEvent::ExitPractice)?;
    println!("\nFinal score: {}", session.quiz().score());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let opts = Opts::parse();
    debug!("{opts:?}");

    let result = match opts.command {
        Command::Chart { common, cell_width, json } => run_chart(common, cell_width, json),
        Command::Quiz { common, seed, questions, full_table } => {
            run_quiz(common, seed, questions, full_table)
        }
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
