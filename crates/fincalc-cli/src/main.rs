mod commands;
mod input;
mod output;
mod store;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::history::HistoryArgs;
use commands::invest::{GoalArgs, SipArgs};
use commands::loan::{EmiArgs, PayoffArgs};
use commands::retire::{FireArgs, InflationArgs};
use commands::score::ScoreArgs;

/// Personal-finance calculators with decimal precision
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Personal-finance calculators with decimal precision",
    long_about = "A CLI for the fincalc engines: loan EMI and amortisation schedules, \
                  accelerated-payoff what-ifs, recurring-investment growth, goal seek, \
                  retirement corpus sizing, inflation projection, and an indicative \
                  credit-score estimate."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Append the result to a saved-calculation history file
    #[arg(long, global = true, value_name = "FILE")]
    save: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Loan EMI with full amortisation schedule
    Emi(EmiArgs),
    /// Accelerated-payoff what-if (extra payment and/or lump sum)
    Payoff(PayoffArgs),
    /// Future value of a recurring investment
    Sip(SipArgs),
    /// Required contribution to reach a target corpus
    Goal(GoalArgs),
    /// Retirement corpus sizing from expenses, inflation, and SWR
    Fire(FireArgs),
    /// Project a value forward under inflation (or deflate back)
    Inflation(InflationArgs),
    /// Indicative credit-score estimate (not a bureau score)
    Score(ScoreArgs),
    /// List or prune saved calculations
    History(HistoryArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let (name, result): (&str, Result<serde_json::Value, Box<dyn std::error::Error>>) =
        match cli.command {
            Commands::Emi(args) => ("emi", commands::loan::run_emi(args)),
            Commands::Payoff(args) => ("payoff", commands::loan::run_payoff(args)),
            Commands::Sip(args) => ("sip", commands::invest::run_sip(args)),
            Commands::Goal(args) => ("goal", commands::invest::run_goal(args)),
            Commands::Fire(args) => ("fire", commands::retire::run_fire(args)),
            Commands::Inflation(args) => ("inflation", commands::retire::run_inflation(args)),
            Commands::Score(args) => ("score", commands::score::run_score(args)),
            Commands::History(args) => ("history", commands::history::run_history(args)),
            Commands::Version => {
                println!("fincalc {}", env!("CARGO_PKG_VERSION"));
                return;
            }
        };

    match result {
        Ok(value) => {
            if let Some(ref path) = cli.save {
                if name != "history" {
                    if let Err(e) = store::save_calculation(path, name, &value) {
                        eprintln!("{}: {}", "warning".yellow().bold(), e);
                    }
                }
            }
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
