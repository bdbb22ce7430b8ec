mod demo;
mod logging;
mod numbers;

use std::io::Write;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log output (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what the sequence operations do on a small list of numbers.
    Demo(demo::Demo),
    /// Keep the even (or odd) numbers.
    Filter(numbers::Filter),
    /// Count, sum, minimum, maximum and average of the numbers.
    Stats(numbers::Stats),
    /// Sort the numbers in ascending order.
    Sort(numbers::Sort),
    /// Remove duplicate numbers, keeping the first occurrence.
    Distinct(numbers::Distinct),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(logging::level_filter(cli.verbose, cli.quiet));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Demo(demo) => {
            demo.run(&mut out)?;
        }
        Commands::Filter(filter) => {
            filter.run(&mut out)?;
        }
        Commands::Stats(stats) => {
            stats.run(&mut out)?;
        }
        Commands::Sort(sort) => {
            sort.run(&mut out)?;
        }
        Commands::Distinct(distinct) => {
            distinct.run(&mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
