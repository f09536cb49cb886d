use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ Verbosity, InfoLevel };
use log::{debug, info };

use two_sums::scenarios::{self, Case, Scenario, REFERENCE};
use two_sums::{two_sum, TwoSumError};

#[derive(Parser)]
#[command(name = "two-sums")]
#[command(about = "Find two values in a list that add up to a target")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the indices of the first pair summing to the target
    Find {
        #[arg(short, long, allow_negative_numbers = true)]
        target: i32,

        #[arg(allow_negative_numbers = true)]
        nums: Vec<i32>,
    },

    /// Run the built-in scenarios and report whether they all pass
    Check {
        /// Extra case to run after the built-in ones, e.g. `2,7,11,15:9=0,1` or `1,2:9=none`
        #[arg(short, long = "case", allow_hyphen_values = true)]
        cases: Vec<Case>,
    },
}

fn main() -> Result<(), TwoSumError> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match &cli.command {
        Commands::Find { target, nums } => {
            debug!("searching {} values for target {}", nums.len(), target);
            match two_sum(nums, *target) {
                Some((left, right)) => {
                    info!("{} + {} = {}", nums[left], nums[right], target);
                    println!("{} {}", left, right);
                }
                None => {
                    info!("no pair sums to {}", target);
                    println!("no pair found");
                }
            }
        }
        Commands::Check { cases } => {
            let all: Vec<Scenario<'_>> = REFERENCE
                .iter()
                .copied()
                .chain(cases.iter().map(Case::as_scenario))
                .collect();

            let count = scenarios::check_all(&all)?;
            info!("{} scenarios checked", count);
            println!("All test cases pass");
        }
    }

    Ok(())
}
