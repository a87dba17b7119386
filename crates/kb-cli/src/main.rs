mod cli;
mod logging;
mod output;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use kb_almanac::{calculate_bali_date, holidays_for_year, month_days};
use kb_holidays::{has_official_data, national_holidays};
use tracing::{info, info_span};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command, cli.json) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(command: Command, as_json: bool) -> Result<String> {
    match command {
        Command::Date(args) => {
            let _cmd = info_span!("date", date = %args.date).entered();
            let info = calculate_bali_date(args.date);
            if as_json {
                output::json(&info)
            } else {
                Ok(output::day_report(&info))
            }
        }
        Command::Year(args) => {
            let _cmd = info_span!("year", year = args.year).entered();
            let opts = args.filter.options()?;
            let holidays = holidays_for_year(args.year, &opts)
                .with_context(|| format!("cannot list holidays for {}", args.year))?;
            info!(count = holidays.len(), "holidays listed");
            if as_json {
                output::json(&holidays)
            } else {
                Ok(output::holiday_table(&holidays))
            }
        }
        Command::Month(args) => {
            let _cmd = info_span!("month", year = args.year, month = args.month).entered();
            let opts = args.filter.options()?;
            let days = month_days(args.year, args.month, &opts).with_context(|| {
                format!("cannot build month view for {}-{:02}", args.year, args.month)
            })?;
            if as_json {
                output::json(&days)
            } else {
                Ok(output::month_table(&days))
            }
        }
        Command::National(args) => {
            let _cmd = info_span!("national", year = args.year).entered();
            if !has_official_data(args.year) {
                info!("no official decree on file, showing fixed-date projection");
            }
            let holidays = national_holidays(args.year)
                .with_context(|| format!("cannot list national holidays for {}", args.year))?;
            if as_json {
                output::json(&holidays)
            } else {
                Ok(output::holiday_table(&holidays))
            }
        }
    }
}
