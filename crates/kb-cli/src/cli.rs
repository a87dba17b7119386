use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kb_almanac::{HolidayOptions, YearRange};
use kb_time::Date;

/// Balinese calendar: Pawukon, Saka and holidays for any Gregorian day.
#[derive(Parser)]
#[command(
    name = "kalender-bali",
    version,
    about = "Balinese Pawukon/Saka calendar with Bali and Indonesian holidays"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Balinese annotation of one day.
    Date(DateArgs),
    /// Combined Balinese and national holiday listing of a year.
    Year(YearArgs),
    /// Per-day annotations of one month.
    Month(MonthArgs),
    /// Official or projected national holiday table of a year.
    National(NationalArgs),
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Day to annotate, `YYYY-MM-DD`.
    pub date: Date,
}

/// Holiday family and year range filters shared by `year` and `month`.
#[derive(clap::Args)]
pub struct FilterArgs {
    /// Hide Balinese holidays.
    #[arg(long)]
    pub no_bali: bool,

    /// Hide national holidays, cuti bersama included.
    #[arg(long)]
    pub no_national: bool,

    /// Hide cuti bersama days.
    #[arg(long)]
    pub no_cuti_bersama: bool,

    /// First navigable year.
    #[arg(long, default_value_t = YearRange::DEFAULT_START)]
    pub first_year: u16,

    /// Last navigable year.
    #[arg(long, default_value_t = YearRange::DEFAULT_END)]
    pub last_year: u16,
}

impl FilterArgs {
    /// Listing options selected by the flags.
    pub fn options(&self) -> Result<HolidayOptions> {
        let range = YearRange::new(self.first_year, self.last_year)
            .context("invalid --first-year/--last-year")?;
        Ok(HolidayOptions::default()
            .with_bali(!self.no_bali)
            .with_national(!self.no_national)
            .with_cuti_bersama(!self.no_cuti_bersama)
            .with_year_range(range))
    }
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Gregorian year.
    pub year: u16,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Gregorian year.
    pub year: u16,

    /// Month number (1-12).
    pub month: u8,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the `national` subcommand.
#[derive(clap::Args)]
pub struct NationalArgs {
    /// Gregorian year.
    pub year: u16,
}
