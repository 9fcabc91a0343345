mod cli;
mod logging;

use std::fs;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use itertools::Itertools;
use tracing::info;

use jp_holidays::calendars::{weekday_name, HolidayRule};
use jp_holidays::json::JSON;
use jp_holidays::HolidayCal;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn load_calendar(cli: &Cli) -> Result<HolidayCal> {
    match &cli.rules {
        None => Ok(HolidayCal::new()),
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading rule table {}", path.display()))?;
            let cal = HolidayCal::try_from_json(&json)
                .with_context(|| format!("parsing rule table {}", path.display()))?;
            info!(path = %path.display(), rules = cal.list_rules().len(), "loaded rule table");
            Ok(cal)
        }
    }
}

/// One line per rule: name, title, years in force and the selectors that are set.
fn describe(rule: &HolidayRule) -> String {
    let selectors = [
        rule.month.map(|m| format!("month={m}")),
        rule.date.map(|d| format!("date={d}")),
        rule.date_range.map(|r| format!("days={}..={}", r.begin, r.end)),
        rule.weekday.map(|w| format!("weekday={}", weekday_name(w))),
        rule.logic.map(|l| format!("logic={l}")),
    ];
    let years = rule
        .year_range
        .map_or_else(|| "-".to_string(), |r| format!("{}..={}", r.begin, r.end));
    format!(
        "{}\t{}\t{}\t{}",
        rule.name,
        rule.title,
        years,
        selectors.into_iter().flatten().join(" ")
    )
}

fn run(cli: Cli) -> Result<()> {
    let cal = load_calendar(&cli)?;
    match cli.command {
        Command::Get { date } => {
            println!("{}", cal.get_holiday(&date).as_deref().unwrap_or("-"));
        }
        Command::Year { year, json } => {
            let map = cal.get_holiday_map(year);
            if json {
                println!("{}", map.to_json_pretty()?);
            } else {
                for (date, title) in map.iter() {
                    println!("{}\t{title}", date.format("%Y-%m-%d"));
                }
            }
        }
        Command::Between { start, end } => {
            if start > end {
                bail!("start {start} is after end {end}");
            }
            for (date, title) in cal.holidays_between(&start, &end) {
                println!("{}\t{title}", date.format("%Y-%m-%d"));
            }
        }
        Command::Rules { json } => {
            if json {
                println!("{}", cal.rule_table().to_json_pretty()?);
            } else {
                println!("{}", cal.list_rules().iter().map(describe).join("\n"));
            }
        }
    }
    Ok(())
}
