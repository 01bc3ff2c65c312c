use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use travelog::analytics::{self, StatisticsReport};
use travelog::calendar;
use travelog::config::Config;
use travelog::ledger::{self, RandomIdGenerator, VisitRequest};
use travelog::models::{CountryDirectory, CountryTable, VisitId};
use travelog::service::LedgerService;
use travelog::storage::JsonFileStore;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

#[derive(Parser)]
#[command(name = "travelog")]
#[command(about = "Record which countries you were in, day by day", long_about = None)]
struct Cli {
    /// Ledger file (overrides TRAVELOG_LEDGER_PATH)
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    /// Country table file (overrides TRAVELOG_COUNTRIES_PATH)
    #[arg(long, global = true)]
    countries: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a country for one day or an inclusive range of days
    Add {
        /// Country code, e.g. JP
        country: String,
        /// First day (YYYY-MM-DD)
        start: NaiveDate,
        /// Last day (YYYY-MM-DD), defaults to the first day
        end: Option<NaiveDate>,
    },
    /// Remove a visit by id
    Remove { id: String },
    /// Show the visits recorded on one day
    Day { date: NaiveDate },
    /// Show a month as a calendar grid with visit counts
    Month {
        year: i32,
        /// Month number, 1-12
        month: u32,
    },
    /// Headline statistics and the most visited countries
    Stats {
        #[arg(long)]
        year: Option<i32>,
        /// Ranking length, 0 for all
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Countries ordered by visit count
    Ranking {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, default_value_t = 0)]
        limit: usize,
        /// Least visited first
        #[arg(long)]
        least: bool,
    },
    /// Per-month visit and country counts for a year
    Breakdown {
        year: i32,
        #[arg(long)]
        json: bool,
    },
    /// Search the country table by name or code
    Countries { query: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("travelog=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(path) = cli.ledger {
        config.ledger.path = path;
    }
    if let Some(path) = cli.countries {
        config.countries.path = Some(path);
    }

    let countries = match &config.countries.path {
        Some(path) => CountryTable::from_json_file(path)?,
        None => CountryTable::default(),
    };

    info!("Using ledger {}", config.ledger.path.display());
    let service = LedgerService::new(
        Arc::new(JsonFileStore::new(config.ledger.path.clone())),
        Arc::new(RandomIdGenerator),
    );

    match cli.command {
        Commands::Add {
            country,
            start,
            end,
        } => {
            let request = VisitRequest {
                country_code: Some(country.to_uppercase()),
                start: Some(start),
                end,
            };
            let added = service.add_visits(&request).await?;
            for visit in &added {
                println!(
                    "✓ {}  {}  {}",
                    visit.date,
                    countries.display_name(&visit.country_code),
                    visit.id
                );
            }
        }
        Commands::Remove { id } => {
            if service.remove_visit(&VisitId::new(id.clone())).await? {
                println!("✓ Removed visit {}", id);
            } else {
                println!("⚠ No visit with id {}", id);
            }
        }
        Commands::Day { date } => {
            let visits = service.snapshot().await?;
            let on_day = ledger::visits_for_date(date, &visits);
            if on_day.is_empty() {
                println!("{}: no visits", date);
            }
            for visit in on_day {
                println!(
                    "{}  {:<24} {}",
                    date,
                    countries.display_name(&visit.country_code),
                    visit.id
                );
            }
        }
        Commands::Month { year, month } => {
            if !(1..=12).contains(&month) {
                bail!("month must be between 1 and 12, got {}", month);
            }
            let visits = service.snapshot().await?;
            let weeks = calendar::month_weeks(year, month - 1)
                .with_context(|| format!("no calendar for {}-{:02}", year, month))?;

            println!("{} {}", MONTH_NAMES[(month - 1) as usize], year);
            println!(" Sun   Mon   Tue   Wed   Thu   Fri   Sat");
            for week in weeks {
                let row: Vec<String> = week
                    .iter()
                    .map(|cell| match cell {
                        Some(day) => {
                            let count = ledger::visits_for_date(*day, &visits).len();
                            let marks = "*".repeat(count);
                            format!("{:>3}{:<3}", chrono::Datelike::day(day), marks)
                        }
                        None => "      ".to_string(),
                    })
                    .collect();
                println!("{}", row.join(""));
            }
        }
        Commands::Stats { year, limit, json } => {
            let visits = service.snapshot().await?;
            let limit = limit.unwrap_or(config.report.ranking_limit);
            let report = StatisticsReport::build(&visits, year, limit);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report, &countries);
            }
        }
        Commands::Ranking { year, limit, least } => {
            let mut visits = service.snapshot().await?;
            if let Some(year) = year {
                visits = ledger::visits_in_year(&visits, year);
            }
            let ranking = if least {
                analytics::least_visited_countries(&visits, limit)
            } else {
                analytics::most_visited_countries(&visits, limit)
            };
            for (idx, entry) in ranking.iter().enumerate() {
                println!(
                    "{:>3}. {:<24} {}",
                    idx + 1,
                    countries.display_name(&entry.country_code),
                    entry.count
                );
            }
        }
        Commands::Breakdown { year, json } => {
            let visits = service.snapshot().await?;
            let breakdown = analytics::monthly_breakdown(&visits, year);

            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                println!("{:<10} {:>7} {:>10}", "Month", "Visits", "Countries");
                println!("{}", "-".repeat(29));
                for stats in breakdown {
                    println!(
                        "{:<10} {:>7} {:>10}",
                        MONTH_NAMES[stats.month as usize],
                        stats.visit_count,
                        stats.unique_countries
                    );
                }
            }
        }
        Commands::Countries { query } => {
            if countries.is_empty() {
                bail!("no country table configured, set TRAVELOG_COUNTRIES_PATH or --countries");
            }
            for country in countries.search(&query).into_iter().take(10) {
                println!("{}  {}", country.code, country.name);
            }
        }
    }

    Ok(())
}

fn print_report(report: &StatisticsReport, countries: &dyn CountryDirectory) {
    match report.year {
        Some(year) => println!("Statistics ({})", year),
        None => println!("Statistics"),
    }

    if report.is_empty() {
        println!("No visits recorded yet");
        return;
    }

    let plural = |n: usize, one: &'static str, many: &'static str| if n == 1 { one } else { many };
    println!(
        "  Countries visited: {} {}",
        report.total_countries,
        plural(report.total_countries, "country", "countries")
    );
    println!(
        "  Total visits:      {} {}",
        report.total_visits,
        plural(report.total_visits, "visit", "visits")
    );
    println!(
        "  Average:           {:.1} visits per country",
        report.average_visits_per_country
    );

    println!();
    println!("Most visited countries");
    for entry in &report.most_visited {
        println!(
            "{:>3}. {:<24} {} {}",
            entry.rank,
            countries.display_name(&entry.country_code),
            entry.count,
            plural(entry.count, "visit", "visits")
        );
    }
}
