mod render;

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use clap::{Parser, Subcommand};

use eventboard_client::{CachedEventsClient, EventsClient, QueryCache};
use eventboard_core::filter::{past_events, upcoming_events};
use eventboard_core::{CalendarIndex, DATE_KEY_FORMAT, EventsQuery, expand_occurrences};

use crate::render::Render;

const DEFAULT_SERVER: &str = "http://127.0.0.1:8787";

#[derive(Parser)]
#[command(name = "eventboard")]
#[command(about = "Browse a community's events through the eventboard proxy")]
struct Cli {
    /// Base URL of the eventboard server
    #[arg(long, global = true, default_value = DEFAULT_SERVER)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List upcoming events, soonest first
    List {
        /// Window start (YYYY-MM-DD); defaults to today
        #[arg(long)]
        since: Option<String>,

        /// Window end (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,

        /// Maximum number of events to fetch
        #[arg(long)]
        limit: Option<u32>,

        /// Show past events instead, most recent first
        #[arg(long)]
        past: bool,
    },
    /// Render a month as a calendar of event days
    Month {
        /// Month to render (YYYY-MM); defaults to the current month
        month: Option<String>,

        /// Maximum number of events to fetch
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = CachedEventsClient::new(
        EventsClient::new(cli.server.clone()),
        QueryCache::default(),
    );

    match cli.command {
        Commands::List {
            since,
            until,
            limit,
            past,
        } => {
            let now = Utc::now();

            // Upcoming listings default the window start to today so the
            // proxy does not hand back a page of history
            let since = if past {
                since
            } else {
                since.or_else(|| Some(now.date_naive().format(DATE_KEY_FORMAT).to_string()))
            };

            let query = EventsQuery { since, until, limit };
            let response = client.events(&query).await?;
            let events = expand_occurrences(response.data);

            let shown = if past {
                past_events(&events, now)
            } else {
                upcoming_events(&events, now)
            };

            if shown.is_empty() {
                println!("No events found.");
            }
            for event in &shown {
                println!("{}", event.render());
            }
        }
        Commands::Month { month, limit } => {
            let first = match month {
                Some(m) => parse_month(&m)?,
                None => {
                    let today = Utc::now().date_naive();
                    today.with_day(1).unwrap()
                }
            };
            let (since, until) = month_bounds(first);

            let query = EventsQuery {
                since: Some(since.format(DATE_KEY_FORMAT).to_string()),
                until: Some(until.format(DATE_KEY_FORMAT).to_string()),
                limit,
            };
            let response = client.events(&query).await?;
            let events = expand_occurrences(response.data);
            let index = CalendarIndex::build(&events);

            print!("{}", render::month_view(first, &index));
        }
    }

    Ok(())
}

/// Parse YYYY-MM into the first day of that month.
fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid month '{}'. Expected YYYY-MM", s))
}

/// First and last day of the month starting at `first`.
fn month_bounds(first: NaiveDate) -> (NaiveDate, NaiveDate) {
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .unwrap();

    (first, next_month - Duration::days(1))
}
