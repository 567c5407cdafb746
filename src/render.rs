//! Terminal rendering for events and the month view.

use chrono::{Datelike, NaiveDate, Weekday};
use owo_colors::OwoColorize;

use eventboard_core::{CalendarIndex, DATE_KEY_FORMAT, Event};

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let venue = self
            .place
            .as_ref()
            .and_then(|p| p.name.clone())
            .unwrap_or_default();

        let mut line = format!("{} {}", "•".green(), self.name);
        if !venue.is_empty() {
            line.push_str(&format!(" @ {venue}"));
        }

        format!("{} {}", line, self.start_time.dimmed())
    }
}

/// Render one month: a grid with event days highlighted, then the events
/// of each non-empty day. Every cell is a lookup into the index; days
/// without a bucket render as plain numbers.
pub fn month_view(first: NaiveDate, index: &CalendarIndex) -> String {
    let mut lines = Vec::new();

    lines.push(first.format("%B %Y").to_string().bold().to_string());
    lines.push("Mo Tu We Th Fr Sa Su".dimmed().to_string());

    let mut week = vec!["  ".to_string(); first.weekday().num_days_from_monday() as usize];
    let mut day = first;
    while day.month() == first.month() {
        let number = format!("{:>2}", day.day());
        if index.events_on(day).is_empty() {
            week.push(number);
        } else {
            week.push(number.green().bold().to_string());
        }

        if day.weekday() == Weekday::Sun {
            lines.push(week.join(" "));
            week.clear();
        }
        day = day.succ_opt().unwrap();
    }
    if !week.is_empty() {
        lines.push(week.join(" "));
    }

    let mut day = first;
    while day.month() == first.month() {
        let events = index.events_on(day);
        if !events.is_empty() {
            lines.push(String::new());
            lines.push(day.format(DATE_KEY_FORMAT).to_string().bold().to_string());
            for event in events {
                lines.push(format!("  {}", event.render()));
            }
        }
        day = day.succ_opt().unwrap();
    }

    lines.join("\n") + "\n"
}
