// Study Planner
// Prints the month calendar and upcoming events to the terminal

use anyhow::{bail, Result};
use chrono::Datelike;

use study_planner::models::day_cell::DayCell;
use study_planner::services::calendar::CalendarSnapshot;
use study_planner::services::settings::SettingsService;
use study_planner::utils::date::{canonical_date, parse_canonical_date};
use study_planner::PlannerContext;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Study Planner");

    let settings = SettingsService::default_location().load_or_default();
    let mut ctx = PlannerContext::open(&settings)?;

    if let Some(arg) = std::env::args().nth(1) {
        let Some(target) = parse_canonical_date(&format!("{arg}-01")) else {
            bail!("expected a month as YYYY-MM, got '{arg}'");
        };
        let current = ctx.calendar.reference_month();
        let delta = (target.year() - current.year()) * 12 + target.month() as i32
            - current.month() as i32;
        ctx.calendar.navigate_month(delta);
    }

    let snapshot = ctx.calendar.snapshot();
    print!("{}", render(&snapshot, &ctx.calendar.weekday_headers()));
    Ok(())
}

fn render(snapshot: &CalendarSnapshot, headers: &[&str; 7]) -> String {
    let mut out = format!("{}\n", snapshot.label);

    for header in headers {
        out.push_str(&format!("{header:>6}"));
    }
    out.push('\n');

    for week in snapshot.grid.chunks(7) {
        for cell in week {
            out.push_str(&format!("{:>6}", cell_label(cell)));
        }
        out.push('\n');
    }

    out.push_str("\nUpcoming events\n");
    if snapshot.upcoming.is_empty() {
        out.push_str("  No upcoming events\n");
    }
    for event in &snapshot.upcoming {
        out.push_str(&format!("  {}  {}", canonical_date(event.date), event.title));
        if let Some(time) = event.time() {
            out.push_str(&format!(" at {time}"));
        }
        out.push('\n');
        if let Some(description) = event.description() {
            out.push_str(&format!("      {description}\n"));
        }
    }
    out
}

/// `[3]` marks overshoot days, `*` today, `+n` the number of events.
fn cell_label(cell: &DayCell) -> String {
    let mut label = if cell.is_overshoot() {
        format!("[{}]", cell.date.day())
    } else {
        cell.date.day().to_string()
    };
    if cell.is_today {
        label.push('*');
    }
    if cell.has_events() {
        label.push_str(&format!("+{}", cell.events.len()));
    }
    label
}
