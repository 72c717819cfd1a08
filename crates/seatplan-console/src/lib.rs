//! Colorful console output for seatplan runs.
//!
//! Provides a custom `tracing` layer that formats planning events.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (planning and apply start/end)
//! - **WARN**: Residual conflicts, failed applies
//! - **DEBUG**: Unseated guests
//! - **TRACE**: Individual placements

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlanConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "{} {}",
        "seatplan".bright_cyan().bold(),
        format!("v{VERSION} - seating optimizer").bright_white()
    );
    let _ = stdout.flush();
}

/// A tracing layer that formats seatplan events with colors.
pub struct PlanConsoleLayer;

impl<S: Subscriber> Layer<S> for PlanConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("seatplan") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    guest_id: Option<String>,
    table_id: Option<String>,
    seating_chart_id: Option<String>,
    error: Option<String>,
    guest_count: Option<u64>,
    table_count: Option<u64>,
    seat_count: Option<u64>,
    seated: Option<u64>,
    unseated: Option<u64>,
    conflicts: Option<u64>,
    preference_matches: Option<u64>,
    rows: Option<u64>,
    score: Option<u64>,
    duration_ms: Option<u64>,
    average: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "guest_id" => self.guest_id = Some(s),
            "table_id" => self.table_id = Some(s),
            "seating_chart_id" => self.seating_chart_id = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "guest_count" => self.guest_count = Some(value),
            "table_count" => self.table_count = Some(value),
            "seat_count" => self.seat_count = Some(value),
            "seated" => self.seated = Some(value),
            "unseated" => self.unseated = Some(value),
            "conflicts" => self.conflicts = Some(value),
            "preference_matches" => self.preference_matches = Some(value),
            "rows" => self.rows = Some(value),
            "score" => self.score = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "average" {
            self.average = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "guest_id" => self.guest_id = Some(value.to_string()),
            "table_id" => self.table_id = Some(value.to_string()),
            "seating_chart_id" => self.seating_chart_id = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "plan_start" => format_plan_start(v),
        "plan_end" => format_plan_end(v),
        "conflicts_found" => format_conflicts(v),
        "apply_start" => format_apply_start(v),
        "apply_end" => format_apply_end(v),
        "apply_failed" => format_apply_failed(v),
        "guest_unseated" => format_unseated(v),
        "guest_placed" if level == Level::TRACE => format_placed(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_plan_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Planning │ {} guests │ {} tables │ {} seats",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.guest_count).bright_yellow(),
        count(v.table_count).bright_yellow(),
        count(v.seat_count).bright_yellow(),
    )
}

fn format_plan_end(v: &EventVisitor) -> String {
    let unseated = v.unseated.unwrap_or(0);
    let unseated_text = if unseated == 0 {
        "all seated".bright_green().to_string()
    } else {
        let text = format!("{} unseated", count(v.unseated));
        text.bright_red().to_string()
    };

    format!(
        "{} {} Planning complete │ {} seated │ {} │ {} preference matches │ avg {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.seated).white().bold(),
        unseated_text,
        count(v.preference_matches).bright_magenta(),
        format_average(v.average.unwrap_or(0.0)),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_conflicts(v: &EventVisitor) -> String {
    format!(
        "{} {} {} conflicts in seating",
        format_elapsed(),
        "⚠".bright_yellow().bold(),
        count(v.conflicts).bright_red().bold(),
    )
}

fn format_apply_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Applying to chart {} │ {} rows",
        format_elapsed(),
        "▶".bright_blue(),
        v.seating_chart_id.as_deref().unwrap_or("?").white().bold(),
        count(v.rows).bright_yellow(),
    )
}

fn format_apply_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Applied {} rows to chart {}",
        format_elapsed(),
        "◀".bright_blue(),
        count(v.rows).bright_green(),
        v.seating_chart_id.as_deref().unwrap_or("?").white().bold(),
    )
}

fn format_apply_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} Apply to chart {} failed: {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        v.seating_chart_id.as_deref().unwrap_or("?").white().bold(),
        v.error.as_deref().unwrap_or("unknown error").bright_red(),
    )
}

fn format_unseated(v: &EventVisitor) -> String {
    format!(
        "{} {} No table for guest {}",
        format_elapsed(),
        "✗".bright_red(),
        v.guest_id.as_deref().unwrap_or("?").bright_black(),
    )
}

fn format_placed(v: &EventVisitor) -> String {
    format!(
        "{} {} Guest {:>8} │ Table {:>8} │ {}",
        format_elapsed(),
        "✓".bright_green(),
        v.guest_id.as_deref().unwrap_or("?").bright_black(),
        v.table_id.as_deref().unwrap_or("?").bright_black(),
        format_score(v.score.unwrap_or(0)),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.2}s", ms as f64 / 1000.0)
    }
}

fn format_score(score: u64) -> String {
    let text = score.to_string();
    if score >= 70 {
        text.bright_green().to_string()
    } else if score >= 40 {
        text.white().to_string()
    } else {
        text.bright_red().to_string()
    }
}

fn format_average(average: f64) -> String {
    let text = format!("{:.1}", average);
    if average >= 70.0 {
        text.bright_green().to_string()
    } else if average >= 40.0 {
        text.white().to_string()
    } else {
        text.bright_red().to_string()
    }
}
