//! Colorful console output for tree builds.
//!
//! Provides a `tracing` layer that formats builder events with colors.
//! Initialized by the recommendation entry points when the `console`
//! feature is enabled.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the console layer as the global subscriber.
///
/// Safe to call multiple times; only the first call has effect, and an
/// already installed subscriber is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "draftforge_solver=info".parse() {
            filter = filter.add_directive(directive);
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(DraftConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats builder events with colors.
pub struct DraftConsoleLayer;

impl<S: Subscriber> Layer<S> for DraftConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("draftforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    team_id: Option<String>,
    rank_goal: Option<String>,
    max_depth: Option<u64>,
    max_branch: Option<u64>,
    filled: Option<u64>,
    duration_ms: Option<u64>,
    nodes_visited: Option<u64>,
    nodes_kept: Option<u64>,
    valid_leaves: Option<u64>,
    pruned_unreachable: Option<u64>,
    fallback_nodes: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        self.record_text(field, s);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "max_depth" => self.max_depth = Some(value),
            "max_branch" => self.max_branch = Some(value),
            "filled" => self.filled = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "nodes_visited" => self.nodes_visited = Some(value),
            "nodes_kept" => self.nodes_kept = Some(value),
            "valid_leaves" => self.valid_leaves = Some(value),
            "pruned_unreachable" => self.pruned_unreachable = Some(value),
            "fallback_nodes" => self.fallback_nodes = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }
}

impl EventVisitor {
    fn record_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "team_id" => self.team_id = Some(value),
            "rank_goal" => self.rank_goal = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("tree_build_start") => format_build_start(v),
        Some("tree_build_end") => format_build_end(v),
        _ => String::new(),
    }
}

fn format_build_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} team ({}), filled slots ({}), depth ({}), branch ({}), ranking ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Draft]".bright_cyan(),
        v.team_id.as_deref().unwrap_or("?").white().bold(),
        v.filled.unwrap_or(0).to_string().yellow(),
        v.max_depth.unwrap_or(0).to_string().yellow(),
        v.max_branch.unwrap_or(0).to_string().yellow(),
        v.rank_goal.as_deref().unwrap_or("candidate_score").bright_magenta()
    )
}

fn format_build_end(v: &EventVisitor) -> String {
    let valid = v.valid_leaves.unwrap_or(0);
    let valid_text = if valid > 0 {
        valid.to_formatted_string(&Locale::en).bright_green().to_string()
    } else {
        valid.to_string().bright_red().to_string()
    };

    format!(
        "{} {} {} tree built: time spent ({}), nodes visited ({}), nodes kept ({}), valid leaves ({}), pruned ({}), fallbacks ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Draft]".bright_cyan(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.nodes_visited
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        v.nodes_kept.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        valid_text,
        v.pruned_unreachable.unwrap_or(0).to_string().yellow(),
        v.fallback_nodes.unwrap_or(0).to_string().yellow()
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:5}.{:03}", d.as_secs() % 100_000, d.subsec_millis()))
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.2}s", ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_format() {
        assert_eq!(format_duration_ms(15), "15ms");
        assert_eq!(format_duration_ms(2500), "2.50s");
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let visitor = EventVisitor {
            event: Some("candidate".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor).is_empty());
    }
}
