// src/report.rs

//! Formatting of scheduler results for the terminal.
//!
//! The scheduler itself never prints; callers choose a renderer here (or
//! none at all).

use anyhow::Result;

use crate::dag::{PrioritizedTask, Schedule};

/// `PRIORITIZED_TASKS: [a, b, c]`
pub fn render_priority(order: &[PrioritizedTask]) -> String {
    let names: Vec<&str> = order.iter().map(|p| p.name.as_str()).collect();
    format!("PRIORITIZED_TASKS: [{}]", names.join(", "))
}

/// Human-readable report: priority order, placements grouped by tick, then
/// the makespan. With `quiet`, placements are left out.
pub fn render_text(schedule: &Schedule, quiet: bool) -> String {
    let mut lines = vec![render_priority(&schedule.priority_order), String::new()];

    if !quiet && !schedule.placements.is_empty() {
        let mut current_tick = None;
        for placement in &schedule.placements {
            if current_tick != Some(placement.tick) {
                lines.push(format!("{:-^40}", format!(" tick {} ", placement.tick)));
                current_tick = Some(placement.tick);
            }
            lines.push(format!("{}: {}", placement.task, placement.resource));
        }
        lines.push(String::new());
    }

    lines.push(format!("SCHEDULE MAKESPAN: {}", schedule.makespan));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_json(schedule: &Schedule) -> Result<String> {
    Ok(serde_json::to_string_pretty(schedule)?)
}
