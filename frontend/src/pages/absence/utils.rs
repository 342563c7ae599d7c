use crate::{api::AbsenceStatistics, state::absence::VacationDays};

pub fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{}", days as i64)
    } else {
        format!("{:.1}", days)
    }
}

fn plural(count: f64) -> &'static str {
    if count == 1.0 {
        ""
    } else {
        "s"
    }
}

/// Plain-language bullet points for the absence summary card.
pub fn summary_lines(stats: &AbsenceStatistics, days: &VacationDays) -> Vec<String> {
    let mut lines = Vec::new();
    if stats.pending_requests > 0 {
        lines.push(format!(
            "You have {} request{} pending approval",
            stats.pending_requests,
            plural(stats.pending_requests as f64)
        ));
    }
    if days.used_days > 0.0 {
        lines.push(format!(
            "You've taken {} day{} off this year",
            format_days(days.used_days),
            plural(days.used_days)
        ));
    }
    if days.allowance_exhausted() {
        lines.push("You've used all your annual leave days for this year".to_string());
    } else {
        lines.push(format!(
            "You have {} day{} remaining for this year",
            format_days(days.remaining_days),
            plural(days.remaining_days)
        ));
    }
    if stats.total_requests == 0 {
        lines.push("You haven't submitted any absence requests yet".to_string());
    }
    lines
}
