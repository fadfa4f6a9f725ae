use crate::models::{BandStatistics, Co2Report};

/// Formats band statistics into the multi-line emissions summary
pub fn format_statistics(stats: &BandStatistics) -> String {
    format!(
        "CO2 data (monthly emissions on tonne C/km\u{00b2}/month):\n     \
         minimal: {}\n     mean: {}\n     max: {}\n     majority: {}",
        stats.min, stats.mean, stats.max, stats.majority
    )
}

/// Formats a lookup result into the text handed back to callers
pub fn format_report(report: &Co2Report) -> String {
    match report {
        Co2Report::Statistics { stats, .. } => format_statistics(stats),
        Co2Report::Unavailable(message) => message.clone(),
    }
}

/// Truncates an ISO 8601 timestamp to its `YYYY-MM` prefix
pub fn year_month(start_datetime: &str) -> String {
    start_datetime.chars().take(7).collect()
}
