use chrono::{DateTime, Utc};
use ketch_models::{HealthStatus, StatusReport};

/// Column-aligned plain-text table.
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<TableRow>,
}

struct TableRow {
    cells: Vec<String>,
    /// Style tags are accepted per the renderer contract, but no style is
    /// defined yet; rows render plain.
    #[allow(dead_code)]
    style: Option<String>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Add a row with an optional style tag.
    pub fn rich(&mut self, cells: Vec<String>, style: Option<String>) {
        self.rows.push(TableRow { cells, style });
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> =
            self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let mut out = String::new();
        out.push_str(&render_line(
            &self
                .headers
                .iter()
                .map(|h| h.to_string())
                .collect::<Vec<_>>(),
            &widths,
        ));
        out.push('\n');
        out.push_str(&render_line(
            &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
            &widths,
        ));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&render_line(&row.cells, &widths));
        }
        out
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        // Pad every column but the last to its width
        if i + 1 < widths.len() {
            let pad = widths[i].saturating_sub(cell.chars().count());
            line.extend(std::iter::repeat_n(' ', pad));
        }
    }
    line
}

/// One table cell for a health report: glyph + label, plus a relative-time
/// suffix when the report carries a timestamp. Labels outside the known set
/// render bare.
pub fn format_health(report: &StatusReport) -> String {
    let label = match &report.health {
        HealthStatus::Ready => "✔ READY".to_string(),
        HealthStatus::Alive => "✔ ALIVE".to_string(),
        HealthStatus::Down => "✖ DOWN".to_string(),
        HealthStatus::Partial => "● PARTIAL".to_string(),
        HealthStatus::Unknown => "? UNKNOWN".to_string(),
        HealthStatus::Other(raw) => raw.clone(),
    };

    match report.generated_at {
        Some(generated_at) => {
            format!("{} - {}", label, humanize_time(generated_at))
        }
        None => label,
    }
}

/// "5 minutes ago" phrasing for table cells.
pub fn humanize_time(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);

    if duration.num_seconds() < 0 {
        "in the future".to_string()
    } else if duration.num_seconds() < 60 {
        "just now".to_string()
    } else if duration.num_minutes() < 60 {
        plural(duration.num_minutes(), "minute")
    } else if duration.num_hours() < 24 {
        plural(duration.num_hours(), "hour")
    } else if duration.num_days() < 30 {
        plural(duration.num_days(), "day")
    } else if duration.num_days() < 365 {
        plural(duration.num_days() / 30, "month")
    } else {
        plural(duration.num_days() / 365, "year")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// The JSON payload shape is not settled yet; emit an empty document until
/// it is.
pub fn print_json_stub() -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = Vec::new();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
