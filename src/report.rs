//! Text report of a player's projections across systems and years.
//!
//! Output is a pure function of its inputs: the same player and projection
//! set always render to the same bytes.

use crate::{
    cli::types::ProjectionKind,
    error::ProjectionError,
    storage::{Player, ProjectionDatabase, ProjectionFilter, ProjectionRecord},
    Result,
};


/// How a stat column is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    /// Rate stats such as OBP and WHIP: `0.410`
    Rate,
    /// Counting stats, truncated toward zero: ` 32`
    Count,
    /// Earned run average: ` 3.25`
    Era,
    /// Innings pitched: `180.3`
    Innings,
}

impl StatFormat {
    pub fn width(&self) -> usize {
        match self {
            StatFormat::Count => 3,
            StatFormat::Rate | StatFormat::Era | StatFormat::Innings => 5,
        }
    }

    /// Render a value, or a dash run of the column width when absent.
    ///
    /// Non-finite values print as `inf`, `-inf` or `NaN` in every format.
    pub fn render(&self, value: Option<f64>) -> String {
        let width = self.width();
        match value {
            None => "-".repeat(width),
            Some(v) if !v.is_finite() => format!("{:>width$}", v, width = width),
            Some(v) => match self {
                StatFormat::Rate => format!("{:>width$.3}", v, width = width),
                // Adding 0.0 turns -0.0 into 0.0 so -0.5 prints as `0`
                StatFormat::Count => format!("{:>width$.0}", v.trunc() + 0.0, width = width),
                StatFormat::Era => format!("{:>width$.2}", v, width = width),
                StatFormat::Innings => format!("{:>width$.1}", v, width = width),
            },
        }
    }
}

/// One report column: header title, source stat, and format.
#[derive(Debug, Clone, Copy)]
pub struct ReportColumn {
    pub title: &'static str,
    pub stat: &'static str,
    pub format: StatFormat,
}

const fn column(title: &'static str, stat: &'static str, format: StatFormat) -> ReportColumn {
    ReportColumn {
        title,
        stat,
        format,
    }
}

pub const BATTER_COLUMNS: [ReportColumn; 6] = [
    column("OBP", "obp", StatFormat::Rate),
    column("SLG", "slg", StatFormat::Rate),
    column("HR", "hr", StatFormat::Count),
    column("R", "r", StatFormat::Count),
    column("RBI", "rbi", StatFormat::Count),
    column("SB", "sb", StatFormat::Count),
];

pub const PITCHER_COLUMNS: [ReportColumn; 6] = [
    column("W", "w", StatFormat::Count),
    column("SV", "sv", StatFormat::Count),
    column("ERA", "era", StatFormat::Era),
    column("K", "k", StatFormat::Count),
    column("WHIP", "whip", StatFormat::Rate),
    column("IP", "ip", StatFormat::Innings),
];

pub fn columns_for(kind: ProjectionKind) -> &'static [ReportColumn] {
    match kind {
        ProjectionKind::Batter => &BATTER_COLUMNS,
        ProjectionKind::Pitcher => &PITCHER_COLUMNS,
    }
}

/// Title line: `Trout, Mike (id: 1, FG ID: 10155)`
pub fn render_title(player: &Player) -> String {
    format!(
        "{}, {} (id: {}, FG ID: {})",
        player.last_name.as_deref().unwrap_or("-"),
        player.first_name.as_deref().unwrap_or("-"),
        player.id,
        player.ids.fg_id.as_deref().unwrap_or("-")
    )
}

/// Header plus one line per record sorted by (system name, year), or the
/// no-projections message when `records` is empty.
///
/// Fails with `InvalidArgument` if a record is not of `kind`.
pub fn render_section(kind: ProjectionKind, records: &[ProjectionRecord]) -> Result<Vec<String>> {
    if records.is_empty() {
        return Ok(vec![format!("No {} projections", kind)]);
    }

    if let Some(stray) = records.iter().find(|r| r.projection.kind() != kind) {
        return Err(ProjectionError::invalid_argument(format!(
            "{} projection from {} in the {} section",
            stray.projection.kind(),
            stray.system,
            kind
        )));
    }

    let columns = columns_for(kind);
    let mut sorted: Vec<&ProjectionRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let mut header = format!("{:>26} :", "Projection");
    for col in columns {
        header.push_str(&format!(" {:>width$}", col.title, width = col.format.width()));
    }

    let mut lines = vec![header];
    for record in sorted {
        let mut line = format!(
            "{:>20}, {:>4} :",
            record.system.name,
            record.system.year.as_u16()
        );
        for col in columns {
            let value = record.projection.stat(col.stat)?;
            line.push(' ');
            line.push_str(&col.format.render(value));
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Full report: title, blank line, batter section, pitcher section.
pub fn render_report(
    player: &Player,
    batters: &[ProjectionRecord],
    pitchers: &[ProjectionRecord],
) -> Result<String> {
    let mut lines = vec![render_title(player), String::new()];
    lines.extend(render_section(ProjectionKind::Batter, batters)?);
    lines.extend(render_section(ProjectionKind::Pitcher, pitchers)?);

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

impl ProjectionDatabase {
    /// Load every projection of `player` and render the report
    pub fn player_report(&self, player: &Player) -> Result<String> {
        let all = ProjectionFilter::default();
        let batters = self.get_projections(player, ProjectionKind::Batter, &all)?;
        let pitchers = self.get_projections(player, ProjectionKind::Pitcher, &all)?;
        render_report(player, &batters, &pitchers)
    }
}
