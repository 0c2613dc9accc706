use anyhow::{bail, Context, Result};
use ratatui::style::Color;

use crate::ranking::rank_teams;
use crate::sla::{expected_sla, sla_percentage};
use crate::status::{color_for_status, LEGEND_STATUSES};
use crate::types::{ServicePoints, Snapshot, Team};

/// Highlight colors for first, second, and third place.
pub const PLACE_COLORS: [Color; 3] = [
    Color::Rgb(255, 215, 0),   // gold
    Color::Rgb(192, 192, 192), // silver
    Color::Rgb(218, 165, 32),  // goldenrod
];

/// Fixed columns before the per-service columns: rank, team, IP, score.
pub const FIXED_COLUMNS: usize = 4;

/// One board cell: display text plus an optional background color.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub bg: Option<Color>,
}

/// In-memory scoreboard table. Built once from the first snapshot, then
/// updated in place on every later poll. The row and column structure never
/// changes after `build`; row identity is positional (row `i` always shows
/// whichever team currently holds rank `i`).
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub round_label: String,
    pub legend: Vec<Cell>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Build the full board from the first snapshot: round label, uppercased
    /// colored legend, header columns (fixed plus one per service), and one
    /// row per ranked team with the top three places highlighted.
    pub fn build(snapshot: &Snapshot) -> Result<Board> {
        snapshot.validate()?;
        let services = snapshot.service_names();

        let legend = LEGEND_STATUSES
            .iter()
            .map(|s| Cell {
                text: s.as_str().to_uppercase(),
                bg: color_for_status(*s),
            })
            .collect();

        let mut columns: Vec<String> = ["#", "Team", "IP", "Score"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        columns.extend(services.iter().cloned());

        let mut teams = snapshot.teams.clone();
        rank_teams(&mut teams);
        let max_sla = expected_sla(snapshot.round_num, snapshot.flag_lifetime);

        let mut rows = Vec::with_capacity(teams.len());
        for (i, team) in teams.iter().enumerate() {
            let place = PLACE_COLORS.get(i).copied();
            let mut row = vec![
                Cell {
                    text: (i + 1).to_string(),
                    bg: place,
                },
                Cell {
                    text: team.name.clone(),
                    bg: place,
                },
                Cell {
                    text: team.ip_addr.clone(),
                    bg: place,
                },
                Cell {
                    text: team.overall_score.to_string(),
                    bg: place,
                },
            ];
            for service in &services {
                row.push(service_cell(team, service, max_sla)?);
            }
            rows.push(row);
        }

        Ok(Board {
            round_label: format!("Round: {}", snapshot.round_num),
            legend,
            columns,
            rows,
        })
    }

    /// Apply a fresh snapshot to the existing board. Teams are re-ranked and
    /// written positionally: row `i` is overwritten with whichever team now
    /// holds rank `i`. The round label is refreshed; the header, the legend,
    /// and the top-3 highlight backgrounds are left untouched; no rows are
    /// added or removed. Fails if the team count or the service columns no
    /// longer match the structure the board was built with.
    pub fn apply(&mut self, snapshot: &Snapshot) -> Result<()> {
        snapshot.validate()?;
        let services = snapshot.service_names();
        let built = &self.columns[FIXED_COLUMNS..];
        if services != built {
            bail!(
                "service columns changed from {:?} to {:?}",
                built,
                services
            );
        }
        if snapshot.teams.len() != self.rows.len() {
            bail!(
                "snapshot has {} teams, board was built with {}",
                snapshot.teams.len(),
                self.rows.len()
            );
        }

        let mut teams = snapshot.teams.clone();
        rank_teams(&mut teams);
        let max_sla = expected_sla(snapshot.round_num, snapshot.flag_lifetime);

        self.round_label = format!("Round: {}", snapshot.round_num);
        for (row, team) in self.rows.iter_mut().zip(&teams) {
            row[1].text = team.name.clone();
            row[2].text = team.ip_addr.clone();
            row[3].text = team.overall_score.to_string();
            for (j, service) in services.iter().enumerate() {
                row[FIXED_COLUMNS + j] = service_cell(team, service, max_sla)?;
            }
        }
        Ok(())
    }
}

fn service_cell(team: &Team, service: &str, max_sla: u64) -> Result<Cell> {
    let pts = team
        .points
        .get(service)
        .with_context(|| format!("team {:?} has no points for {:?}", team.name, service))?;
    let status = team
        .service_status
        .get(service)
        .with_context(|| format!("team {:?} has no status for {:?}", team.name, service))?;
    Ok(Cell {
        text: service_text(pts, max_sla),
        bg: color_for_status(*status),
    })
}

fn service_text(pts: &ServicePoints, max_sla: u64) -> String {
    let pct = match sla_percentage(pts.sla_pts, max_sla) {
        Some(p) => format!("{p}%"),
        None => "n/a".to_string(),
    };
    format!(
        "SLA percentage: {pct}\nSLA checks: {}\nFlags: +{}/{}",
        pts.sla_pts, pts.atk_pts, pts.def_pts
    )
}
