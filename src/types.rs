use std::collections::BTreeMap;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Health of one service as reported by the checker system.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Corrupt,
    Mumble,
    Down,
    Error,
    /// Any status string this client does not recognize. Rendered without a
    /// status color rather than rejected.
    #[serde(other)]
    Unknown,
}

impl ServiceStatus {
    /// Lowercase wire name, as it appears in the legend.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Ok => "ok",
            ServiceStatus::Corrupt => "corrupt",
            ServiceStatus::Mumble => "mumble",
            ServiceStatus::Down => "down",
            ServiceStatus::Error => "error",
            ServiceStatus::Unknown => "unknown",
        }
    }
}

/// Per-service score components for one team.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ServicePoints {
    pub sla_pts: f64,
    pub atk_pts: f64,
    pub def_pts: f64,
}

/// One team's standing: overall score plus per-service points and statuses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub ip_addr: String,
    pub overall_score: f64,
    pub last_pts_update: f64,
    pub points: BTreeMap<String, ServicePoints>,
    pub service_status: BTreeMap<String, ServiceStatus>,
}

/// Full scoreboard state for one round, as served by `/api/getStats`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    #[serde(rename = "roundNum")]
    pub round_num: u32,
    #[serde(rename = "flagLifetime")]
    pub flag_lifetime: u32,
    pub teams: Vec<Team>,
}

impl Snapshot {
    /// Check the shape invariants the board relies on: at least one team, and
    /// every team carrying the same service keys in both `points` and
    /// `service_status`.
    pub fn validate(&self) -> Result<()> {
        let Some(first) = self.teams.first() else {
            bail!("snapshot has no teams");
        };
        let services: Vec<&String> = first.points.keys().collect();
        for team in &self.teams {
            let points: Vec<&String> = team.points.keys().collect();
            if points != services {
                bail!(
                    "team {:?} has services {:?} in points, expected {:?}",
                    team.name,
                    points,
                    services
                );
            }
            let statuses: Vec<&String> = team.service_status.keys().collect();
            if statuses != services {
                bail!(
                    "team {:?} has services {:?} in service_status, expected {:?}",
                    team.name,
                    statuses,
                    services
                );
            }
        }
        Ok(())
    }

    /// Service column names in display order (taken from the first team).
    pub fn service_names(&self) -> Vec<String> {
        self.teams
            .first()
            .map(|t| t.points.keys().cloned().collect())
            .unwrap_or_default()
    }
}
