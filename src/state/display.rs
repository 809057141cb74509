/// Presentation rules that are independent of any widget toolkit.
///
/// The UI layer turns these rows and treatments into actual widgets
/// and colors; everything here can be tested without a renderer.

use super::catalog::StaticCatalog;

/// Injury status that gets the alert treatment
pub const OUT_STATUS: &str = "Out";

/// Visual emphasis of an injury status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTreatment {
    /// Player is out (rendered red)
    Alert,
    /// Any other status (rendered orange)
    Warning,
}

impl StatusTreatment {
    /// Exactly "Out" is an alert, everything else is a warning.
    pub fn for_status(status: &str) -> Self {
        if status == OUT_STATUS {
            StatusTreatment::Alert
        } else {
            StatusTreatment::Warning
        }
    }
}

/// A row on the injury report screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjuryRow {
    pub player: String,
    pub status_line: String,
    pub treatment: StatusTreatment,
}

/// A row on the fantasy points screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FantasyRow {
    pub player: String,
    pub points_line: String,
}

pub fn injury_rows(catalog: &StaticCatalog) -> Vec<InjuryRow> {
    catalog
        .injuries()
        .iter()
        .map(|injury| InjuryRow {
            player: injury.player.clone(),
            status_line: format!("Status: {}", injury.status),
            treatment: StatusTreatment::for_status(&injury.status),
        })
        .collect()
}

/// Rows in catalog order
pub fn fantasy_rows(catalog: &StaticCatalog) -> Vec<FantasyRow> {
    catalog
        .fantasy_points()
        .iter()
        .map(|entry| FantasyRow {
            player: entry.player.clone(),
            points_line: format!("Points: {}", entry.points),
        })
        .collect()
}
