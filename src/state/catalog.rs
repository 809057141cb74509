use super::data::{FantasyPointEntry, GameDayTip, GameEntry, InjuryRecord};

/// Image shown next to every player row until real headshots exist
pub const PLAYER_PLACEHOLDER_IMAGE: &str = "player_placeholder";

/// The StaticCatalog holds the sample team data shown by the app.
///
/// Everything is populated once from literals at construction and never
/// mutated afterwards, so enumerating any sequence twice yields the same
/// records in the same order.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    games: Vec<GameEntry>,
    injuries: Vec<InjuryRecord>,
    fantasy_points: Vec<FantasyPointEntry>,
    tips: Vec<GameDayTip>,
}

impl StaticCatalog {
    /// Build the catalog from the built-in sample data
    pub fn new() -> Self {
        // Ids are handed out sequentially across all record kinds
        let mut next_id = 0u32;
        let mut id = || {
            next_id += 1;
            next_id
        };

        let games = vec![GameEntry {
            id: id(),
            image_name: "49ersLogo".to_string(),
        }];

        let injuries = [
            ("Christian McCaffrey", "Out"),
            ("Deebo Samuel", "Questionable"),
            ("Brandon Aiyuk", "Injured Reserve"),
        ]
        .into_iter()
        .map(|(player, status)| InjuryRecord {
            id: id(),
            player: player.to_string(),
            status: status.to_string(),
        })
        .collect();

        let fantasy_points = [
            ("Deebo Samuel", 25),
            ("George Kittle", 30),
            ("Juan Jennings", 15),
        ]
        .into_iter()
        .map(|(player, points)| FantasyPointEntry {
            id: id(),
            player: player.to_string(),
            points,
        })
        .collect();

        let tips = [
            "Arrive early for the best parking.",
            "Map can be found here.",
        ]
        .into_iter()
        .map(|content| GameDayTip {
            id: id(),
            content: content.to_string(),
        })
        .collect();

        let catalog = Self {
            games,
            injuries,
            fantasy_points,
            tips,
        };

        tracing::debug!(
            games = catalog.games.len(),
            injuries = catalog.injuries.len(),
            fantasy_points = catalog.fantasy_points.len(),
            tips = catalog.tips.len(),
            "catalog loaded"
        );

        catalog
    }

    pub fn games(&self) -> &[GameEntry] {
        &self.games
    }

    pub fn injuries(&self) -> &[InjuryRecord] {
        &self.injuries
    }

    /// Fantasy points in insertion order (never sorted by points)
    pub fn fantasy_points(&self) -> &[FantasyPointEntry] {
        &self.fantasy_points
    }

    pub fn tips(&self) -> &[GameDayTip] {
        &self.tips
    }

    /// Image identifier of the team logo shown on the main screen
    pub fn logo(&self) -> Option<&str> {
        self.games.first().map(|game| game.image_name.as_str())
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}
