/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog and the UI layer.

/// A game entry in the catalog (only the team logo is used today)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    /// Unique within a session
    pub id: u32,
    /// Image asset identifier (e.g., "49ersLogo")
    pub image_name: String,
}

/// A player's entry on the injury report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjuryRecord {
    pub id: u32,
    /// Player name, never empty
    pub player: String,
    /// Reported status: "Out", "Questionable", "Injured Reserve", ...
    pub status: String,
}

/// Fantasy points scored by a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FantasyPointEntry {
    pub id: u32,
    pub player: String,
    pub points: u32,
}

/// A short game-day tip for fans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDayTip {
    pub id: u32,
    /// Tip text, never empty
    pub content: String,
}

/// One side of the score banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamScore {
    pub team: String,
    pub points: u32,
}

impl TeamScore {
    pub fn new(team: &str, points: u32) -> Self {
        Self {
            team: team.to_string(),
            points,
        }
    }

    /// Banner label, e.g. "49ers: 23"
    pub fn label(&self) -> String {
        format!("{}: {}", self.team, self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_score_label() {
        assert_eq!(TeamScore::new("49ers", 23).label(), "49ers: 23");
        assert_eq!(TeamScore::new("Buccaneers", 20).label(), "Buccaneers: 20");
    }
}
