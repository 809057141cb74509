use super::data::TeamScore;
use super::preferences::{SharedPreferences, LAST_GAME_SCORE_KEY, NEXT_GAME_KEY};

/// View-model of the landing screen: score banner and next game.
pub struct MainViewModel {
    preferences: SharedPreferences,
    pub home: TeamScore,
    pub away: TeamScore,
    /// Short summary stored as the last game score
    pub game_score: String,
    pub next_game: String,
}

impl MainViewModel {
    pub fn new(preferences: SharedPreferences) -> Self {
        Self {
            preferences,
            home: TeamScore::new("49ers", 23),
            away: TeamScore::new("Buccaneers", 20),
            game_score: "SF: 23 || Buccaneers: 20".to_string(),
            next_game: "Next Game: Seattle Seahawks at 49ers".to_string(),
        }
    }

    /// Store the score summary and next game announcement.
    ///
    /// Nothing reads these back yet. Each key is written independently;
    /// a failed write is logged and the other key is still attempted.
    pub fn save_app_data(&self) {
        let entries = [
            (LAST_GAME_SCORE_KEY, &self.game_score),
            (NEXT_GAME_KEY, &self.next_game),
        ];

        let mut saved = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            match self.preferences.set(key, value) {
                Ok(()) => saved.push(key),
                Err(e) => tracing::warn!(key, error = %e, "failed to save app data"),
            }
        }

        tracing::info!(
            saved = ?saved,
            game_score = %self.game_score,
            next_game = %self.next_game,
            "app data saved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::preferences::{
        MemoryPreferenceStore, PreferenceError, PreferenceStore, SCHEDULE_IMAGE_KEY,
    };
    use std::rc::Rc;

    /// Memory store that rejects writes to a single key
    struct RejectingStore {
        rejected_key: &'static str,
        inner: MemoryPreferenceStore,
    }

    impl PreferenceStore for RejectingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            if key == self.rejected_key {
                return Err(PreferenceError::Database(rusqlite::Error::InvalidQuery));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), PreferenceError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_banner_labels() {
        let vm = MainViewModel::new(Rc::new(MemoryPreferenceStore::new()));
        assert_eq!(vm.home.label(), "49ers: 23");
        assert_eq!(vm.away.label(), "Buccaneers: 20");
        assert_eq!(vm.next_game, "Next Game: Seattle Seahawks at 49ers");
    }

    #[test]
    fn test_save_app_data_writes_both_keys() {
        let store = Rc::new(MemoryPreferenceStore::new());
        let vm = MainViewModel::new(store.clone());

        vm.save_app_data();

        assert_eq!(
            store.get(LAST_GAME_SCORE_KEY).as_deref(),
            Some("SF: 23 || Buccaneers: 20")
        );
        assert_eq!(
            store.get(NEXT_GAME_KEY).as_deref(),
            Some("Next Game: Seattle Seahawks at 49ers")
        );
        // Does not touch the schedule preference
        assert_eq!(store.get(SCHEDULE_IMAGE_KEY), None);
    }

    #[test]
    fn test_failed_score_write_still_saves_next_game() {
        let store = Rc::new(RejectingStore {
            rejected_key: LAST_GAME_SCORE_KEY,
            inner: MemoryPreferenceStore::new(),
        });
        let vm = MainViewModel::new(store.clone());

        vm.save_app_data();

        assert_eq!(store.get(LAST_GAME_SCORE_KEY), None);
        assert_eq!(
            store.get(NEXT_GAME_KEY).as_deref(),
            Some("Next Game: Seattle Seahawks at 49ers")
        );
    }

    #[test]
    fn test_failed_next_game_write_keeps_score() {
        let store = Rc::new(RejectingStore {
            rejected_key: NEXT_GAME_KEY,
            inner: MemoryPreferenceStore::new(),
        });
        let vm = MainViewModel::new(store.clone());

        vm.save_app_data();

        assert_eq!(
            store.get(LAST_GAME_SCORE_KEY).as_deref(),
            Some("SF: 23 || Buccaneers: 20")
        );
        assert_eq!(store.get(NEXT_GAME_KEY), None);
    }
}
