use iced::{Element, Task, Theme};
use std::rc::Rc;

use crate::config::AppConfig;
use crate::state::catalog::StaticCatalog;
use crate::state::main_screen::MainViewModel;
use crate::state::preferences::{MemoryPreferenceStore, SharedPreferences, SqlitePreferenceStore};
use crate::state::schedule::ScheduleViewModel;
use crate::ui::assets::AssetResolver;
use crate::ui::screens;

/// Screens reachable from the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Schedule,
    Injuries,
    FantasyPoints,
    Tips,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User tapped a navigation or Back button
    Navigate(Screen),
    /// User asked to save a new schedule image
    SaveSchedule(String),
}

/// Main application state
pub struct GamedayApp {
    screen: Screen,
    catalog: StaticCatalog,
    main: MainViewModel,
    schedule: ScheduleViewModel,
    assets: AssetResolver,
}

impl GamedayApp {
    /// Create the application from the resolved configuration
    pub fn new(config: &AppConfig) -> Self {
        let preferences = open_preferences(config);
        Self::with_preferences(preferences, AssetResolver::new(&config.assets_dir))
    }

    /// Create the application around an existing preference store
    pub fn with_preferences(preferences: SharedPreferences, assets: AssetResolver) -> Self {
        let catalog = StaticCatalog::new();
        tracing::info!(
            injuries = catalog.injuries().len(),
            tips = catalog.tips().len(),
            "49ers app initialized"
        );

        Self {
            screen: Screen::Main,
            catalog,
            main: MainViewModel::new(preferences.clone()),
            schedule: ScheduleViewModel::new(preferences),
            assets,
        }
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen) => {
                tracing::debug!(from = ?self.screen, to = ?screen, "navigate");
                if screen == Screen::Schedule {
                    self.schedule.activate();
                }
                self.screen = screen;
            }
            Message::SaveSchedule(image_name) => {
                self.schedule.save_schedule(&image_name);
            }
        }

        Task::none()
    }

    /// Build the user interface
    pub fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Main => screens::main_view(&self.main, &self.catalog, &self.assets),
            Screen::Schedule => screens::schedule_view(&self.schedule, &self.assets),
            Screen::Injuries => screens::injury_view(&self.catalog, &self.assets),
            Screen::FantasyPoints => screens::fantasy_view(&self.catalog, &self.assets),
            Screen::Tips => screens::tips_view(&self.catalog),
        }
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn schedule(&self) -> &ScheduleViewModel {
        &self.schedule
    }

    pub fn main(&self) -> &MainViewModel {
        &self.main
    }
}

/// Open the durable preference store, or fall back to an in-memory one.
///
/// The app stays usable without its database; saved preferences simply
/// don't outlive the process in that case.
pub fn open_preferences(config: &AppConfig) -> SharedPreferences {
    match SqlitePreferenceStore::open(config.db_path()) {
        Ok(store) => Rc::new(store),
        Err(e) => {
            tracing::error!(
                error = %e,
                path = %config.db_path().display(),
                "failed to open preference database, preferences will not persist"
            );
            Rc::new(MemoryPreferenceStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::preferences::{PreferenceStore, SCHEDULE_IMAGE_KEY};
    use crate::state::schedule::DEFAULT_SCHEDULE_IMAGE;

    fn app_with_store() -> (GamedayApp, Rc<MemoryPreferenceStore>) {
        let store = Rc::new(MemoryPreferenceStore::new());
        let app = GamedayApp::with_preferences(store.clone(), AssetResolver::new("assets"));
        (app, store)
    }

    #[test]
    fn test_starts_on_main_screen() {
        let (app, _) = app_with_store();
        assert_eq!(app.screen(), Screen::Main);
        assert_eq!(app.schedule().displayed_image(), DEFAULT_SCHEDULE_IMAGE);
        assert_eq!(app.main().home.label(), "49ers: 23");
    }

    #[test]
    fn test_entering_schedule_loads_saved_image() {
        let (mut app, store) = app_with_store();
        store.set(SCHEDULE_IMAGE_KEY, "week9").unwrap();

        let _ = app.update(Message::Navigate(Screen::Schedule));
        assert_eq!(app.screen(), Screen::Schedule);
        assert_eq!(app.schedule().displayed_image(), "week9");
    }

    #[test]
    fn test_save_schedule_message() {
        let (mut app, store) = app_with_store();

        let _ = app.update(Message::Navigate(Screen::Schedule));
        let _ = app.update(Message::SaveSchedule(DEFAULT_SCHEDULE_IMAGE.to_string()));

        assert_eq!(app.schedule().displayed_image(), DEFAULT_SCHEDULE_IMAGE);
        assert_eq!(
            store.get(SCHEDULE_IMAGE_KEY).as_deref(),
            Some(DEFAULT_SCHEDULE_IMAGE)
        );
    }

    #[test]
    fn test_back_to_main() {
        let (mut app, _) = app_with_store();
        let _ = app.update(Message::Navigate(Screen::Tips));
        assert_eq!(app.screen(), Screen::Tips);

        let _ = app.update(Message::Navigate(Screen::Main));
        assert_eq!(app.screen(), Screen::Main);
    }

    #[test]
    fn test_every_screen_builds_a_view() {
        let (mut app, _) = app_with_store();
        let screens = [
            Screen::Main,
            Screen::Schedule,
            Screen::Injuries,
            Screen::FantasyPoints,
            Screen::Tips,
        ];

        for screen in screens {
            let _ = app.update(Message::Navigate(screen));
            let _element: Element<'_, Message> = app.view();
        }
        assert!(matches!(app.theme(), Theme::Dark));
    }

    #[test]
    fn test_open_preferences_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();

        // The data dir is a regular file, so the database cannot be created
        let config = AppConfig {
            data_dir: blocker.join("data"),
            assets_dir: dir.path().to_path_buf(),
        };
        let preferences = open_preferences(&config);

        preferences.set(SCHEDULE_IMAGE_KEY, "in-memory").unwrap();
        assert_eq!(preferences.get(SCHEDULE_IMAGE_KEY).as_deref(), Some("in-memory"));
    }

    #[test]
    fn test_open_preferences_persists() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().join("data"),
            assets_dir: dir.path().to_path_buf(),
        };

        open_preferences(&config)
            .set(SCHEDULE_IMAGE_KEY, "durable")
            .unwrap();

        let mut app = GamedayApp::new(&config);
        let _ = app.update(Message::Navigate(Screen::Schedule));
        assert_eq!(app.schedule().displayed_image(), "durable");
        assert!(config.db_path().is_file());
    }
}
