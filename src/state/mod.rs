/// State management module
///
/// This module handles all application state, including:
/// - Preference storage backed by SQLite (preferences.rs)
/// - Shared data structures (data.rs)
/// - The built-in team catalog (catalog.rs)
/// - Toolkit-independent display rules (display.rs)
/// - Screen view-models (main_screen.rs, schedule.rs)

pub mod catalog;
pub mod data;
pub mod display;
pub mod main_screen;
pub mod preferences;
pub mod schedule;
