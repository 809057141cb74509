use super::preferences::{SharedPreferences, SCHEDULE_IMAGE_KEY};

/// Schedule image shown until the user saves one
pub const DEFAULT_SCHEDULE_IMAGE: &str = "49ersschedule";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleState {
    /// Nothing stored, the default image is displayed
    Unset,
    /// Displaying the last saved image name
    Saved(String),
}

/// View-model of the schedule screen.
///
/// Holds the only read path of the preference store: `activate` loads the
/// saved schedule image, `save_schedule` persists a new one.
pub struct ScheduleViewModel {
    preferences: SharedPreferences,
    state: ScheduleState,
}

impl ScheduleViewModel {
    pub fn new(preferences: SharedPreferences) -> Self {
        Self {
            preferences,
            state: ScheduleState::Unset,
        }
    }

    /// Called whenever the schedule screen is entered
    pub fn activate(&mut self) {
        self.state = match self.preferences.get(SCHEDULE_IMAGE_KEY) {
            Some(image_name) => ScheduleState::Saved(image_name),
            None => ScheduleState::Unset,
        };
    }

    /// Persist `image_name` and display it.
    ///
    /// A failed write is logged; the screen still shows the new image
    /// for the rest of the session.
    pub fn save_schedule(&mut self, image_name: &str) {
        if let Err(e) = self.preferences.set(SCHEDULE_IMAGE_KEY, image_name) {
            tracing::warn!(error = %e, image_name, "failed to save schedule image");
        } else {
            tracing::info!(image_name, "schedule image saved");
        }
        self.state = ScheduleState::Saved(image_name.to_string());
    }

    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    /// Image identifier to display right now
    pub fn displayed_image(&self) -> &str {
        match &self.state {
            ScheduleState::Unset => DEFAULT_SCHEDULE_IMAGE,
            ScheduleState::Saved(image_name) => image_name,
        }
    }
}
