/// Colors and fonts shared by the screens
use iced::font::Weight;
use iced::{Color, Font};

use crate::state::display::StatusTreatment;

/// Home team score
pub const HOME_COLOR: Color = Color::from_rgb(0.86, 0.12, 0.12);
/// Away team score
pub const AWAY_COLOR: Color = Color::from_rgb(0.18, 0.42, 0.92);
/// Fantasy points line
pub const POINTS_COLOR: Color = Color::from_rgb(0.25, 0.55, 1.0);
/// Star next to fantasy points
pub const STAR_COLOR: Color = Color::from_rgb(1.0, 0.84, 0.0);

const ALERT_COLOR: Color = Color::from_rgb(0.92, 0.16, 0.16);
const WARNING_COLOR: Color = Color::from_rgb(1.0, 0.58, 0.0);

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Red for players that are out, orange for everything else
pub fn treatment_color(treatment: StatusTreatment) -> Color {
    match treatment {
        StatusTreatment::Alert => ALERT_COLOR,
        StatusTreatment::Warning => WARNING_COLOR,
    }
}
