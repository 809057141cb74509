/// User interface module
///
/// - Image asset lookup (assets.rs)
/// - Colors and fonts (theme.rs)
/// - One view function per screen (screens.rs)

pub mod assets;
pub mod screens;
pub mod theme;
