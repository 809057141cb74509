use iced::Task;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use niners_gameday::app::GamedayApp;
use niners_gameday::config::AppConfig;

fn main() -> iced::Result {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        assets_dir = %config.assets_dir.display(),
        "starting 49ers app"
    );

    iced::application("49ers App", GamedayApp::update, GamedayApp::view)
        .theme(GamedayApp::theme)
        .centered()
        .run_with(move || (GamedayApp::new(&config), Task::none()))
}
