use anyhow::Context;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use duelchess::core::{load_settings, save_settings, Cli, CorePlugin, WindowConfig};
use duelchess::game::GamePlugin;
use duelchess::rendering::RenderingPlugin;
use duelchess::ui::UiPlugin;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings_path = cli.settings_path();
    let (settings, source) = load_settings(&settings_path);

    if cli.write_settings {
        save_settings(&settings, &settings_path)
            .with_context(|| format!("writing settings to {}", settings_path.display()))?;
    }

    let window = WindowConfig::from_settings(&settings).to_window();

    let exit = App::new()
        // Core plugins
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                })
                .set(LogPlugin {
                    filter: cli.log_filter.clone(),
                    ..default()
                }),
        )
        .add_plugins(CorePlugin { settings, source })
        .add_plugins(EguiPlugin::default())
        // Game systems
        .add_plugins(GamePlugin)
        .add_plugins(RenderingPlugin)
        .add_plugins(UiPlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("duelchess exited with code {code}"),
    }
}
