mod audio;
mod config;
mod controls;
mod game;
mod model;
mod prelude;
mod render;

use geng::prelude::*;

#[derive(clap::Parser)]
struct Opts {
    #[clap(long)]
    config: Option<std::path::PathBuf>,
    /// Start with sound disabled.
    #[clap(long)]
    mute: bool,
    #[clap(flatten)]
    geng: geng::CliArgs,
}

fn main() {
    logger::init();
    geng::setup_panic_handler();

    let opts: Opts = clap::Parser::parse();

    let mut geng_options = geng::ContextOptions::default();
    geng_options.window.title = "Forest Brawl".to_string();
    geng_options.with_cli(&opts.geng);

    Geng::run_with(&geng_options, |geng| async move {
        let config_path = opts
            .config
            .unwrap_or_else(|| run_dir().join("assets").join("config.ron"));
        let config = config::Config::load(&config_path)
            .await
            .unwrap_or_else(|err| {
                log::warn!("{:#}, falling back to built-in defaults", err);
                config::Config::default()
            });

        let settings = model::Settings {
            sound_enabled: !opts.mute,
            ..model::Settings::default()
        };

        let state = game::Game::new(&geng, config, settings);
        geng.run_state(state).await;
    });
}
