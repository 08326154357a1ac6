use image_autoclick::args::{Args, Mode, print_help};
use image_autoclick::gui::dioxus_app::run_gui;
use image_autoclick::headless::run_headless;
use image_autoclick::settings::Settings;
use std::time::Duration;

fn main() {
    let args = match Args::parse() {
        Ok(Some(args)) => args,
        Ok(None) => return,
        Err(e) => {
            eprintln!("❌ {e}");
            print_help();
            std::process::exit(1);
        }
    };

    let default_level = if args.debug_mode { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let settings = Settings::load_or_init(&args.settings_path);

    match args.mode {
        Mode::Gui => {
            log::info!(
                "🚀 Launching Image Detection Autoclicker GUI v{}",
                env!("APP_VERSION_DISPLAY")
            );
            run_gui(args.settings_path, settings);
        }
        Mode::Headless => {
            log::info!(
                "🚀 Headless detection: '{}' box={} threshold={:.2}",
                settings.image_name,
                settings.box_size,
                settings.threshold
            );
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("❌ Failed to start async runtime: {e}");
                    std::process::exit(1);
                }
            };
            let timeout = args.timeout_secs.map(Duration::from_secs);
            match rt.block_on(run_headless(settings, timeout)) {
                Ok(summary) => log::info!(
                    "✅ Finished: {} frames, {} clicks",
                    summary.frames,
                    summary.clicks
                ),
                Err(e) => {
                    log::error!("❌ {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
