use crate::gui::components::{
    header::Header, instructions::Instructions, preview_panel::PreviewPanel,
    settings_panel::SettingsPanel, status_panel::StatusPanel,
};
use crate::gui::hooks::{start_detection, stop_detection, use_run_signals, use_settings_signals};
use crate::settings::Settings;
use dioxus::prelude::*;
use std::path::PathBuf;

/// Values handed from `main` to the root component
#[derive(Clone)]
struct GuiContext {
    settings_path: PathBuf,
    settings: Settings,
}

pub fn run_gui(settings_path: PathBuf, settings: Settings) {
    use dioxus::desktop::{Config, WindowBuilder};
    let enable_borderless = true; // borderless window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Image Detection Autoclicker")
            .with_decorations(!enable_borderless) // false => no native title/menu
            .with_resizable(true)
            .with_inner_size(dioxus::desktop::LogicalSize::new(420, 800)),
    );
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(GuiContext {
            settings_path,
            settings,
        })
        .launch(App);
}

#[component]
fn App() -> Element {
    use dioxus::desktop::use_window; // access desktop window for dragging
    let desktop = use_window();
    let ctx = use_context::<GuiContext>();

    let settings = use_settings_signals(&ctx.settings);
    let mut run = use_run_signals();
    let settings_path = use_signal(|| ctx.settings_path.clone());

    let mut save_current = move || -> Option<Settings> {
        let current = settings.snapshot();
        let path = settings_path.peek().clone();
        match current.save(&path) {
            Ok(()) => {
                log::info!("💾 Settings saved to {}", path.display());
                Some(current)
            }
            Err(e) => {
                log::error!("Failed to save settings to {}: {}", path.display(), e);
                run.status.set(format!("❌ Save failed: {e}"));
                None
            }
        }
    };

    let running = *run.running.read();
    let threshold = *settings.threshold.read();
    let show_preview = *settings.show_preview.read();
    let version = env!("APP_VERSION_DISPLAY").to_string();
    let footer = format!(
        "© {} Built with Rust 🦀 and Dioxus ⚛️",
        env!("APP_BUILD_YEAR")
    );

    rsx! {
        // Main app container: vertical layout, fills viewport
        div { style: "height:97vh; display:flex; flex-direction:column; background:linear-gradient(135deg,#667eea 0%,#764ba2 100%); color:white; border:1px solid rgba(255,255,255,0.25); box-sizing:content-box;",
            // Scrollable content area
            div { style: "flex:1; overflow:auto; padding:8px; display:flex; flex-direction:column; gap:10px;",
                Header {
                    version: version,
                    on_drag: move |_| { let _ = desktop.window.drag_window(); },
                    on_close: move |_| {
                        stop_detection(run);
                        std::thread::spawn(|| std::process::exit(0));
                    }
                }
                SettingsPanel {
                    settings: settings,
                    running: running,
                    on_start: move |_| {
                        if let Some(current) = save_current() {
                            start_detection(current, run);
                        }
                    },
                    on_stop: move |_| stop_detection(run),
                    on_save: move |_| {
                        if save_current().is_some() {
                            run.status.set("💾 Settings saved".to_string());
                        }
                    }
                }
                StatusPanel { run: run, threshold: threshold }
                Instructions {}
                PreviewPanel { preview_url: run.preview_url, enabled: show_preview }
                // Credits/footer
                div { style: "margin-top:4px; text-align:left; font-size:0.7em; opacity:0.75; letter-spacing:0.5px;", "{footer}" }
            }
        }
    }
}
