// gui/mod.rs
// GUI module root for image-autoclick

pub mod util;
mod components {
    pub mod header;
    pub mod instructions;
    pub mod preview_panel;
    pub mod settings_panel;
    pub mod status_panel;
}
pub mod dioxus_app; // main app
pub mod hooks;
