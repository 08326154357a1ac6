// gui/components/settings_panel.rs
use crate::gui::hooks::SettingsSignals;
use crate::gui::util::{THRESHOLD_SLIDER_MAX, THRESHOLD_SLIDER_MIN, slider_threshold};
use crate::settings::{BOX_SIZE_MAX, BOX_SIZE_MIN};
use dioxus::prelude::*;

const BUTTON_BASE: &str = "color:white; padding:10px 16px; border:none; border-radius:10px; font-size:1em; font-weight:bold; min-width:90px;";

#[derive(Props, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub settings: SettingsSignals,
    pub running: bool,
    pub on_start: EventHandler<()>,
    pub on_stop: EventHandler<()>,
    pub on_save: EventHandler<()>,
}

#[component]
pub fn SettingsPanel(props: SettingsPanelProps) -> Element {
    let SettingsSignals {
        mut image_name,
        mut box_size,
        mut threshold,
        mut show_preview,
    } = props.settings;
    let running = props.running;

    let image_value = image_name.read().clone();
    let box_value = *box_size.read();
    let threshold_value = *threshold.read();
    let box_label = format!("📐 Box size: {box_value} px");
    let threshold_label = format!("🎚️ Threshold: {threshold_value:.2}");
    let start_style = if running {
        format!("background:#555; cursor:not-allowed; opacity:0.6; {BUTTON_BASE}")
    } else {
        format!("background:linear-gradient(45deg,#28a745,#20c997); cursor:pointer; {BUTTON_BASE}")
    };
    let stop_style = if running {
        format!("background:linear-gradient(45deg,#dc3545,#e74c3c); cursor:pointer; {BUTTON_BASE}")
    } else {
        format!("background:#555; cursor:not-allowed; opacity:0.6; {BUTTON_BASE}")
    };
    let save_style = format!("background:linear-gradient(45deg,#007bff,#0056b3); cursor:pointer; {BUTTON_BASE}");

    rsx! {
        div { style: "background: rgba(255,255,255,0.1); backdrop-filter: blur(10px); padding: 14px; border-radius: 15px; border: 1px solid rgba(255,255,255,0.2); display:flex; flex-direction:column; gap:10px;",
            h2 { style: "margin:0; color:#87ceeb; font-size:1.1em;", "⚙️ Settings" }
            label { style: "display:flex; flex-direction:column; gap:4px; font-size:0.9em;",
                "🖼️ Image file"
                input {
                    r#type: "text",
                    value: "{image_value}",
                    oninput: move |evt| image_name.set(evt.value()),
                    style: "padding:6px; border-radius:6px; border:1px solid rgba(255,255,255,0.3); background:rgba(0,0,0,0.25); color:white;"
                }
            }
            label { style: "display:flex; flex-direction:column; gap:4px; font-size:0.9em;",
                "{box_label}"
                input {
                    r#type: "range",
                    min: "{BOX_SIZE_MIN}",
                    max: "{BOX_SIZE_MAX}",
                    step: "1",
                    value: "{box_value}",
                    oninput: move |evt| {
                        if let Ok(v) = evt.value().parse::<u32>() {
                            box_size.set(v.clamp(BOX_SIZE_MIN, BOX_SIZE_MAX));
                        }
                    }
                }
            }
            label { style: "display:flex; flex-direction:column; gap:4px; font-size:0.9em;",
                "{threshold_label}"
                input {
                    r#type: "range",
                    min: "{THRESHOLD_SLIDER_MIN}",
                    max: "{THRESHOLD_SLIDER_MAX}",
                    step: "0.01",
                    value: "{threshold_value}",
                    oninput: move |evt| {
                        if let Ok(v) = evt.value().parse::<f32>() {
                            threshold.set(slider_threshold(v));
                        }
                    }
                }
            }
            div { style: "display:flex; align-items:center; gap:8px;",
                input {
                    r#type: "checkbox",
                    id: "show-preview-checkbox",
                    checked: *show_preview.read(),
                    onchange: move |evt| show_preview.set(evt.value().parse().unwrap_or(false)),
                    style: "width:18px; height:18px; cursor:pointer;"
                }
                label { r#for: "show-preview-checkbox", style: "font-size:0.95em; cursor:pointer; user-select:none;", "👁️ Show preview" }
            }
            div { style: "display:flex; gap:10px; flex-wrap:wrap; justify-content:center;",
                button { style: "{start_style}", disabled: running, onclick: move |_| props.on_start.call(()), "▶️ Start" }
                button { style: "{stop_style}", disabled: !running, onclick: move |_| props.on_stop.call(()), "⏹️ Stop" }
                button { style: "{save_style}", onclick: move |_| props.on_save.call(()), "💾 Save Settings" }
            }
        }
    }
}
