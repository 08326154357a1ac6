// gui/components/status_panel.rs
use crate::gui::hooks::RunSignals;
use crate::gui::util::confidence_style;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct StatusPanelProps {
    pub run: RunSignals,
    pub threshold: f32,
}

#[component]
pub fn StatusPanel(props: StatusPanelProps) -> Element {
    let run = props.run;
    let confidence = *run.confidence.read();
    let fps_text = format!("FPS: {}", run.fps.read());
    let conf_text = format!("Confidence: {confidence:.2}");
    let clicks_text = format!("Clicks: {}", run.clicks.read());
    let badge_style = confidence_style(confidence, props.threshold);
    let status_text = run.status.read().clone();

    rsx! {
        div { style: "background: rgba(255,255,255,0.1); padding: 12px 14px; border-radius: 15px; border: 1px solid rgba(255,255,255,0.2); display:flex; flex-direction:column; gap:8px;",
            div { style: "display:flex; gap:10px; align-items:center; flex-wrap:wrap; font-family:monospace;",
                span { "⏱️ {fps_text}" }
                span { style: "{badge_style}", "{conf_text}" }
                span { "🖱️ {clicks_text}" }
            }
            div { style: "font-size:0.85em; opacity:0.9; word-break:break-word;", "{status_text}" }
        }
    }
}
