// gui/components/preview_panel.rs
use crate::autoclick::PREVIEW_SIZE;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PreviewPanelProps {
    pub preview_url: Signal<Option<String>>,
    pub enabled: bool,
}

#[component]
pub fn PreviewPanel(props: PreviewPanelProps) -> Element {
    let frame_style = format!(
        "width:{PREVIEW_SIZE}px; height:{PREVIEW_SIZE}px; border-radius:8px; border:4px solid rgba(255,255,255,0.3); background:rgba(0,0,0,0.35); display:flex; align-items:center; justify-content:center; overflow:hidden;"
    );
    let url = props.preview_url.read().clone();

    rsx! {
        div { style: "background: rgba(255,255,255,0.1); padding: 12px; border-radius: 15px; border: 1px solid rgba(255,255,255,0.2); display:flex; flex-direction:column; align-items:center; gap:8px;",
            h2 { style: "margin:0; color:#87ceeb; font-size:1.1em; align-self:flex-start;", "📸 Preview" }
            div { style: "{frame_style}",
                if let Some(src) = url {
                    img { src: "{src}", width: "{PREVIEW_SIZE}", height: "{PREVIEW_SIZE}", style: "display:block;" }
                } else if props.enabled {
                    span { style: "opacity:0.7; font-size:0.9em;", "Waiting for first frame..." }
                } else {
                    span { style: "opacity:0.7; font-size:0.9em;", "Preview disabled" }
                }
            }
        }
    }
}
