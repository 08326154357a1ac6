// gui/components/instructions.rs
use dioxus::prelude::*;

const STEPS: [&str; 5] = [
    "Set the image name",
    "Adjust detection box size and threshold",
    "Click Save Settings to save your configuration",
    "Click Start to begin detection",
    "Click Stop to end detection",
];

#[component]
pub fn Instructions() -> Element {
    rsx! {
        div { style: "background: rgba(255,255,255,0.06); padding: 10px 14px; border-radius: 12px; border: 1px solid rgba(255,255,255,0.15); font-size:0.85em;",
            h3 { style: "margin:0 0 6px 0; font-size:1em;", "📖 Instructions" }
            ol { style: "margin:0; padding-left:20px;",
                for step in STEPS {
                    li { "{step}" }
                }
            }
            p { style: "margin:6px 0 0 0; opacity:0.85;", "The autoclicker clicks whenever the image is detected." }
        }
    }
}
