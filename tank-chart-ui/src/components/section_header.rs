//! Subheader for dashboard sections.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    pub title: String,
    /// Optional line under the title (units, notes)
    #[props(default = String::new())]
    pub note: String,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin: 24px 0 8px 0;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 20px; color: #004d40;",
                "{props.title}"
            }
            if !props.note.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.note}"
                }
            }
        }
    }
}
