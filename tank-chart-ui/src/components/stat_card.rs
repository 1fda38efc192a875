//! Headline metric card.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    pub label: String,
    /// Already formatted for display
    pub value: String,
}

/// Green card with a label over a large value.
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; background-color: #28a745; padding: 10px; border-radius: 10px;",
            h4 {
                style: "color: #f7fafa; margin: 0 0 4px 0;",
                "{props.label}"
            }
            h2 {
                style: "color: #f7fafa; margin: 0;",
                "{props.value}"
            }
        }
    }
}
