//! Container for a D3 chart or a Leaflet map.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the chart or map script renders into
    pub id: String,
    /// Fixed height in pixels. Leaflet needs an explicit height.
    #[props(default = 400)]
    pub height: u32,
}

/// A sized div that D3.js or Leaflet draws into.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; width: 100%; position: relative; overflow-x: auto;",
        props.height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
