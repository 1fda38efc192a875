//! Dropdown selector for choosing a municipality.

use crate::state::AppState;
use dioxus::prelude::*;

/// Municipality dropdown selector.
///
/// Lists the sorted municipalities from AppState after an empty
/// "no selection" option, and writes the choice to `selected_region`.
#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let regions = state.regions.read().clone();
    let selected = (state.selected_region)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::info!("region_selector: selected {:?}", value);
        state.selected_region.set(value);
    };

    rsx! {
        div {
            style: "margin: 16px 0;",
            label {
                r#for: "region-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Selecione o Município para Detalhes"
            }
            select {
                id: "region-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    ""
                }
                for region in regions.iter() {
                    option {
                        value: "{region}",
                        selected: *region == selected,
                        "{region}"
                    }
                }
            }
        }
    }
}
