use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; padding: 40px; color: #666;",
            "Carregando dados..."
        }
    }
}
