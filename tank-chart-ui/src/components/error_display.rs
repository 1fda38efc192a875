//! Full-page failure notice.
//!
//! A dataset that cannot be loaded (missing sheet export, missing column,
//! malformed CSV) or a query that fails while building the page leaves no
//! figures worth showing. The dashboard then renders only this notice below
//! its header, instead of partially filled cards and empty maps.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Error chain, already formatted with `{:#}`.
    pub message: String,
}

/// Replaces the dashboard body with the load or query error.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        section {
            role: "alert",
            style: "padding: 16px 20px; margin: 16px 0; background: #FFF3E0; color: #B71C1C; border-left: 6px solid #E53935; border-radius: 4px;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 18px;",
                "Não foi possível montar o painel"
            }
            p {
                style: "margin: 0 0 8px 0; font-family: monospace; white-space: pre-wrap;",
                "{props.message}"
            }
            p {
                style: "margin: 0; color: #5D4037; font-size: 14px;",
                "Verifique se a planilha exportada contém as colunas MUNICÍPIO, CNPJ, Razão Social, "
                "Produto, Nome Tanque, Tancagem (m³), LATITUDE e LONGITUDE."
            }
        }
    }
}
