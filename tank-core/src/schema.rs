//! Column-name constants for the "Folha1" sheet export.
//! Header matching is case-sensitive and happens after trimming.

/// Accented municipality header as exported by the source workbook.
pub const MUNICIPIO_SOURCE: &str = "MUNICÍPIO";
/// Internal name the municipality column is renamed to before use.
pub const MUNICIPIO: &str = "Municipio";
pub const CNPJ: &str = "CNPJ";
pub const RAZAO_SOCIAL: &str = "Razão Social";
pub const PRODUTO: &str = "Produto";
pub const NOME_TANQUE: &str = "Nome Tanque";
pub const TANCAGEM: &str = "Tancagem (m³)";
pub const LATITUDE: &str = "LATITUDE";
pub const LONGITUDE: &str = "LONGITUDE";

/// Map a raw header to its internal name.
///
/// Only the municipality header is renamed; everything else passes through
/// trimmed. A leading byte-order mark from spreadsheet exports is dropped.
pub fn internal_name(raw: &str) -> &str {
    let name = raw.trim_start_matches('\u{feff}').trim();
    if name == MUNICIPIO_SOURCE {
        MUNICIPIO
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn municipality_header_is_renamed() {
        assert_eq!(internal_name("MUNICÍPIO"), "Municipio");
        assert_eq!(internal_name(" MUNICÍPIO "), "Municipio");
        assert_eq!(internal_name("Municipio"), "Municipio");
    }

    #[test]
    fn other_headers_pass_through() {
        assert_eq!(internal_name("Tancagem (m³)"), TANCAGEM);
        assert_eq!(internal_name("\u{feff}CNPJ"), CNPJ);
    }

    #[test]
    fn header_match_is_case_sensitive() {
        assert_eq!(internal_name("município"), "município");
        assert_ne!(internal_name("cnpj"), CNPJ);
    }
}
