use serde::Deserialize;

use super::UserAgentCatalog;

#[derive(Debug, Deserialize)]
struct CatalogRow {
    uastr: String,
}

/// Load the ranked User Agent catalog embedded with this crate.
///
/// Rows are ordered most popular first; the popularity rank of an entry
/// is its position in the embedded dataset. Keeping the dataset fresh is
/// a data maintenance concern, the strings themselves carry no semantics
/// beyond what the interpreter extracts from them.
///
/// This function is only available if the `embed-catalog` feature is enabled.
pub fn load_embedded_catalog() -> UserAgentCatalog {
    let rows: Vec<CatalogRow> = serde_json::from_str(include_str!("embed_catalog.json"))
        .expect("Failed to deserialize embedded catalog");
    tracing::trace!(entries = rows.len(), "loaded embedded user agent catalog");
    rows.into_iter().map(|row| row.uastr).collect()
}

impl UserAgentCatalog {
    /// The catalog embedded with this crate, see [`load_embedded_catalog`].
    ///
    /// This method is only available if the `embed-catalog` feature is enabled.
    #[must_use]
    pub fn embedded() -> Self {
        load_embedded_catalog()
    }
}
