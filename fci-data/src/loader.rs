//! JSON loading for the pre-aggregated district document.
//!
//! The document is an object of district name -> record, with the `"all"`
//! aggregate alongside the real districts. Chart apps embed it at compile
//! time via `include_str!` and parse it on mount.

use crate::models::GroupedData;

/// Parse a pre-aggregated district document from a JSON string.
///
/// Key order of the document is preserved in the returned mapping.
pub fn load_grouped_data(json: &str) -> anyhow::Result<GroupedData> {
    let data: GroupedData = serde_json::from_str(json)?;
    log::debug!("loaded {} district entries", data.len());
    Ok(data)
}
