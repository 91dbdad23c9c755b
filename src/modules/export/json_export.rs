//! JSON Export
//!
//! Writes asset rows as a JSON array of objects.

use std::fs;
use std::path::Path;

use serde_json::json;

use super::ExportError;
use crate::domain::assets::Asset;

/// Write assets to a JSON file, returning the number of rows written.
pub fn write_assets(path: &Path, assets: &[&Asset]) -> Result<usize, ExportError> {
    let rows: Vec<serde_json::Value> = assets
        .iter()
        .map(|asset| {
            json!({
                "id": asset.id,
                "name": asset.name,
                "site": asset.site,
                "status": asset.status.title(),
                "updated_at": asset.updated_at,
            })
        })
        .collect();

    let content = serde_json::to_string_pretty(&rows)?;
    fs::write(path, content)?;
    Ok(assets.len())
}
