//! CSV Export
//!
//! Writes asset rows to a CSV file, one record per row.

use std::path::Path;

use super::ExportError;
use crate::domain::assets::Asset;

/// Write assets to a CSV file, returning the number of rows written.
pub fn write_assets(path: &Path, assets: &[&Asset]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["id", "name", "site", "status", "updated_at"])?;

    for asset in assets {
        wtr.write_record([
            asset.id.as_str(),
            asset.name.as_str(),
            asset.site.as_str(),
            asset.status.title(),
            asset.updated_at.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(assets.len())
}
